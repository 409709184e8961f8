use std::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::grid::{invert, transpose, Grid, Tile};
use crate::row::{move_row_left, row_is_left_movable, Score};

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
}

/// Cell coordinates as `(row, col)`.
pub type Position = (usize, usize);

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },
    #[error("grid is {found:?}, board is {expected:?} (height, width)")]
    DimensionMismatch { expected: (usize, usize), found: (usize, usize) },
    #[error("no empty cell to spawn into")]
    NoEmptyCell,
}

/// Default winning tile.
pub const DEFAULT_WIN_VALUE: Tile = 2048;

/// A 2048 board: the grid plus score bookkeeping and the winning threshold.
///
/// The board holds no RNG of its own; every operation that spawns a tile
/// borrows one, which keeps games reproducible under a seeded RNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    score: Score,
    highscore: Score,
    win_value: Tile,
}

impl Board {
    /// An empty board. Call [`Board::reset`] to place the opening tiles.
    pub fn new(height: usize, width: usize, win_value: Tile) -> Self {
        Board { grid: Grid::empty(height, width), score: 0, highscore: 0, win_value }
    }

    /// A board starting from an explicit grid with zero score.
    pub fn from_grid(grid: Grid, win_value: Tile) -> Self {
        Board { grid, score: 0, highscore: 0, win_value }
    }

    #[inline]
    pub fn grid(&self) -> &Grid { &self.grid }

    #[inline]
    pub fn score(&self) -> Score { self.score }

    #[inline]
    pub fn highscore(&self) -> Score { self.highscore }

    #[inline]
    pub fn win_value(&self) -> Tile { self.win_value }

    #[inline]
    pub fn height(&self) -> usize { self.grid.height() }

    #[inline]
    pub fn width(&self) -> usize { self.grid.width() }

    /// Highest tile on the board.
    #[inline]
    pub fn max_tile(&self) -> Tile { self.grid.max_tile() }

    #[inline]
    pub fn count_empty(&self) -> usize { self.grid.count_empty() }

    /// Replace the grid in place, keeping score and highscore.
    ///
    /// The new grid must have the board's dimensions.
    pub fn set_grid(&mut self, grid: Grid) -> Result<(), EngineError> {
        let expected = (self.height(), self.width());
        let found = (grid.height(), grid.width());
        if expected != found {
            return Err(EngineError::DimensionMismatch { expected, found });
        }
        self.grid = grid;
        Ok(())
    }

    /// Return the grid after sliding/merging in `dir`, and the points earned.
    /// The board is not touched.
    pub fn shift(&self, dir: Direction) -> (Grid, Score) {
        shift(&self.grid, dir)
    }

    /// True if moving in `dir` would change the grid.
    pub fn is_movable(&self, dir: Direction) -> bool {
        is_movable(&self.grid, dir)
    }

    /// Slide/merge in `dir`, add the merge points to the score and spawn one
    /// tile.
    ///
    /// Returns `false`, leaving the board untouched, when nothing would move.
    ///
    /// ```
    /// use term_2048::engine::{Board, Direction};
    /// use term_2048::grid::Grid;
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(3);
    /// let grid = Grid::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap();
    /// let mut b = Board::from_grid(grid, 2048);
    /// assert!(b.move_tiles(Direction::Left, &mut rng));
    /// assert_eq!(b.score(), 4);
    /// assert_eq!(b.grid().get(0, 0), Some(4));
    /// ```
    pub fn move_tiles<R: Rng + ?Sized>(&mut self, dir: Direction, rng: &mut R) -> bool {
        if !self.is_movable(dir) {
            debug!("move {:?} rejected: nothing to slide or merge", dir);
            return false;
        }
        let (grid, gained) = self.shift(dir);
        self.grid = grid;
        self.score += gained;
        if let Err(e) = self.spawn(rng) {
            warn!("move {:?} left no room for a new tile: {}", dir, e);
        }
        true
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Fails with [`EngineError::NoEmptyCell`] on a full grid, leaving it
    /// unchanged.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Position, EngineError> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return Err(EngineError::NoEmptyCell);
        }
        let value = generate_random_tile(rng);
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        self.grid.set(row, col, value);
        debug!("spawned {} at ({}, {})", value, row, col);
        Ok((row, col))
    }

    /// True once any tile has reached the winning value.
    pub fn is_win(&self) -> bool { self.max_tile() >= self.win_value }

    /// True if no direction can change the grid.
    pub fn is_gameover(&self) -> bool {
        !Direction::ALL.iter().any(|&dir| self.is_movable(dir))
    }

    /// Start a new game: fold the score into the highscore, clear the grid and
    /// spawn the two opening tiles.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        self.highscore = self.highscore.max(self.score);
        self.score = 0;
        self.grid = Grid::empty(self.height(), self.width());
        self.spawn(rng)?;
        self.spawn(rng)?;
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "score {} (best {})", self.score, self.highscore)?;
        write!(f, "{}", self.grid)
    }
}

/// Slide/merge a whole grid in `dir`. No randomness.
///
/// Every direction is reduced to "move left" on a transformed grid:
/// Right inverts, Up transposes, Down transposes and inverts.
pub fn shift(grid: &Grid, dir: Direction) -> (Grid, Score) {
    match dir {
        Direction::Left => shift_left(grid),
        Direction::Right => {
            let (g, s) = shift_left(&invert(grid));
            (invert(&g), s)
        }
        Direction::Up => {
            let (g, s) = shift_left(&transpose(grid));
            (transpose(&g), s)
        }
        Direction::Down => {
            let (g, s) = shift(&transpose(grid), Direction::Right);
            (transpose(&g), s)
        }
    }
}

/// True if `shift(grid, dir)` would change the grid.
pub fn is_movable(grid: &Grid, dir: Direction) -> bool {
    match dir {
        Direction::Left => grid.rows().iter().any(|r| row_is_left_movable(r)),
        Direction::Right => is_movable(&invert(grid), Direction::Left),
        Direction::Up => is_movable(&transpose(grid), Direction::Left),
        Direction::Down => is_movable(&transpose(grid), Direction::Right),
    }
}

fn shift_left(grid: &Grid) -> (Grid, Score) {
    let mut total: Score = 0;
    let out = grid.map_rows(|row| {
        let (resolved, gained) = move_row_left(row);
        total += gained;
        resolved
    });
    (out, total)
}

// 0..100 draw, above 89 gives a 4
fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..100) > 89 { 4 } else { 2 }
}

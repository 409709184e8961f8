use std::fmt;

use crate::engine::EngineError;

/// A single cell value. `0` is an empty cell, anything else is a tile.
pub type Tile = u32;

/// Rectangular board contents, stored as rows of cells.
///
/// Every row holds exactly `width` cells and there are exactly `height`
/// rows; the constructors refuse anything else.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    /// An all-empty grid of the given dimensions.
    pub fn empty(height: usize, width: usize) -> Self {
        Grid { rows: vec![vec![0; width]; height] }
    }

    /// Build a grid from explicit rows, rejecting ragged input.
    ///
    /// ```
    /// use term_2048::grid::Grid;
    /// let g = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!((g.height(), g.width()), (2, 2));
    /// assert!(Grid::from_rows(vec![vec![2, 0], vec![4]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, EngineError> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(EngineError::EmptyGrid),
        };
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(EngineError::RaggedGrid { row, expected: width, found: r.len() });
        }
        Ok(Grid { rows })
    }

    #[inline]
    pub fn height(&self) -> usize { self.rows.len() }

    #[inline]
    pub fn width(&self) -> usize { self.rows.first().map_or(0, Vec::len) }

    #[inline]
    pub fn rows(&self) -> &[Vec<Tile>] { &self.rows }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        self.rows[row][col] = value;
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Tile> + '_ {
        self.rows.iter().flat_map(|r| r.iter().copied())
    }

    /// Positions `(row, col)` of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, r)| {
                r.iter().enumerate().filter(|(_, v)| **v == 0).map(move |(j, _)| (i, j))
            })
            .collect()
    }

    pub fn count_empty(&self) -> usize { self.cells().filter(|&v| v == 0).count() }

    /// Highest value on the grid, `0` when empty.
    pub fn max_tile(&self) -> Tile { self.cells().max().unwrap_or(0) }

    /// Apply `f` to every row, producing a new grid.
    pub(crate) fn map_rows<F>(&self, f: F) -> Grid
    where
        F: FnMut(&[Tile]) -> Vec<Tile>,
    {
        Grid { rows: self.rows.iter().map(Vec::as_slice).map(f).collect() }
    }

    pub fn transpose(&self) -> Grid { transpose(self) }

    pub fn invert(&self) -> Grid { invert(self) }
}

/// `out[i][j] = grid[j][i]`; height and width swap.
pub fn transpose(grid: &Grid) -> Grid {
    let rows = (0..grid.width())
        .map(|j| grid.rows.iter().map(|r| r[j]).collect())
        .collect();
    Grid { rows }
}

/// Mirror every row left-to-right.
pub fn invert(grid: &Grid) -> Grid {
    Grid { rows: grid.rows.iter().map(|r| r.iter().rev().copied().collect()).collect() }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows.iter()).finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|&v| format!("{v:>5}")).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = EngineError;
    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> { Grid::from_rows(rows) }
}

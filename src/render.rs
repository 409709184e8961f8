//! Text layout of a frame. No terminal I/O happens here; a front-end
//! takes the lines and paints them.

use crate::engine::Board;
use crate::grid::{Grid, Tile};
use crate::row::Score;
use crate::session::SessionState;

pub const HELP_MOVES: &str = "(W)Up (S)Down (A)Left (D)Right";
pub const HELP_SESSION: &str = "    (R)Restart   (Q)Exit";
pub const WIN_BANNER: &str = " Congratulations! YOU WIN!";
pub const GAMEOVER_BANNER: &str = "           GAME OVER";

/// A snapshot of what needs drawing.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub grid: &'a Grid,
    pub score: Score,
    pub highscore: Score,
    pub state: SessionState,
    /// Help text or the win/game-over banner under the grid.
    pub footer: &'static str,
}

impl<'a> View<'a> {
    pub fn new(board: &'a Board, state: SessionState) -> Self {
        let footer = match state {
            SessionState::Win => WIN_BANNER,
            SessionState::Gameover => GAMEOVER_BANNER,
            // a fresh board can already be won or locked
            SessionState::Init | SessionState::Game if board.is_win() => WIN_BANNER,
            SessionState::Init | SessionState::Game if board.is_gameover() => GAMEOVER_BANNER,
            SessionState::Init | SessionState::Game => HELP_MOVES,
        };
        View {
            grid: board.grid(),
            score: board.score(),
            highscore: board.highscore(),
            state,
            footer,
        }
    }

    /// The full frame, one string per screen line.
    ///
    /// ```
    /// use term_2048::engine::Board;
    /// use term_2048::grid::Grid;
    /// use term_2048::render::View;
    /// use term_2048::session::SessionState;
    /// let board = Board::from_grid(Grid::from_rows(vec![vec![2, 0]]).unwrap(), 2048);
    /// let lines = View::new(&board, SessionState::Game).lines();
    /// assert_eq!(lines[0], "SCORE: 0");
    /// assert_eq!(lines[1], "+------+------+");
    /// assert_eq!(lines[2], "|  2   |      |");
    /// ```
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(2 * self.grid.height() + 5);
        out.push(format!("SCORE: {}", self.score));
        if self.highscore != 0 {
            out.push(format!("HIGHSCORE: {}", self.highscore));
        }
        let separator = separator_line(self.grid.width());
        for row in self.grid.rows() {
            out.push(separator.clone());
            out.push(row_line(row));
        }
        out.push(separator);
        out.push(self.footer.to_string());
        out.push(HELP_SESSION.to_string());
        out
    }
}

/// `+------+------+ ... +`
pub fn separator_line(width: usize) -> String {
    let mut line = "+------".repeat(width);
    line.push('+');
    line
}

/// `|  2   |      | 16   | ... |`
pub fn row_line(row: &[Tile]) -> String {
    let mut line: String = row
        .iter()
        .map(|&v| if v > 0 { format!("|{v:^5} ") } else { "|      ".to_string() })
        .collect();
    line.push('|');
    line
}

//! The game loop as a small state machine over a [`Board`].
//!
//! ```text
//! Init --(reset)--> Game --move--> Game | Win | Gameover
//!   ^                |  \
//!   +---- Restart ---+   +-- Exit --> (loop ends)
//! ```
//!
//! Win and Gameover only react to Restart and Exit.

use std::io;

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::GameConfig;
use crate::engine::{Board, Direction, EngineError};
use crate::render::View;

/// Everything the player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Up,
    Left,
    Down,
    Right,
    Restart,
    Exit,
}

impl Intent {
    /// The board direction for a movement intent.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Intent::Up => Some(Direction::Up),
            Intent::Left => Some(Direction::Left),
            Intent::Down => Some(Direction::Down),
            Intent::Right => Some(Direction::Right),
            Intent::Restart | Intent::Exit => None,
        }
    }
}

impl From<Direction> for Intent {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Intent::Up,
            Direction::Left => Intent::Left,
            Direction::Down => Intent::Down,
            Direction::Right => Intent::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Init,
    Game,
    Win,
    Gameover,
}

/// Whether the loop keeps going after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("front-end io error: {0}")]
    Io(#[from] io::Error),
}

/// Drawing and input, supplied by whoever owns the screen.
pub trait Frontend {
    /// Redraw the whole screen.
    fn draw(&mut self, view: &View<'_>) -> io::Result<()>;

    /// Block until the player produces a bound intent.
    fn next_intent(&mut self) -> io::Result<Intent>;
}

/// One player's session: the board, the current state and the spawn RNG.
pub struct Session<R: Rng = StdRng> {
    board: Board,
    state: SessionState,
    rng: R,
}

impl Session<StdRng> {
    /// Build a session from validated config. The RNG is seeded from
    /// `config.seed` when present.
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::new(config.height, config.width, config.win_value);
        Session::new(board, rng)
    }
}

impl<R: Rng> Session<R> {
    /// A session in `Init`; the board is reset on entry.
    pub fn new(board: Board, rng: R) -> Self {
        Session { board, state: SessionState::Init, rng }
    }

    #[inline]
    pub fn state(&self) -> SessionState { self.state }

    #[inline]
    pub fn board(&self) -> &Board { &self.board }

    /// Mutable access for forcing positions.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board { &mut self.board }

    /// What the front-end should paint right now.
    pub fn view(&self) -> View<'_> {
        View::new(&self.board, self.state)
    }

    /// The automatic `Init -> Game` step: reset the board.
    ///
    /// Does nothing outside `Init`.
    pub fn enter(&mut self) -> Result<SessionState, SessionError> {
        if self.state == SessionState::Init {
            self.board.reset(&mut self.rng)?;
            info!(
                "new game on a {}x{} board (highscore {})",
                self.board.height(),
                self.board.width(),
                self.board.highscore()
            );
            self.transition(SessionState::Game);
        }
        Ok(self.state)
    }

    /// Apply one intent: at most one transition.
    ///
    /// In `Init` nothing is read from the intent except `Exit`; any other
    /// intent just performs the entry reset.
    pub fn apply(&mut self, intent: Intent) -> Result<Flow, SessionError> {
        if intent == Intent::Exit {
            debug!("{:?} -> exit", self.state);
            return Ok(Flow::Exit);
        }
        match self.state {
            SessionState::Init => {
                self.enter()?;
            }
            SessionState::Game => match intent.direction() {
                Some(dir) => self.play(dir),
                None => self.transition(SessionState::Init),
            },
            SessionState::Win | SessionState::Gameover => {
                if intent == Intent::Restart {
                    self.transition(SessionState::Init);
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Drive the session against a front-end until the player exits.
    pub fn run<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<(), SessionError> {
        loop {
            if self.state == SessionState::Init {
                self.enter()?;
                continue;
            }
            frontend.draw(&self.view())?;
            let intent = frontend.next_intent()?;
            if self.apply(intent)? == Flow::Exit {
                let (score, best) = (self.board.score(), self.board.highscore());
                info!("session over: score {}, highscore {}", score, best);
                return Ok(());
            }
        }
    }

    fn play(&mut self, dir: Direction) {
        if !self.board.move_tiles(dir, &mut self.rng) {
            return;
        }
        if self.board.is_win() {
            self.transition(SessionState::Win);
        } else if self.board.is_gameover() {
            self.transition(SessionState::Gameover);
        }
    }

    fn transition(&mut self, next: SessionState) {
        debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

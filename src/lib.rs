//! term-2048: a 2048 board engine with a terminal front-end
//!
//! This crate provides:
//! - `Grid` transforms (`transpose`, `invert`) and the single-row resolver
//!   every move is built from (`row` module)
//! - A `Board` with move, movability, spawn, win and game-over checks
//! - A `Session` state machine (Init / Game / Win / Gameover) that turns
//!   player intents into board operations
//! - Text rendering and a crossterm-backed `Frontend`
//!
//! Quick start:
//! ```
//! use term_2048::engine::{Board, Direction};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic opening with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut board = Board::new(4, 4, 2048);
//! board.reset(&mut rng).unwrap();
//! assert_eq!(board.count_empty(), 14);
//!
//! for dir in Direction::ALL {
//!     board.move_tiles(dir, &mut rng);
//! }
//! assert!(!board.is_win());
//! ```
//!
//! Driving a session by hand
//! ```
//! use term_2048::config::GameConfig;
//! use term_2048::session::{Flow, Intent, Session, SessionState};
//!
//! let cfg = GameConfig { seed: Some(7), ..GameConfig::default() };
//! let mut session = Session::from_config(&cfg);
//! assert_eq!(session.enter().unwrap(), SessionState::Game);
//! session.apply(Intent::Left).unwrap();
//! assert_eq!(session.apply(Intent::Exit).unwrap(), Flow::Exit);
//! ```
//!
pub mod config;
pub mod engine;
pub mod grid;
pub mod input;
pub mod render;
pub mod row;
pub mod session;
pub mod terminal;

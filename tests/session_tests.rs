use std::collections::VecDeque;
use std::io;

use rand::{rngs::StdRng, SeedableRng};
use term_2048::engine::{Board, Direction};
use term_2048::grid::Grid;
use term_2048::render::{View, GAMEOVER_BANNER, HELP_MOVES, WIN_BANNER};
use term_2048::session::{Flow, Frontend, Intent, Session, SessionState};

/// Replays a fixed list of intents and keeps every frame it was asked to draw.
struct Scripted {
    intents: VecDeque<Intent>,
    frames: Vec<(SessionState, Vec<String>)>,
}

impl Scripted {
    fn new(intents: &[Intent]) -> Self {
        Scripted { intents: intents.iter().copied().collect(), frames: Vec::new() }
    }
}

impl Frontend for Scripted {
    fn draw(&mut self, view: &View<'_>) -> io::Result<()> {
        self.frames.push((view.state, view.lines()));
        Ok(())
    }

    fn next_intent(&mut self) -> io::Result<Intent> {
        self.intents
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

fn grid(rows: Vec<Vec<u32>>) -> Grid {
    Grid::from_rows(rows).expect("rectangular grid")
}

fn nonzero(board: &Board) -> usize {
    board.grid().cells().filter(|&v| v != 0).count()
}

fn locked_4x4() -> Grid {
    grid(vec![vec![2, 4, 2, 4], vec![4, 2, 4, 2], vec![2, 4, 2, 4], vec![4, 2, 4, 2]])
}

/// One merge left. Moving right opens (3, 0), and neither a 2 nor a 4 placed
/// there can merge with its neighbours.
fn nearly_locked() -> Grid {
    grid(vec![vec![2, 4, 2, 4], vec![4, 2, 4, 2], vec![16, 4, 2, 4], vec![8, 16, 16, 64]])
}

#[test]
fn first_move_scores_on_forced_grid() {
    let mut s = Session::new(Board::new(4, 4, 32), StdRng::seed_from_u64(1));
    s.enter().unwrap();
    s.board_mut()
        .set_grid(grid(vec![vec![2, 2, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]]))
        .unwrap();

    assert_eq!(s.apply(Intent::Left).unwrap(), Flow::Continue);
    let board = s.board();
    assert_eq!(board.grid().rows()[0][0], 4);
    assert_eq!(board.score(), 4);
    assert!(!board.is_win());
    assert_eq!(nonzero(board), 2);
    assert_eq!(s.state(), SessionState::Game);
}

#[test]
fn restart_from_gameover_starts_fresh() {
    let mut s = Session::new(Board::new(4, 4, 2048), StdRng::seed_from_u64(2));
    s.enter().unwrap();
    s.board_mut().set_grid(nearly_locked()).unwrap();
    s.apply(Intent::Right).unwrap();
    assert_eq!(s.board().score(), 32);
    assert_eq!(s.state(), SessionState::Gameover);

    s.apply(Intent::Restart).unwrap();
    assert_eq!(s.state(), SessionState::Init);
    assert_eq!(s.enter().unwrap(), SessionState::Game);
    assert_eq!(s.board().score(), 0);
    assert_eq!(s.board().highscore(), 32);
    assert_eq!(nonzero(s.board()), 2);
}

#[test]
fn gameover_only_reacts_to_restart_and_exit() {
    let mut board = Board::new(4, 4, 2048);
    board.set_grid(locked_4x4()).unwrap();
    assert!(board.is_gameover());
    for dir in Direction::ALL {
        assert!(!board.is_movable(dir));
    }

    let mut s = Session::new(Board::new(4, 4, 2048), StdRng::seed_from_u64(3));
    s.enter().unwrap();
    s.board_mut().set_grid(nearly_locked()).unwrap();
    s.apply(Intent::Right).unwrap();
    assert_eq!(s.state(), SessionState::Gameover);
    let frozen = s.board().clone();
    for intent in [Intent::Up, Intent::Down, Intent::Left, Intent::Right] {
        s.apply(intent).unwrap();
        assert_eq!(s.state(), SessionState::Gameover);
    }
    assert_eq!(s.board(), &frozen);
    assert_eq!(s.apply(Intent::Exit).unwrap(), Flow::Exit);
}

#[test]
fn run_loop_draws_each_state_and_exits() {
    let mut s = Session::new(Board::new(2, 2, 2048), StdRng::seed_from_u64(4));
    let mut fe = Scripted::new(&[Intent::Restart, Intent::Exit]);
    s.run(&mut fe).unwrap();

    // Init is never drawn: one Game frame, restart, another Game frame, exit.
    assert_eq!(fe.frames.len(), 2);
    for (state, lines) in &fe.frames {
        assert_eq!(*state, SessionState::Game);
        assert!(lines.contains(&HELP_MOVES.to_string()));
        assert!(lines[0].starts_with("SCORE: 0"));
    }
    assert!(fe.intents.is_empty());
}

#[test]
fn run_loop_shows_win_banner() {
    // Left merges the pair into a 4, which wins at this threshold
    let mut s = Session::new(Board::new(2, 2, 4), StdRng::seed_from_u64(5));
    s.enter().unwrap();
    s.board_mut().set_grid(grid(vec![vec![2, 2], vec![0, 0]])).unwrap();
    let mut fe = Scripted::new(&[Intent::Left, Intent::Up, Intent::Exit]);
    s.run(&mut fe).unwrap();

    let (state, lines) = &fe.frames[1];
    assert_eq!(*state, SessionState::Win);
    assert!(lines.contains(&WIN_BANNER.to_string()));
    assert!(!lines.contains(&GAMEOVER_BANNER.to_string()));
}

#[test]
fn run_surfaces_frontend_errors() {
    let mut s = Session::new(Board::new(4, 4, 2048), StdRng::seed_from_u64(6));
    let mut fe = Scripted::new(&[Intent::Left]);
    assert!(s.run(&mut fe).is_err());
}

#[test]
fn seeded_sessions_are_reproducible() {
    let play = |seed: u64| {
        let mut s = Session::new(Board::new(4, 4, 2048), StdRng::seed_from_u64(seed));
        s.enter().unwrap();
        for i in 0..200 {
            s.apply(Intent::from(Direction::ALL[i % 4])).unwrap();
        }
        s.board().clone()
    };
    assert_eq!(play(99), play(99));
}

#[test]
fn random_play_keeps_invariants() {
    let mut s = Session::new(Board::new(4, 4, 2048), StdRng::seed_from_u64(7));
    s.enter().unwrap();
    let mut last_score = 0;
    for i in 0..500 {
        if s.state() != SessionState::Game {
            break;
        }
        s.apply(Intent::from(Direction::ALL[(i * 7) % 4])).unwrap();
        let board = s.board();
        assert!(board.score() >= last_score);
        last_score = board.score();
        assert_eq!(board.grid().height(), 4);
        assert!(board.grid().rows().iter().all(|r| r.len() == 4));
        assert!(board.grid().cells().all(|v| v == 0 || v.is_power_of_two()));
        if board.count_empty() > 0 {
            assert!(Direction::ALL.iter().any(|&d| board.is_movable(d)));
        }
    }
}

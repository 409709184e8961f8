//! Key bindings. Unbound keys map to `None` and are skipped by the reader.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::session::Intent;

/// `WASD` moves, `R` restarts, `Q` exits; either case.
pub fn intent_for_char(ch: char) -> Option<Intent> {
    match ch.to_ascii_lowercase() {
        'w' => Some(Intent::Up),
        'a' => Some(Intent::Left),
        's' => Some(Intent::Down),
        'd' => Some(Intent::Right),
        'r' => Some(Intent::Restart),
        'q' => Some(Intent::Exit),
        _ => None,
    }
}

/// Map a terminal key event. Only presses count; arrows move too.
pub fn intent_for_key(event: &KeyEvent) -> Option<Intent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Char(ch) => intent_for_char(ch),
        KeyCode::Up => Some(Intent::Up),
        KeyCode::Left => Some(Intent::Left),
        KeyCode::Down => Some(Intent::Down),
        KeyCode::Right => Some(Intent::Right),
        _ => None,
    }
}

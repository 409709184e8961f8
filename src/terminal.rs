//! crossterm front-end: raw mode on the alternate screen, one full redraw per
//! frame and a blocking key read.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;

use crate::input::intent_for_key;
use crate::render::View;
use crate::session::{Frontend, Intent};

/// Owns the terminal for the lifetime of the value and restores it on drop.
pub struct TerminalFrontend {
    writer: BufWriter<Stdout>,
}

impl TerminalFrontend {
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // from here on, dropping the guard releases raw mode
        let mut frontend = TerminalFrontend { writer: BufWriter::new(io::stdout()) };
        execute!(frontend.writer, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;
        Ok(frontend)
    }

    fn restore(&mut self) -> io::Result<()> {
        let screen = execute!(self.writer, cursor::Show, LeaveAlternateScreen);
        let raw = terminal::disable_raw_mode();
        screen.and(raw)
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl Frontend for TerminalFrontend {
    fn draw(&mut self, view: &View<'_>) -> io::Result<()> {
        queue!(self.writer, Clear(ClearType::All))?;
        for (y, line) in view.lines().iter().enumerate() {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            queue!(self.writer, cursor::MoveTo(0, y), Print(line))?;
        }
        self.writer.flush()
    }

    fn next_intent(&mut self) -> io::Result<Intent> {
        loop {
            if let Event::Key(key) = event::read()? {
                match intent_for_key(&key) {
                    Some(intent) => return Ok(intent),
                    None => debug!("ignoring unbound key {:?}", key.code),
                }
            }
        }
    }
}

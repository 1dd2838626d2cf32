use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::heading::Heading;

/// High-level input events consumed by the session loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionInput {
    Heading(Heading),
    Quit,
}

/// Polls the terminal for at most `timeout` and maps the next key press.
///
/// Returns `Ok(None)` when no relevant key arrived in time.
pub fn poll_input(timeout: Duration) -> io::Result<Option<SessionInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        _ => Ok(None),
    }
}

fn map_key(key: KeyEvent) -> Option<SessionInput> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(SessionInput::Heading(Heading::Up)),
        KeyCode::Right | KeyCode::Char('d') => Some(SessionInput::Heading(Heading::Right)),
        KeyCode::Down | KeyCode::Char('s') => Some(SessionInput::Heading(Heading::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(SessionInput::Heading(Heading::Left)),
        KeyCode::Char('q') | KeyCode::Esc => Some(SessionInput::Quit),
        _ => None,
    }
}

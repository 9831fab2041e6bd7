//! Keyboard mapping for the terminal frontend.

use crate::games::grid::Dimensions;
use crate::games::snake::Heading;
use crate::scheduler::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means in turn mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKey {
    /// Move the highlighted cell.
    Cursor(usize),
    /// Forward to the turn loop.
    Input(InputEvent),
    /// Not bound.
    None,
}

fn is_quit(key: &KeyEvent) -> bool {
    (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        || matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
}

/// Maps a key press in turn mode.
///
/// Arrows move the cursor, Enter or Space select it, digits 1-9 select a
/// cell directly.
pub fn turn_key(key: KeyEvent, cursor: usize, dimensions: Dimensions) -> TurnKey {
    if is_quit(&key) {
        return TurnKey::Input(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            TurnKey::Cursor(move_cursor(cursor, key.code, dimensions))
        }
        KeyCode::Enter | KeyCode::Char(' ') => TurnKey::Input(InputEvent::CellSelected(cursor)),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            TurnKey::Input(InputEvent::CellSelected(index))
        }
        KeyCode::Char('r' | 'R') => TurnKey::Input(InputEvent::NewGame),
        _ => TurnKey::None,
    }
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: usize, key: KeyCode, dimensions: Dimensions) -> usize {
    let Some((column, row)) = dimensions.coord_of(cursor) else {
        return 0;
    };

    let (column, row) = match key {
        KeyCode::Left => (column.saturating_sub(1), row),
        KeyCode::Right => ((column + 1).min(dimensions.columns - 1), row),
        KeyCode::Up => (column, row.saturating_sub(1)),
        KeyCode::Down => (column, (row + 1).min(dimensions.rows - 1)),
        _ => (column, row),
    };

    dimensions.index_of(column, row).unwrap_or(cursor)
}

/// Maps a key press in motion mode.
pub fn motion_key(key: KeyEvent) -> Option<InputEvent> {
    if is_quit(&key) {
        return Some(InputEvent::Quit);
    }

    let heading = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Heading::Up,
        KeyCode::Down | KeyCode::Char('s' | 'S') => Heading::Down,
        KeyCode::Left | KeyCode::Char('a' | 'A') => Heading::Left,
        KeyCode::Right | KeyCode::Char('d' | 'D') => Heading::Right,
        KeyCode::Char('r' | 'R') => return Some(InputEvent::NewGame),
        _ => return None,
    };

    Some(InputEvent::HeadingChanged(heading))
}

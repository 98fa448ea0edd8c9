//! Maps crossterm key events to session commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::{Command, SessionState};

/// Translates a key press into a [`Command`] for a session in `state`.
///
/// Printable characters go to the bet field while betting; afterwards
/// `space`/`y` hit and `tab`/`n` stand. Release and repeat events are
/// ignored.
#[must_use]
pub fn command_for(key: KeyEvent, state: SessionState) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Char('k') if ctrl => Some(Command::ResetBalance),
        KeyCode::Enter => Some(Command::ConfirmBet),
        KeyCode::Backspace => Some(Command::BetBackspace),
        KeyCode::Tab => Some(Command::Stand),
        KeyCode::Char(c) if state == SessionState::Betting && !ctrl => Some(Command::BetChar(c)),
        KeyCode::Char(' ' | 'y' | 'Y') => Some(Command::Hit),
        KeyCode::Char('n' | 'N') => Some(Command::Stand),
        _ => None,
    }
}

//! Terminal front end: drawing with ratatui and crossterm input.
//!
//! The event loop is single-threaded. Each pass waits for input no longer
//! than one frame, advances the session clock (firing due timers), feeds
//! every queued key press to the session, then redraws.

use core::time::Duration;
use std::io::{Stdout, stdout};
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::session::Session;

mod confetti;
mod input;
mod ui;

pub use confetti::Confetti;
pub use input::command_for;
pub use ui::{draw, outcome_message};

/// ~30 frames per second, matching the confetti animation.
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Runs `session` in the terminal until the player quits.
///
/// `seed` drives the confetti so a replayed session looks the same.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, read or drawn to.
pub fn run(session: &mut Session, seed: u64) -> Result<()> {
    let mut term = TerminalSession::new()?;
    let mut confetti = Confetti::new(seed);

    let started = Instant::now();
    let mut last_frame = started;
    let mut celebrating = false;

    while !session.is_finished() {
        let ready = event::poll(FRAME_DURATION)?;
        session.advance(started.elapsed());

        if ready {
            loop {
                if let Event::Key(key) = event::read()?
                    && let Some(command) = command_for(key, session.state())
                {
                    let accepted = session.dispatch(command);
                    debug!(?command, accepted, "Key handled");
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        if session.is_finished() {
            break;
        }

        let view = session.view();
        let size = term.terminal.size()?;
        if view.celebrate && !celebrating {
            confetti.spawn(size.width);
        } else if !view.celebrate {
            confetti.clear();
        }
        celebrating = view.celebrate;

        let now = Instant::now();
        confetti.step(now - last_frame, size.height);
        last_frame = now;

        term.terminal
            .draw(|frame| draw(frame, &view, &confetti))?;
    }

    Ok(())
}

//! A single-player blackjack game for the terminal.
//!
//! The crate is split into a `no_std`-friendly core and an optional
//! terminal front end:
//!
//! - [`card`], [`deck`] and [`hand`] model cards, the 52-card deck and
//!   blackjack scoring.
//! - [`round`] deals one round from the opening hands to the outcome.
//! - [`session`] is the state machine around rounds: bet input, the
//!   pre-round sequence, resolution and celebration, all driven by user
//!   commands and timer deadlines.
//! - `tui` (feature `tui`) draws the table with ratatui and feeds crossterm
//!   input into the session.
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use bjtui::{Command, Session, SessionOptions, SessionState};
//!
//! let options = SessionOptions::default().with_pre_round_animation(false);
//! let mut session = Session::new(options, 42);
//!
//! session.dispatch(Command::BetChar('5'));
//! session.dispatch(Command::BetChar('0'));
//! assert!(session.dispatch(Command::ConfirmBet));
//! assert_ne!(session.state(), SessionState::Betting);
//!
//! session.dispatch(Command::Stand);
//! session.advance(Duration::from_secs(60));
//! assert_eq!(session.state(), SessionState::Betting);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod keymap;
pub mod options;
pub mod result;
pub mod round;
pub mod session;
#[cfg(feature = "tui")]
#[cfg_attr(docsrs, doc(cfg(feature = "tui")))]
pub mod tui;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, DeckError, RoundError, ShowdownError};
pub use hand::{DealerHand, Hand};
pub use keymap::{KeyBinding, Keymap};
pub use options::{SessionOptions, ShufflePolicy};
pub use result::{Evaluation, Outcome, Settlement};
pub use round::{Round, RoundPhase};
pub use session::{
    BetInput, BetStatus, Command, Player, PreRoundStep, Session, SessionState, TableView, Timer,
};

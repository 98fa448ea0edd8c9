//! Error types for deck and round operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left for the draw.
    #[error("deck has {remaining} cards left, {requested} requested")]
    Empty {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards that were left.
        remaining: usize,
    },
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during the first deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round phase for dealing.
    #[error("invalid round phase for dealing")]
    InvalidState,
    /// Not enough cards in the deck for the opening hands.
    #[error("not enough cards in the deck ({remaining} left)")]
    InsufficientDeck {
        /// Number of cards that were left.
        remaining: usize,
    },
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// The deck ran out mid-round.
    #[error(transparent)]
    EmptyDeck(#[from] DeckError),
}

/// Errors that can occur while evaluating a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// No hands have been dealt yet.
    #[error("invalid round phase for evaluation")]
    InvalidState,
}

/// Any failure that ends the current round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The opening deal failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A hit or dealer draw failed.
    #[error("action failed: {0}")]
    Action(#[from] ActionError),
    /// Evaluation was requested out of phase.
    #[error("evaluation failed: {0}")]
    Showdown(#[from] ShowdownError),
}

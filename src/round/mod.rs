//! The round engine: one deal of cards from betting to resolution.

use rand::Rng;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundPhase;

/// Dealer draws until reaching this total.
pub const DEALER_STANDS_AT: u8 = 17;

/// A single round of blackjack.
///
/// The round owns the deck and both hands. It knows nothing about money;
/// stakes are handled by the session that drives it.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: DealerHand,
    phase: RoundPhase,
    outcome: Option<Outcome>,
}

impl Round {
    /// Creates a round in the betting phase with a fresh, unshuffled deck.
    #[must_use]
    pub fn new() -> Self {
        Self::with_deck(Deck::new())
    }

    /// Creates a round in the betting phase that deals from `deck`.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: RoundPhase::Betting,
            outcome: None,
        }
    }

    /// Shuffles the deck.
    pub fn shuffle_deck<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
        debug!(cards = self.deck.len(), "Deck shuffled");
    }

    /// Swaps in a prepared deck for the coming deal.
    ///
    /// Returns `false` and keeps the current deck once cards are out.
    pub fn replace_deck(&mut self, deck: Deck) -> bool {
        if self.phase != RoundPhase::Betting {
            return false;
        }
        self.deck = deck;
        true
    }

    /// Clears both hands and installs a fresh, unshuffled 52-card deck.
    pub fn reset(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.deck = Deck::new();
        self.outcome = None;
        self.phase = RoundPhase::Betting;
        debug!("Round reset");
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's total.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.score()
    }

    /// Returns the total of the dealer's visible cards.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer.score()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the cards left in the deck, top first.
    #[must_use]
    pub fn deck_cards(&self) -> &[Card] {
        self.deck.cards()
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

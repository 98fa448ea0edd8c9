//! Hand scoring and the player and dealer hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Ace value when it still fits under 21.
const ACE_HIGH: u8 = 11;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut soft = false;

    // Each Ace is settled once, when it is reached, and never revisited.
    for card in cards {
        if card.rank == Rank::Ace {
            soft = value.saturating_add(ACE_HIGH) <= BLACKJACK;
            value = value.saturating_add(if soft { ACE_HIGH } else { 1 });
        } else {
            value = value.saturating_add(card.base_value());
        }
    }

    (value, soft && value <= BLACKJACK)
}

/// Calculates the blackjack total of `cards`.
///
/// Cards are counted in hand order. An Ace counts 11 when that keeps the
/// running total at 21 or below, otherwise 1; a later card can still bust a
/// hand holding a high Ace.
///
/// ```
/// use bjtui::{Card, Rank, Suit, hand::score};
///
/// let ace = Card::new(Suit::Spades, Rank::Ace);
/// let king = Card::new(Suit::Hearts, Rank::King);
/// let nine = Card::new(Suit::Clubs, Rank::Nine);
/// let five = Card::new(Suit::Diamonds, Rank::Five);
///
/// assert_eq!(score(&[ace, king]), 21);
/// assert_eq!(score(&[ace, ace, nine]), 21);
/// assert_eq!(score(&[ace, five, king]), 26);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the last Ace in `cards` counted 11 and the hand has not
/// busted.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand, split into face-up and face-down cards.
///
/// Only face-up cards are scored. The face-down cards are turned over
/// together by [`DealerHand::reveal`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    face_up: Vec<Card>,
    face_down: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            face_up: Vec::new(),
            face_down: Vec::new(),
        }
    }

    /// Adds a visible card.
    pub fn add_face_up(&mut self, card: Card) {
        self.face_up.push(card);
    }

    /// Adds a hidden card.
    pub fn add_face_down(&mut self, card: Card) {
        self.face_down.push(card);
    }

    /// Turns every hidden card face up at once.
    ///
    /// Returns `false` if there was nothing to reveal.
    pub fn reveal(&mut self) -> bool {
        if self.face_down.is_empty() {
            return false;
        }

        self.face_up.append(&mut self.face_down);
        true
    }

    /// Returns the visible cards.
    #[must_use]
    pub fn face_up(&self) -> &[Card] {
        &self.face_up
    }

    /// Returns the number of hidden cards.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.face_down.len()
    }

    /// Returns whether any card is still face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        !self.face_down.is_empty()
    }

    /// Calculates the value of the visible cards.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.face_up)
    }

    /// Returns whether the visible cards are over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns the total number of cards, hidden ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.face_up.len() + self.face_down.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.face_up.is_empty() && self.face_down.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.face_up.clear();
        self.face_down.clear();
    }
}

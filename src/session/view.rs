//! Read-only snapshots of a session for renderers.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::keymap::Keymap;
use crate::result::Settlement;
use crate::round::RoundPhase;

use super::{Session, SessionState};

/// Whether the typed bet can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetStatus {
    /// The balance is zero; only a reset is possible.
    NoFunds,
    /// Nothing (or zero) typed yet.
    Empty,
    /// The typed amount is larger than the balance.
    ExceedsBalance,
    /// The bet can be confirmed.
    Ready,
}

/// Everything a renderer needs to draw the table.
///
/// The dealer's hidden cards are only counted, never exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Session state.
    pub state: SessionState,
    /// Phase of the current round.
    pub phase: RoundPhase,
    /// Player's cards in deal order.
    pub player_cards: Vec<Card>,
    /// Dealer's face-up cards in deal order.
    pub dealer_cards: Vec<Card>,
    /// Number of dealer cards still face down.
    pub dealer_hidden: usize,
    /// Player's total.
    pub player_score: u8,
    /// Total of the dealer's face-up cards.
    pub dealer_score: u8,
    /// Balance, excluding any withheld stake.
    pub balance: u64,
    /// Typed amount while betting, the withheld stake afterwards.
    pub bet: u64,
    /// Raw text of the bet field.
    pub bet_text: String,
    /// Whether the typed bet can be confirmed.
    pub bet_status: BetStatus,
    /// Money record of the most recent decided round.
    pub settlement: Option<Settlement>,
    /// Whether the win celebration should be playing.
    pub celebrate: bool,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

impl TableView {
    pub(super) fn capture(session: &Session) -> Self {
        let round = session.round();
        let player = session.player();
        let input = session.bet_input();
        let betting = session.state() == SessionState::Betting;

        let typed = input.amount();
        let bet_status = if player.balance() == 0 {
            BetStatus::NoFunds
        } else if typed == 0 {
            BetStatus::Empty
        } else if typed > player.balance() {
            BetStatus::ExceedsBalance
        } else {
            BetStatus::Ready
        };

        Self {
            state: session.state(),
            phase: round.phase(),
            player_cards: round.player_hand().cards().to_vec(),
            dealer_cards: round.dealer_hand().face_up().to_vec(),
            dealer_hidden: round.dealer_hand().hidden_count(),
            player_score: round.player_score(),
            dealer_score: round.dealer_score(),
            balance: player.balance(),
            bet: if betting { typed } else { player.bet() },
            bet_text: String::from(input.text()),
            bet_status,
            settlement: session.last_settlement(),
            celebrate: session.state() == SessionState::Celebration,
            cards_remaining: round.cards_remaining(),
        }
    }

    /// Balance left if the typed bet were placed, floored at zero.
    #[must_use]
    pub const fn available_balance(&self) -> u64 {
        self.balance.saturating_sub(self.bet)
    }

    /// Returns whether the player may hit or stand.
    #[must_use]
    pub fn player_can_act(&self) -> bool {
        self.state == SessionState::ActiveRound && self.phase == RoundPhase::PlayerTurn
    }

    /// Returns the key bindings available in this view.
    #[must_use]
    pub fn keymap(&self) -> Keymap {
        Keymap::for_view(self)
    }
}

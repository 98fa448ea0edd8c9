use tracing::debug;

use crate::card::Card;
use crate::error::{ActionError, DealError};

use super::{Round, RoundPhase};

/// Cards needed for the opening hands.
const OPENING_CARDS: usize = 4;

impl Round {
    /// Deals the opening hands.
    ///
    /// The top four cards go to the player, the dealer face up, the player,
    /// and the dealer face down, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase or fewer
    /// than four cards remain.
    pub fn deal_first_hand(&mut self) -> Result<(), DealError> {
        if self.phase != RoundPhase::Betting {
            return Err(DealError::InvalidState);
        }

        let remaining = self.deck.len();
        let Ok(cards) = self.deck.draw(OPENING_CARDS) else {
            return Err(DealError::InsufficientDeck { remaining });
        };

        self.phase = RoundPhase::Dealing;

        self.player.add_card(cards[0]);
        self.dealer.add_face_up(cards[1]);
        self.player.add_card(cards[2]);
        self.dealer.add_face_down(cards[3]);

        self.phase = RoundPhase::PlayerTurn;
        debug!(
            player = self.player.score(),
            dealer = self.dealer.score(),
            "Opening hands dealt"
        );

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn player_hit(&mut self) -> Result<Card, ActionError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.draw_one()?;
        self.player.add_card(card);
        debug!(?card, total = self.player.score(), "Player hits");

        Ok(card)
    }

    /// Player action: Stand.
    ///
    /// Hands the turn to the dealer, who immediately turns the hidden card.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn player_stand(&mut self) -> Result<(), ActionError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.phase = RoundPhase::DealerTurn;
        debug!(total = self.player.score(), "Player stands");

        self.dealer_reveal()
    }
}

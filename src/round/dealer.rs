use tracing::debug;

use crate::error::{ActionError, ShowdownError};
use crate::hand::BLACKJACK;
use crate::result::{Evaluation, Outcome};

use super::{DEALER_STANDS_AT, Round, RoundPhase};

impl Round {
    /// Dealer action: reveal the hidden card, or draw one more.
    ///
    /// The first call after the player stands turns every hidden card face up
    /// at once. Every later call draws a single card face up.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty.
    pub fn dealer_reveal(&mut self) -> Result<(), ActionError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        if self.dealer.reveal() {
            debug!(total = self.dealer.score(), "Dealer reveals hole card");
            return Ok(());
        }

        let card = self.deck.draw_one()?;
        self.dealer.add_face_up(card);
        debug!(?card, total = self.dealer.score(), "Dealer draws");

        Ok(())
    }

    /// Returns whether the dealer has nothing left to do.
    fn dealer_finished(&self) -> bool {
        !self.dealer.has_hidden() && self.dealer.score() >= DEALER_STANDS_AT
    }

    /// Evaluates the table.
    ///
    /// Rules are checked in order: player bust, player 21, dealer bust,
    /// player still to act, dealer still drawing, then a straight
    /// comparison. A tie can only be declared once the dealer has finished.
    /// A decided round moves to [`RoundPhase::Resolved`] and keeps its
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if no hands have been dealt.
    pub fn evaluate(&mut self) -> Result<Evaluation, ShowdownError> {
        if !self.phase.is_in_play() {
            return Err(ShowdownError::InvalidState);
        }

        if let Some(outcome) = self.outcome {
            return Ok(Evaluation::Settled(outcome));
        }

        let player = self.player.score();
        let dealer = self.dealer.score();

        let outcome = if player > BLACKJACK {
            Outcome::PlayerBust
        } else if player == BLACKJACK {
            Outcome::PlayerWin
        } else if dealer > BLACKJACK {
            Outcome::DealerBust
        } else if self.phase == RoundPhase::PlayerTurn {
            return Ok(Evaluation::PlayerToAct);
        } else if !self.dealer_finished() {
            return Ok(Evaluation::DealerMustDraw);
        } else if player > dealer {
            Outcome::PlayerWin
        } else if player < dealer {
            Outcome::DealerWin
        } else {
            Outcome::Push
        };

        self.outcome = Some(outcome);
        self.phase = RoundPhase::Resolved;
        debug!(?outcome, player, dealer, "Round resolved");

        Ok(Evaluation::Settled(outcome))
    }
}

//! Round outcomes and settlements.

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player reached 21 or beat the dealer's total.
    PlayerWin,
    /// Player went over 21.
    PlayerBust,
    /// Dealer finished with the higher total.
    DealerWin,
    /// Dealer went over 21.
    DealerBust,
    /// Equal totals after the dealer finished drawing.
    Push,
}

impl Outcome {
    /// Returns whether the player takes the pot.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::PlayerWin | Self::DealerBust)
    }

    /// Returns the amount credited back for a withheld `bet`.
    ///
    /// Saturates at `u64::MAX`.
    ///
    /// ```
    /// use bjtui::Outcome;
    ///
    /// assert_eq!(Outcome::DealerBust.payout(100), 200);
    /// assert_eq!(Outcome::Push.payout(100), 100);
    /// assert_eq!(Outcome::DealerWin.payout(100), 0);
    /// ```
    #[must_use]
    pub const fn payout(self, bet: u64) -> u64 {
        match self {
            Self::PlayerWin | Self::DealerBust => bet.saturating_mul(2),
            Self::Push => bet,
            Self::PlayerBust | Self::DealerWin => 0,
        }
    }
}

/// What the round needs next after an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The round is decided.
    Settled(Outcome),
    /// The player may still hit or stand.
    PlayerToAct,
    /// The dealer has not finished; call [`Round::dealer_reveal`] and
    /// evaluate again.
    ///
    /// [`Round::dealer_reveal`]: crate::Round::dealer_reveal
    DealerMustDraw,
}

/// The money record of one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// How the round ended.
    pub outcome: Outcome,
    /// The stake that was withheld.
    pub bet: u64,
    /// Amount credited back to the balance.
    pub payout: u64,
    /// Balance after the payout.
    pub balance: u64,
}

impl Settlement {
    /// Net change of the balance over the whole round.
    #[must_use]
    pub fn net(&self) -> i128 {
        i128::from(self.payout) - i128::from(self.bet)
    }
}

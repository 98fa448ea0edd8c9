//! Round phase types.

/// Phase of a single round.
///
/// Phases only move forward, except for the return from
/// [`RoundPhase::Resolved`] to [`RoundPhase::Betting`] on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// Waiting for the stake; no cards are out.
    Betting,
    /// Opening cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Player has stood; the dealer reveals and draws.
    DealerTurn,
    /// The outcome has been computed.
    Resolved,
}

impl RoundPhase {
    /// Returns whether cards are on the table and the round can be evaluated.
    #[must_use]
    pub const fn is_in_play(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn | Self::Resolved)
    }
}

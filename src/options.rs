//! Session configuration options.

use core::time::Duration;

/// When the deck is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShufflePolicy {
    /// Shuffle before the first round of a sitting only. Later rounds of the
    /// sitting deal a fresh, unshuffled deck.
    #[default]
    PerSitting,
    /// Shuffle before every round.
    EveryRound,
}

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjtui::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_starting_balance(500)
///     .with_resolution_pause(Duration::from_secs(1));
/// assert_eq!(options.starting_balance, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Balance at the start of every sitting. Balances never exceed
    /// `u64::MAX`, so a sitting that starts near it cannot keep its winnings.
    pub starting_balance: u64,
    /// Maximum number of characters accepted by the bet input.
    pub max_bet_digits: usize,
    /// When the deck is shuffled.
    pub shuffle: ShufflePolicy,
    /// Whether the shuffling / starting / good luck sequence is played
    /// before each deal.
    pub pre_round_animation: bool,
    /// Length of each pre-round step, in order.
    pub pre_round_delays: [Duration; 3],
    /// Pause before each dealer draw after the player stands.
    pub dealer_draw_delay: Duration,
    /// Pause after a round is decided before the table is cleared.
    pub resolution_pause: Duration,
    /// How long the win celebration lasts.
    pub celebration_window: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            max_bet_digits: 12,
            shuffle: ShufflePolicy::PerSitting,
            pre_round_animation: true,
            pre_round_delays: [
                Duration::from_millis(1500),
                Duration::from_millis(500),
                Duration::from_millis(1000),
            ],
            dealer_draw_delay: Duration::from_secs(1),
            resolution_pause: Duration::from_secs(2),
            celebration_window: Duration::from_secs(3),
        }
    }
}

impl SessionOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtui::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the maximum length of the bet input.
    #[must_use]
    pub const fn with_max_bet_digits(mut self, digits: usize) -> Self {
        self.max_bet_digits = digits;
        self
    }

    /// Sets the shuffle policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtui::{SessionOptions, ShufflePolicy};
    ///
    /// let options = SessionOptions::default().with_shuffle(ShufflePolicy::EveryRound);
    /// assert_eq!(options.shuffle, ShufflePolicy::EveryRound);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, policy: ShufflePolicy) -> Self {
        self.shuffle = policy;
        self
    }

    /// Sets whether the pre-round sequence is played.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtui::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_pre_round_animation(false);
    /// assert!(!options.pre_round_animation);
    /// ```
    #[must_use]
    pub const fn with_pre_round_animation(mut self, enabled: bool) -> Self {
        self.pre_round_animation = enabled;
        self
    }

    /// Sets the length of the three pre-round steps.
    #[must_use]
    pub const fn with_pre_round_delays(mut self, delays: [Duration; 3]) -> Self {
        self.pre_round_delays = delays;
        self
    }

    /// Sets the pause before each dealer draw.
    #[must_use]
    pub const fn with_dealer_draw_delay(mut self, delay: Duration) -> Self {
        self.dealer_draw_delay = delay;
        self
    }

    /// Sets the pause after a round is decided.
    #[must_use]
    pub const fn with_resolution_pause(mut self, pause: Duration) -> Self {
        self.resolution_pause = pause;
        self
    }

    /// Sets the length of the win celebration.
    #[must_use]
    pub const fn with_celebration_window(mut self, window: Duration) -> Self {
        self.celebration_window = window;
        self
    }
}

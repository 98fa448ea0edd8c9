//! The session state machine: bet input, pre-round sequence, active round,
//! resolution and celebration.
//!
//! A [`Session`] reacts to two kinds of events. User input arrives through
//! [`Session::dispatch`]; time passes through [`Session::advance`], which
//! fires every deferred [`Timer`] that has come due. Each event is handled
//! to completion before the next, and no call ever sleeps.

use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::{SessionOptions, ShufflePolicy};
use crate::result::{Evaluation, Outcome, Settlement};
use crate::round::{Round, RoundPhase};

mod bet;
mod timer;
pub mod view;

pub use bet::{BetInput, Player};
pub use timer::Timer;
pub use view::{BetStatus, TableView};

use timer::TimerQueue;

/// Steps of the animated transition between a confirmed bet and the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreRoundStep {
    /// "Shuffling cards..."
    Shuffling,
    /// "Starting round..."
    Starting,
    /// "Good luck!"
    GoodLuck,
}

impl PreRoundStep {
    const fn next(self) -> Option<Self> {
        match self {
            Self::Shuffling => Some(Self::Starting),
            Self::Starting => Some(Self::GoodLuck),
            Self::GoodLuck => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Shuffling => 0,
            Self::Starting => 1,
            Self::GoodLuck => 2,
        }
    }
}

/// Top-level state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Waiting for a bet.
    Betting,
    /// Playing the pre-round sequence.
    PreRound(PreRoundStep),
    /// Cards are out; see the round phase for whose turn it is.
    ActiveRound,
    /// The round is decided and the table is still shown.
    Resolution(Outcome),
    /// Confetti after a win.
    Celebration,
    /// The player quit.
    Finished,
}

/// Discrete user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// A character typed into the bet field.
    BetChar(char),
    /// Delete the last character of the bet field.
    BetBackspace,
    /// Place the typed bet and start the round.
    ConfirmBet,
    /// Take another card.
    Hit,
    /// Stop taking cards.
    Stand,
    /// Restore the starting balance after going broke.
    ResetBalance,
    /// Leave the game.
    Quit,
}

/// A blackjack session for one player.
///
/// The session owns the player's money, the bet input and exactly one
/// [`Round`]. Time is supplied by the caller as a monotonic [`Duration`]
/// since the session started, which keeps every delay deterministic.
#[derive(Debug, Clone)]
pub struct Session {
    options: SessionOptions,
    state: SessionState,
    player: Player,
    bet_input: BetInput,
    round: Round,
    rng: ChaCha8Rng,
    timers: TimerQueue,
    now: Duration,
    shuffle_pending: bool,
    deck_prepared: bool,
    last_settlement: Option<Settlement>,
}

impl Session {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtui::{Session, SessionOptions, SessionState};
    ///
    /// let session = Session::new(SessionOptions::default(), 42);
    /// assert_eq!(session.state(), SessionState::Betting);
    /// assert_eq!(session.balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        info!(seed, balance = options.starting_balance, "Session started");

        Self {
            player: Player::new(options.starting_balance),
            bet_input: BetInput::new(options.max_bet_digits),
            options,
            state: SessionState::Betting,
            round: Round::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            timers: TimerQueue::default(),
            now: Duration::ZERO,
            shuffle_pending: true,
            deck_prepared: false,
            last_settlement: None,
        }
    }

    /// Handles one user command.
    ///
    /// Commands that are not valid in the current state are ignored.
    /// Returns whether the command was accepted.
    pub fn dispatch(&mut self, command: Command) -> bool {
        if self.state == SessionState::Finished {
            return false;
        }

        match command {
            Command::BetChar(c) => self.can_edit_bet() && self.bet_input.insert(c),
            Command::BetBackspace => self.can_edit_bet() && self.bet_input.backspace(),
            Command::ConfirmBet => self.confirm_bet(),
            Command::Hit => self.hit(),
            Command::Stand => self.stand(),
            Command::ResetBalance => self.reset_balance(),
            Command::Quit => {
                self.quit();
                true
            }
        }
    }

    /// Moves the session clock to `now` and fires every timer due by then.
    ///
    /// Timers scheduled while firing are measured from their parent's
    /// deadline, so a single large step replays the whole chain in order.
    /// The clock never moves backwards.
    pub fn advance(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }

        while let Some((deadline, timer)) = self.timers.pop_due(self.now) {
            self.fire(timer, deadline);
        }
    }

    /// Returns the earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Stacks `deck` for the next deal. The prepared deck is dealt as is and
    /// counts as the sitting's shuffle.
    ///
    /// Returns `false` once the round has started.
    pub fn set_deck(&mut self, deck: Deck) -> bool {
        if !matches!(
            self.state,
            SessionState::Betting | SessionState::PreRound(_)
        ) || !self.round.replace_deck(deck)
        {
            return false;
        }

        self.deck_prepared = true;
        self.shuffle_pending = false;
        true
    }

    /// Returns a read-only snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::capture(self)
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns whether the player has quit.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Returns the balance, excluding any withheld stake.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.player.balance()
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the bet input.
    #[must_use]
    pub const fn bet_input(&self) -> &BetInput {
        &self.bet_input
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the settlement of the most recent decided round.
    #[must_use]
    pub const fn last_settlement(&self) -> Option<Settlement> {
        self.last_settlement
    }

    /// Returns the session clock.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    fn can_edit_bet(&self) -> bool {
        self.state == SessionState::Betting && self.player.balance() > 0
    }

    fn confirm_bet(&mut self) -> bool {
        if self.state != SessionState::Betting {
            return false;
        }

        let amount = self.bet_input.amount();
        if let Err(err) = self.player.withhold(amount) {
            debug!(%err, amount, "Bet refused");
            return false;
        }
        info!(
            bet = amount,
            balance = self.player.balance(),
            "Bet placed"
        );

        if self.options.pre_round_animation {
            self.state = SessionState::PreRound(PreRoundStep::Shuffling);
            self.timers.schedule(
                self.now + self.options.pre_round_delays[0],
                Timer::PreRound,
            );
        } else {
            self.start_round(self.now);
        }
        true
    }

    fn can_act(&self) -> bool {
        self.state == SessionState::ActiveRound && self.round.phase() == RoundPhase::PlayerTurn
    }

    fn hit(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }

        match self.round.player_hit() {
            Ok(_) => self.settle_or_wait(self.now),
            Err(err) => self.abort_round(err.into()),
        }
        true
    }

    fn stand(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }

        match self.round.player_stand() {
            Ok(()) => self.settle_or_wait(self.now),
            Err(err) => self.abort_round(err.into()),
        }
        true
    }

    fn reset_balance(&mut self) -> bool {
        if self.state != SessionState::Betting || self.player.balance() > 0 {
            return false;
        }

        self.player.reset(self.options.starting_balance);
        self.bet_input.clear();
        self.shuffle_pending = true;
        info!(balance = self.player.balance(), "Balance reset, new sitting");
        true
    }

    fn quit(&mut self) {
        self.timers.clear();
        self.state = SessionState::Finished;
        info!(balance = self.player.balance(), "Session finished");
    }

    fn fire(&mut self, timer: Timer, deadline: Duration) {
        debug!(?timer, ?deadline, state = ?self.state, "Timer fired");

        match (timer, self.state) {
            (Timer::PreRound, SessionState::PreRound(step)) => match step.next() {
                Some(next) => {
                    self.state = SessionState::PreRound(next);
                    self.timers.schedule(
                        deadline + self.options.pre_round_delays[next.index()],
                        Timer::PreRound,
                    );
                }
                None => self.start_round(deadline),
            },
            (Timer::DealerDraw, SessionState::ActiveRound)
                if self.round.phase() == RoundPhase::DealerTurn =>
            {
                match self.round.dealer_reveal() {
                    Ok(()) => self.settle_or_wait(deadline),
                    Err(err) => self.abort_round(err.into()),
                }
            }
            (Timer::EndResolution, SessionState::Resolution(outcome)) => {
                if outcome.is_player_win() {
                    self.state = SessionState::Celebration;
                    self.timers.schedule(
                        deadline + self.options.celebration_window,
                        Timer::EndCelebration,
                    );
                } else {
                    self.back_to_betting();
                }
            }
            (Timer::EndCelebration, SessionState::Celebration) => self.back_to_betting(),
            _ => debug!(?timer, "Stale timer ignored"),
        }
    }

    fn start_round(&mut self, at: Duration) {
        if self.deck_prepared {
            self.deck_prepared = false;
        } else if self.shuffle_pending || self.options.shuffle == ShufflePolicy::EveryRound {
            self.round.shuffle_deck(&mut self.rng);
            self.shuffle_pending = false;
        }

        self.state = SessionState::ActiveRound;
        match self.round.deal_first_hand() {
            Ok(()) => self.settle_or_wait(at),
            Err(err) => self.abort_round(err.into()),
        }
    }

    fn settle_or_wait(&mut self, at: Duration) {
        match self.round.evaluate() {
            Ok(Evaluation::Settled(outcome)) => self.resolve(outcome, at),
            Ok(Evaluation::PlayerToAct) => {}
            Ok(Evaluation::DealerMustDraw) => {
                self.timers
                    .schedule(at + self.options.dealer_draw_delay, Timer::DealerDraw);
            }
            Err(err) => self.abort_round(err.into()),
        }
    }

    fn resolve(&mut self, outcome: Outcome, at: Duration) {
        let settlement = self.player.settle(outcome);
        self.bet_input.clear();
        self.last_settlement = Some(settlement);
        info!(
            ?outcome,
            bet = settlement.bet,
            payout = settlement.payout,
            balance = settlement.balance,
            "Round settled"
        );

        self.state = SessionState::Resolution(outcome);
        self.timers
            .schedule(at + self.options.resolution_pause, Timer::EndResolution);
    }

    fn back_to_betting(&mut self) {
        self.round.reset();
        self.state = SessionState::Betting;
    }

    fn abort_round(&mut self, err: RoundError) {
        let refunded = self.player.refund();
        warn!(%err, refunded, "Round aborted, stake returned");

        self.timers.clear();
        self.bet_input.clear();
        self.deck_prepared = false;
        self.back_to_betting();
    }
}

use alloc::string::String;

use crate::error::BetError;
use crate::result::{Outcome, Settlement};

/// The player's money: the balance and the stake withheld for the current
/// round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    balance: u64,
    bet: u64,
}

impl Player {
    /// Creates a player holding `balance` and no stake.
    #[must_use]
    pub const fn new(balance: u64) -> Self {
        Self { balance, bet: 0 }
    }

    /// Returns the balance, excluding any withheld stake.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the stake withheld for the current round.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Moves `amount` from the balance into the stake.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or larger than the balance.
    pub const fn withhold(&mut self, amount: u64) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        self.bet = amount;
        Ok(())
    }

    /// Pays out the stake according to `outcome` and clears it.
    ///
    /// The balance saturates at `u64::MAX`; winnings beyond it are lost.
    pub const fn settle(&mut self, outcome: Outcome) -> Settlement {
        let bet = self.bet;
        let payout = outcome.payout(bet);
        self.balance = self.balance.saturating_add(payout);
        self.bet = 0;

        Settlement {
            outcome,
            bet,
            payout,
            balance: self.balance,
        }
    }

    /// Returns the stake to the balance untouched.
    pub const fn refund(&mut self) -> u64 {
        let bet = self.bet;
        self.balance = self.balance.saturating_add(bet);
        self.bet = 0;
        bet
    }

    /// Replaces the balance and drops any stake.
    pub const fn reset(&mut self, balance: u64) {
        self.balance = balance;
        self.bet = 0;
    }
}

/// Text typed into the bet field.
///
/// Only keystrokes that keep the text a valid integer are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetInput {
    text: String,
    limit: usize,
}

impl BetInput {
    /// Creates an empty input holding at most `limit` characters.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            limit,
        }
    }

    /// Appends `c`. Returns `false` and leaves the text untouched if the
    /// result would not parse as an amount.
    pub fn insert(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.text.len() >= self.limit {
            return false;
        }

        self.text.push(c);
        if self.text.parse::<u64>().is_err() {
            self.text.pop();
            return false;
        }
        true
    }

    /// Removes the last character. Returns `false` if the input was empty.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Empties the input.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the typed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the typed amount, 0 when empty.
    #[must_use]
    pub fn amount(&self) -> u64 {
        self.text.parse().unwrap_or(0)
    }
}

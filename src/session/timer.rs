use core::time::Duration;

use alloc::vec::Vec;

/// Deferred events the session schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Move to the next pre-round step, or deal after the last one.
    PreRound,
    /// Dealer takes the next card.
    DealerDraw,
    /// The pause after a decided round is over.
    EndResolution,
    /// The win celebration is over.
    EndCelebration,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    deadline: Duration,
    seq: u64,
    timer: Timer,
}

/// One-shot timers ordered by deadline, then by scheduling order.
#[derive(Debug, Clone, Default)]
pub(super) struct TimerQueue {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl TimerQueue {
    pub(super) fn schedule(&mut self, deadline: Duration, timer: Timer) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled {
            deadline,
            seq,
            timer,
        });
    }

    /// Removes and returns the earliest timer due at `now`.
    pub(super) fn pop_due(&mut self, now: Duration) -> Option<(Duration, Timer)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(_, entry)| (entry.deadline, entry.seq))
            .map(|(index, _)| index)?;

        let entry = self.pending.swap_remove(index);
        Some((entry.deadline, entry.timer))
    }

    pub(super) fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|entry| entry.deadline).min()
    }

    pub(super) fn clear(&mut self) {
        self.pending.clear();
    }

    pub(super) fn len(&self) -> usize {
        self.pending.len()
    }
}

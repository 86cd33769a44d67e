// SPDX-License-Identifier: MPL-2.0
//! One-shot timer bookkeeping.
//!
//! Timers run as sleeping `Task`s whose completion carries the token they were
//! armed with. Arming again or cancelling invalidates every earlier token, so a
//! late completion is recognised as stale and ignored.

/// Identifies one arming of a [`Timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A cancellable one-shot timer.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    counter: u64,
    pending: Option<TimerToken>,
}

impl Timer {
    /// Arms the timer, superseding any pending arming.
    pub fn arm(&mut self) -> TimerToken {
        self.counter = self.counter.wrapping_add(1);
        let token = TimerToken(self.counter);
        self.pending = Some(token);
        token
    }

    /// Invalidates the pending arming, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Consumes a completion. Returns `true` only for the current arming.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Token that would currently fire, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }
}

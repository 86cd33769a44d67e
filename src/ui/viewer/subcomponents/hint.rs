// SPDX-License-Identifier: MPL-2.0
//! Drag hint sub-component.
//!
//! The hint appears when the image becomes zoomed and hides itself after a
//! fixed window. Only a real zoom-in (unzoomed to zoomed) starts the window,
//! so repeated zoom-in requests while zoomed leave the running timer alone.

use super::timer::{Timer, TimerToken};

/// Hint sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    visible: bool,
    timer: Timer,
}

/// Messages for the hint sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The image went from unzoomed to zoomed.
    ZoomedIn,
    /// The image went back to unzoomed.
    ZoomedOut,
    /// The auto-dismiss timer armed with this token elapsed.
    Expired(TimerToken),
    /// The viewer closed.
    Cancel,
}

/// Effects produced by the hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Start a one-shot timer that reports back with this token.
    ScheduleDismiss(TimerToken),
}

impl State {
    /// Handle a hint message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ZoomedIn => {
                self.visible = true;
                Effect::ScheduleDismiss(self.timer.arm())
            }
            Message::ZoomedOut | Message::Cancel => {
                self.visible = false;
                self.timer.cancel();
                Effect::None
            }
            Message::Expired(token) => {
                if self.timer.fire(token) {
                    self.visible = false;
                }
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Token of the scheduled dismissal, if one is pending.
    #[must_use]
    pub fn pending_dismiss(&self) -> Option<TimerToken> {
        self.timer.pending()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: current index and slide direction over a
//! wrapping item list.
//!
//! The orchestrator is responsible for not sending `Next`/`Previous` while
//! zoomed; this component has no notion of zoom.

/// Direction of the last index change, used only to animate the slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Moved to the previous item.
    Backward,
    /// At rest.
    #[default]
    Still,
    /// Moved to the next item.
    Forward,
}

impl Direction {
    /// Returns -1, 0 or +1.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Still => 0,
            Self::Forward => 1,
        }
    }
}

/// Navigation sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    index: usize,
    len: usize,
    direction: Direction,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance, wrapping from the last item to the first.
    Next,
    /// Retreat, wrapping from the first item to the last.
    Previous,
    /// Set the index directly; the direction is left untouched.
    JumpTo(usize),
    /// The item list changed length.
    SetLen(usize),
    /// The slide transition finished.
    Settle,
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// A different slide became current.
    IndexChanged { index: usize, direction: Direction },
}

impl State {
    /// Creates a state over `len` items positioned at `index` (clamped).
    #[must_use]
    pub fn new(len: usize, index: usize) -> Self {
        Self {
            index: clamp_index(index, len),
            len,
            direction: Direction::Still,
        }
    }

    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Next => {
                if self.len == 0 {
                    return Effect::None;
                }
                self.direction = Direction::Forward;
                self.index = (self.index + 1) % self.len;
                self.changed()
            }
            Message::Previous => {
                if self.len == 0 {
                    return Effect::None;
                }
                self.direction = Direction::Backward;
                self.index = if self.index == 0 {
                    self.len - 1
                } else {
                    self.index - 1
                };
                self.changed()
            }
            Message::JumpTo(index) => {
                let index = clamp_index(index, self.len);
                if index == self.index {
                    return Effect::None;
                }
                self.index = index;
                self.changed()
            }
            Message::SetLen(len) => {
                self.len = len;
                let clamped = clamp_index(self.index, len);
                if clamped == self.index {
                    Effect::None
                } else {
                    self.index = clamped;
                    self.changed()
                }
            }
            Message::Settle => {
                self.direction = Direction::Still;
                Effect::None
            }
        }
    }

    fn changed(&self) -> Effect {
        Effect::IndexChanged {
            index: self.index,
            direction: self.direction,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

// SPDX-License-Identifier: MPL-2.0
//! Loading sub-component: which slide is being loaded and the spinner angle.
//!
//! Every slide mount gets a fresh [`SlideKey`]. Load completions carry the key
//! they were started with; a completion whose key is no longer current belongs
//! to a superseded slide and is discarded.

use std::f32::consts::TAU;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Identifies one mount of one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideKey {
    generation: u64,
    index: usize,
}

impl SlideKey {
    /// Index of the slide this key was issued for.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }
}

/// Loading state for the viewer.
#[derive(Debug, Clone, Default)]
pub struct State {
    is_loading: bool,
    generation: u64,
    current: Option<SlideKey>,
    spinner_rotation: f32,
}

/// Messages for the loading sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A slide was mounted at this index.
    Begin { index: usize },
    /// A load started with `key` finished, successfully or not.
    Completed { key: SlideKey },
    /// The viewer closed: nothing in flight is current any more.
    Invalidate,
    /// Animate the spinner.
    SpinnerTick,
}

/// Effects produced by the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// A new slide is loading under this key.
    Started(SlideKey),
    /// The current slide finished loading.
    Finished(SlideKey),
    /// The completion belonged to a superseded slide.
    Stale,
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Begin { index } => {
                self.generation = self.generation.wrapping_add(1);
                let key = SlideKey {
                    generation: self.generation,
                    index,
                };
                self.current = Some(key);
                self.is_loading = true;
                Effect::Started(key)
            }
            Message::Completed { key } => {
                if self.current != Some(key) {
                    return Effect::Stale;
                }
                if self.is_loading {
                    self.is_loading = false;
                    self.spinner_rotation = 0.0;
                }
                Effect::Finished(key)
            }
            Message::Invalidate => {
                self.generation = self.generation.wrapping_add(1);
                self.current = None;
                self.is_loading = false;
                self.spinner_rotation = 0.0;
                Effect::None
            }
            Message::SpinnerTick => {
                if self.is_loading {
                    self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % TAU;
                }
                Effect::None
            }
        }
    }

    /// Whether `key` identifies the slide currently mounted.
    #[must_use]
    pub fn is_current(&self, key: SlideKey) -> bool {
        self.current == Some(key)
    }

    /// Key of the slide currently mounted.
    #[must_use]
    pub fn current(&self) -> Option<SlideKey> {
        self.current
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn begin(state: &mut State, index: usize) -> SlideKey {
        match state.handle(Message::Begin { index }) {
            Effect::Started(key) => key,
            other => panic!("expected Started, got {other:?}"),
        }
    }

    #[test]
    fn begin_sets_loading() {
        let mut state = State::default();
        let key = begin(&mut state, 3);
        assert!(state.is_loading());
        assert_eq!(key.index(), 3);
        assert!(state.is_current(key));
    }

    #[test]
    fn completion_clears_loading() {
        let mut state = State::default();
        let key = begin(&mut state, 0);
        assert_eq!(
            state.handle(Message::Completed { key }),
            Effect::Finished(key)
        );
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_completion_does_not_touch_current_slide() {
        let mut state = State::default();
        let old = begin(&mut state, 1);
        let new = begin(&mut state, 2);

        assert_eq!(state.handle(Message::Completed { key: old }), Effect::Stale);
        assert!(state.is_loading());
        assert!(state.is_current(new));

        state.handle(Message::Completed { key: new });
        assert!(!state.is_loading());
        assert_eq!(state.handle(Message::Completed { key: old }), Effect::Stale);
        assert!(!state.is_loading());
    }

    #[test]
    fn remounting_same_index_issues_new_key() {
        let mut state = State::default();
        let first = begin(&mut state, 4);
        let second = begin(&mut state, 4);
        assert_ne!(first, second);
        assert!(!state.is_current(first));
    }

    #[test]
    fn invalidate_makes_everything_stale() {
        let mut state = State::default();
        let key = begin(&mut state, 0);
        state.handle(Message::Invalidate);
        assert!(!state.is_loading());
        assert_eq!(state.handle(Message::Completed { key }), Effect::Stale);
    }

    #[test]
    fn spinner_only_turns_while_loading() {
        let mut state = State::default();
        state.handle(Message::SpinnerTick);
        assert_eq!(state.spinner_rotation(), 0.0);

        begin(&mut state, 0);
        state.handle(Message::SpinnerTick);
        assert!(state.spinner_rotation() > 0.0);
    }
}

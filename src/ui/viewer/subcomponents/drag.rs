// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture sub-component.
//!
//! Tracks the cursor and the current press, and classifies what the press
//! turns into: a click, a pan of the zoomed image, or a horizontal swipe.

use crate::domain::ui::geometry::PanOffset;
use crate::domain::ui::newtypes::SwipeThreshold;
use iced::Point;

/// Travel (in logical pixels) under which a press still counts as a click.
const CLICK_SLOP: f32 = 4.0;

/// What the pointer was over when the button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The displayed image.
    Image,
    /// The area around it.
    Backdrop,
}

/// Navigation requested by a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Pointer travelled right.
    Previous,
    /// Pointer travelled left.
    Next,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Point,
    target: PressTarget,
    zoomed: bool,
    pan_at_start: PanOffset,
    moved: bool,
}

/// Pointer sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    cursor: Option<Point>,
    press: Option<Press>,
    threshold: SwipeThreshold,
}

/// Messages for the pointer sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Cursor moved to a position in viewport coordinates.
    CursorMoved(Point),
    /// Cursor left the window.
    CursorLeft,
    /// Primary button went down at the last known cursor position.
    Pressed {
        target: PressTarget,
        zoomed: bool,
        pan: PanOffset,
    },
    /// Primary button went up.
    Released,
    /// Forget the current press without classifying it.
    Cancel,
}

/// Effects produced by pointer gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The zoomed image is being dragged; move its centre here.
    Pan(PanOffset),
    /// A zoomed drag was released.
    DragEnded,
    /// Press and release without meaningful travel.
    Click(PressTarget),
    /// An unzoomed horizontal swipe.
    Swipe(Swipe),
}

impl State {
    /// Creates a state that classifies swipes with `threshold`.
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Handle a pointer message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::CursorMoved(position) => {
                self.cursor = Some(position);
                let Some(press) = self.press.as_mut() else {
                    return Effect::None;
                };
                let (dx, dy) = (position.x - press.origin.x, position.y - press.origin.y);
                if !press.moved && dx.hypot(dy) > CLICK_SLOP {
                    press.moved = true;
                }
                if press.moved && press.zoomed && press.target == PressTarget::Image {
                    Effect::Pan(PanOffset::new(
                        press.pan_at_start.x + dx,
                        press.pan_at_start.y + dy,
                    ))
                } else {
                    Effect::None
                }
            }
            Message::CursorLeft => {
                self.cursor = None;
                Effect::None
            }
            Message::Pressed {
                target,
                zoomed,
                pan,
            } => {
                self.press = self.cursor.map(|origin| Press {
                    origin,
                    target,
                    zoomed,
                    pan_at_start: pan,
                    moved: false,
                });
                Effect::None
            }
            Message::Released => {
                let Some(press) = self.press.take() else {
                    return Effect::None;
                };
                if !press.moved {
                    return Effect::Click(press.target);
                }
                if press.zoomed {
                    return Effect::DragEnded;
                }
                let Some(cursor) = self.cursor else {
                    return Effect::None;
                };
                self.classify_swipe(cursor.x - press.origin.x)
            }
            Message::Cancel => {
                self.press = None;
                Effect::None
            }
        }
    }

    /// Only horizontal travel counts; vertical travel never cancels a swipe.
    fn classify_swipe(&self, dx: f32) -> Effect {
        if !self.threshold.is_exceeded_by(dx) {
            return Effect::None;
        }
        if dx > 0.0 {
            Effect::Swipe(Swipe::Previous)
        } else {
            Effect::Swipe(Swipe::Next)
        }
    }

    /// Last known cursor position, if the cursor is inside the window.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Whether the primary button is held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Horizontal travel of an unzoomed press, for the slide to follow the
    /// pointer while swiping.
    #[must_use]
    pub fn swipe_offset(&self) -> f32 {
        match (self.press, self.cursor) {
            (Some(press), Some(cursor)) if press.moved && !press.zoomed => {
                cursor.x - press.origin.x
            }
            _ => 0.0,
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Slide presentation as pure functions.
//!
//! A slide's visual state is a [`Transform`]: horizontal offset as a fraction
//! of the viewport width plus an opacity. Entering slides come in from the side
//! they are travelling from, outgoing slides keep moving the same way.
//!
//! The [`Stage`] turns an offset into scroll positions: each slide sits in its
//! own hidden-scrollbar scrollable whose content is larger than the viewport,
//! so moving the image is a matter of snapping the scroll position.

use crate::domain::gallery::Resolution;
use crate::domain::ui::geometry::{Dimensions, PanOffset};
use crate::domain::ui::newtypes::TransitionDuration;
use crate::ui::viewer::subcomponents::navigation::Direction;
use std::time::Instant;

/// Visual state of one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Horizontal offset as a fraction of the viewport width.
    pub offset_x: f32,
    pub opacity: f32,
}

impl Transform {
    /// At rest in the middle of the viewport.
    pub const CENTER: Self = Self {
        offset_x: 0.0,
        opacity: 1.0,
    };
}

/// Where a slide starts when it becomes current.
///
/// A slide shown without travel (on open, or after a jump) fades in where it
/// is instead of entering from either side.
#[must_use]
pub fn enter_transform(direction: Direction) -> Transform {
    Transform {
        offset_x: f32::from(direction.sign()),
        opacity: 0.0,
    }
}

/// Where the previously current slide ends up.
#[must_use]
pub fn exit_transform(direction: Direction) -> Transform {
    Transform {
        offset_x: -f32::from(direction.sign()),
        opacity: 0.0,
    }
}

/// Linear blend between two transforms; `t` is clamped to `0..=1`.
#[must_use]
pub fn interpolate(from: Transform, to: Transform, t: f32) -> Transform {
    let t = t.clamp(0.0, 1.0);
    Transform {
        offset_x: from.offset_x + (to.offset_x - from.offset_x) * t,
        opacity: from.opacity + (to.opacity - from.opacity) * t,
    }
}

/// Quadratic ease-out.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Which rendition to display. The preview is used whenever the image is not
/// zoomed, including the instant zoom is turned off.
#[must_use]
pub fn select_resolution(is_zoomed: bool) -> Resolution {
    if is_zoomed {
        Resolution::Full
    } else {
        Resolution::Preview
    }
}

// =============================================================================
// Transition
// =============================================================================

/// A running slide change.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    outgoing: Option<usize>,
    direction: Direction,
    started: Option<Instant>,
    progress: f32,
}

impl Transition {
    /// Starts a transition away from `outgoing`. The clock starts on the
    /// first tick.
    #[must_use]
    pub fn new(outgoing: Option<usize>, direction: Direction) -> Self {
        Self {
            outgoing,
            direction,
            started: None,
            progress: 0.0,
        }
    }

    /// Advances the clock. Returns `true` once the transition has finished.
    pub fn advance(&mut self, now: Instant, duration: TransitionDuration) -> bool {
        if duration.is_instant() {
            self.progress = 1.0;
            return true;
        }
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        self.progress = (elapsed / duration.as_duration().as_secs_f32()).min(1.0);
        self.progress >= 1.0
    }

    /// Index of the slide leaving the screen, if any.
    #[must_use]
    pub fn outgoing(&self) -> Option<usize> {
        self.outgoing
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current transform of the entering slide.
    #[must_use]
    pub fn incoming_transform(&self) -> Transform {
        interpolate(
            enter_transform(self.direction),
            Transform::CENTER,
            ease_out(self.progress),
        )
    }

    /// Current transform of the leaving slide.
    #[must_use]
    pub fn outgoing_transform(&self) -> Transform {
        interpolate(
            Transform::CENTER,
            exit_transform(self.direction),
            ease_in(self.progress),
        )
    }
}

// =============================================================================
// Stage
// =============================================================================

/// Scroll geometry that lets a slide be displaced by an arbitrary offset.
///
/// The content is the viewport grown by `travel` on every side, with the image
/// centred in it. Scrolling to `travel - shift` displays the image shifted by
/// `shift`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    viewport: Dimensions,
    travel: Dimensions,
}

impl Stage {
    /// Builds a stage for an image displayed at `image` size. Horizontal travel
    /// always covers a full viewport width so a slide can move off screen.
    #[must_use]
    pub fn new(viewport: Dimensions, image: Dimensions) -> Self {
        let overflow_x = ((image.width - viewport.width) / 2.0).max(0.0);
        let overflow_y = ((image.height - viewport.height) / 2.0).max(0.0);
        Self {
            viewport,
            travel: Dimensions::new(viewport.width.max(overflow_x), overflow_y),
        }
    }

    /// Size of the scrollable content.
    #[must_use]
    pub fn content_size(&self) -> Dimensions {
        Dimensions::new(
            self.viewport.width + 2.0 * self.travel.width,
            self.viewport.height + 2.0 * self.travel.height,
        )
    }

    /// Relative scroll position (`0..=1` per axis) that shows the image
    /// displaced by `shift` from the viewport centre.
    #[must_use]
    pub fn relative_offset(&self, shift: PanOffset) -> (f32, f32) {
        (
            relative_axis(self.travel.width, shift.x),
            relative_axis(self.travel.height, shift.y),
        )
    }
}

fn relative_axis(travel: f32, shift: f32) -> f32 {
    if travel <= 0.0 {
        return 0.5;
    }
    ((travel - shift) / (2.0 * travel)).clamp(0.0, 1.0)
}

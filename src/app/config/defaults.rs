// SPDX-License-Identifier: MPL-2.0
//! Default values for every configuration field.
//!
//! Viewer bounds live with the domain newtypes that enforce them and are
//! re-exported here so the config layer has a single place to look.
//!
//! # Categories
//!
//! - **Viewer**: Zoom, swipe, hint, settle and transition tunables
//! - **Gallery**: Paging, rendition sizes and the decoded image cache

pub use crate::domain::ui::newtypes::{
    fill_bounds, page_bounds, swipe_bounds, timing_bounds, zoom_bounds,
};

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Scale applied when zooming in.
pub const DEFAULT_ZOOM_FACTOR: f32 = zoom_bounds::DEFAULT_FACTOR;

/// Horizontal distance a press must travel to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = swipe_bounds::DEFAULT_PX;

/// How long the "drag to pan" hint stays visible.
pub const DEFAULT_HINT_DURATION_MS: u64 = timing_bounds::DEFAULT_HINT_MS;

/// Wait after a layout change before drag bounds are measured.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = timing_bounds::DEFAULT_SETTLE_MS;

/// Slide transition length. Zero disables the animation.
pub const DEFAULT_TRANSITION_MS: u64 = timing_bounds::DEFAULT_TRANSITION_MS;

/// Fraction of the viewport an unzoomed image may occupy.
pub const DEFAULT_VIEWPORT_FILL: f32 = fill_bounds::DEFAULT;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Items requested per page.
pub const DEFAULT_PAGE_SIZE: usize = page_bounds::DEFAULT;

/// Longest edge of the preview rendition, in pixels.
pub const DEFAULT_PREVIEW_MAX_EDGE: u32 = crate::infrastructure::directory::DEFAULT_PREVIEW_MAX_EDGE;

/// Longest edge of the full rendition, in pixels.
pub const DEFAULT_FULL_MAX_EDGE: u32 = 3000;

/// Decoded images kept in memory.
pub const DEFAULT_CACHE_CAPACITY: usize = crate::ui::viewer::cache::DEFAULT_CAPACITY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rendition_is_larger_than_preview() {
        assert!(DEFAULT_FULL_MAX_EDGE > DEFAULT_PREVIEW_MAX_EDGE);
    }

    #[test]
    fn viewer_defaults_are_within_bounds() {
        assert!((zoom_bounds::MIN_FACTOR..=zoom_bounds::MAX_FACTOR).contains(&DEFAULT_ZOOM_FACTOR));
        assert!((fill_bounds::MIN..=fill_bounds::MAX).contains(&DEFAULT_VIEWPORT_FILL));
        assert!(
            (timing_bounds::MIN_HINT_MS..=timing_bounds::MAX_HINT_MS)
                .contains(&DEFAULT_HINT_DURATION_MS)
        );
    }
}

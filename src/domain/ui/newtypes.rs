// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Type-safe wrappers for the viewer's tunables. Each one clamps on
//! construction so that a hand-edited config file can never put the viewer
//! into a nonsensical state.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Zoom factor bounds (1x to 8x).
pub mod zoom_bounds {
    /// Minimum factor. At 1x zooming has no visible effect.
    pub const MIN_FACTOR: f32 = 1.0;
    /// Maximum factor.
    pub const MAX_FACTOR: f32 = 8.0;
    /// Default factor.
    pub const DEFAULT_FACTOR: f32 = 2.0;
}

/// Swipe threshold bounds in logical pixels.
pub mod swipe_bounds {
    pub const MIN_PX: f32 = 10.0;
    pub const MAX_PX: f32 = 1000.0;
    pub const DEFAULT_PX: f32 = 100.0;
}

/// Timing bounds in milliseconds.
pub mod timing_bounds {
    /// Zoom hint visibility.
    pub const MIN_HINT_MS: u64 = 500;
    pub const MAX_HINT_MS: u64 = 10_000;
    pub const DEFAULT_HINT_MS: u64 = 2000;

    /// Wait before measuring drag bounds.
    pub const MIN_SETTLE_MS: u64 = 0;
    pub const MAX_SETTLE_MS: u64 = 500;
    pub const DEFAULT_SETTLE_MS: u64 = 50;

    /// Slide transition length.
    pub const MIN_TRANSITION_MS: u64 = 0;
    pub const MAX_TRANSITION_MS: u64 = 2000;
    pub const DEFAULT_TRANSITION_MS: u64 = 400;
}

/// Fraction of the viewport an unzoomed image may occupy.
pub mod fill_bounds {
    pub const MIN: f32 = 0.5;
    pub const MAX: f32 = 1.0;
    pub const DEFAULT: f32 = 0.9;
}

/// Gallery page size bounds.
pub mod page_bounds {
    pub const MIN: usize = 1;
    pub const MAX: usize = 200;
    pub const DEFAULT: usize = 10;
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Scale applied to the image while zoomed, guaranteed within 1x–8x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new factor, clamping the value to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if !factor.is_finite() {
            return Self::default();
        }
        Self(factor.clamp(zoom_bounds::MIN_FACTOR, zoom_bounds::MAX_FACTOR))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the factor is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN_FACTOR
    }

    /// Returns whether the factor is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX_FACTOR
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT_FACTOR)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel for a release to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        Self(px.clamp(swipe_bounds::MIN_PX, swipe_bounds::MAX_PX))
    }

    /// Returns the threshold in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether a horizontal travel of `dx` exceeds the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, dx: f32) -> bool {
        dx.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// HintDuration
// =============================================================================

/// How long the zoom hint stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintDuration(u64);

impl HintDuration {
    /// Creates a new duration, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(timing_bounds::MIN_HINT_MS, timing_bounds::MAX_HINT_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HintDuration {
    fn default() -> Self {
        Self(timing_bounds::DEFAULT_HINT_MS)
    }
}

// =============================================================================
// SettleDelay
// =============================================================================

/// Delay before drag bounds are measured after the layout changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleDelay(u64);

impl SettleDelay {
    /// Creates a new delay, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(timing_bounds::MIN_SETTLE_MS, timing_bounds::MAX_SETTLE_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SettleDelay {
    fn default() -> Self {
        Self(timing_bounds::DEFAULT_SETTLE_MS)
    }
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Length of the slide enter/exit animation. Zero disables animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new duration, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(
            timing_bounds::MIN_TRANSITION_MS,
            timing_bounds::MAX_TRANSITION_MS,
        ))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns whether transitions complete instantly.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(timing_bounds::DEFAULT_TRANSITION_MS)
    }
}

// =============================================================================
// ViewportFill
// =============================================================================

/// Share of the viewport an unzoomed image is fitted into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFill(f32);

impl ViewportFill {
    /// Creates a new fill fraction, clamping the value to the valid range.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if !fraction.is_finite() {
            return Self::default();
        }
        Self(fraction.clamp(fill_bounds::MIN, fill_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ViewportFill {
    fn default() -> Self {
        Self(fill_bounds::DEFAULT)
    }
}

// =============================================================================
// PageSize
// =============================================================================

/// Number of items requested from a gallery source per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a new page size, clamping the value to the valid range.
    #[must_use]
    pub fn new(items: usize) -> Self {
        Self(items.clamp(page_bounds::MIN, page_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn zoom_factor_clamps() {
        assert_abs_diff_eq!(ZoomFactor::new(0.5).value(), 1.0);
        assert_abs_diff_eq!(ZoomFactor::new(20.0).value(), 8.0);
        assert_abs_diff_eq!(ZoomFactor::new(3.0).value(), 3.0);
    }

    #[test]
    fn zoom_factor_non_finite_uses_default() {
        assert_eq!(ZoomFactor::new(f32::NAN), ZoomFactor::default());
        assert_eq!(ZoomFactor::new(f32::INFINITY), ZoomFactor::default());
    }

    #[test]
    fn zoom_factor_default_is_double() {
        assert_abs_diff_eq!(ZoomFactor::default().value(), 2.0);
        assert!(!ZoomFactor::default().is_min());
        assert!(ZoomFactor::new(1.0).is_min());
        assert!(ZoomFactor::new(8.0).is_max());
    }

    #[test]
    fn swipe_threshold_is_strict() {
        let threshold = SwipeThreshold::default();
        assert!(!threshold.is_exceeded_by(100.0));
        assert!(threshold.is_exceeded_by(101.0));
        assert!(threshold.is_exceeded_by(-150.0));
    }

    #[test]
    fn swipe_threshold_clamps() {
        assert_abs_diff_eq!(SwipeThreshold::new(1.0).value(), 10.0);
        assert_abs_diff_eq!(SwipeThreshold::new(5000.0).value(), 1000.0);
    }

    #[test]
    fn hint_duration_clamps_and_converts() {
        assert_eq!(HintDuration::new(10).millis(), 500);
        assert_eq!(HintDuration::new(60_000).millis(), 10_000);
        assert_eq!(HintDuration::default().as_duration(), Duration::from_secs(2));
    }

    #[test]
    fn settle_delay_default() {
        assert_eq!(SettleDelay::default().as_duration(), Duration::from_millis(50));
        assert_eq!(SettleDelay::new(9999).millis(), 500);
    }

    #[test]
    fn transition_duration_instant() {
        assert!(TransitionDuration::new(0).is_instant());
        assert!(!TransitionDuration::default().is_instant());
        assert_eq!(TransitionDuration::new(5000).millis(), 2000);
    }

    #[test]
    fn viewport_fill_clamps() {
        assert_abs_diff_eq!(ViewportFill::default().value(), 0.9);
        assert_abs_diff_eq!(ViewportFill::new(0.1).value(), 0.5);
        assert_abs_diff_eq!(ViewportFill::new(2.0).value(), 1.0);
    }

    #[test]
    fn page_size_clamps() {
        assert_eq!(PageSize::new(0).value(), 1);
        assert_eq!(PageSize::new(1000).value(), 200);
        assert_eq!(PageSize::default().value(), 10);
    }
}

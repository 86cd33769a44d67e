// SPDX-License-Identifier: MPL-2.0
//! Viewer geometry: rendered sizes, pan offsets and the bounds that keep a
//! zoomed image covering the viewport.
//!
//! All values are logical pixels. The pan offset is the displacement of the
//! image centre from the viewport centre.

use super::newtypes::{ViewportFill, ZoomFactor};

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns whether either side is zero or negative.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Multiplies both sides by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// Displacement of the image centre from the viewport centre.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns whether the offset is exactly centred.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

// =============================================================================
// DragBounds
// =============================================================================

/// Rectangle of permissible pan offsets.
///
/// `left <= 0 <= right` and `top <= 0 <= bottom` always hold; an axis on which
/// the zoomed image fits inside the viewport collapses to `0..=0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragBounds {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl DragBounds {
    /// Bounds that only allow the centred position.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Computes the bounds for an image of `rendered` size magnified by
    /// `factor` inside `viewport`.
    #[must_use]
    pub fn compute(rendered: Dimensions, viewport: Dimensions, factor: ZoomFactor) -> Self {
        let zoomed = rendered.scaled(factor.value());
        let x = half_overflow(zoomed.width, viewport.width);
        let y = half_overflow(zoomed.height, viewport.height);

        Self {
            top: -y,
            right: x,
            bottom: y,
            left: -x,
        }
    }

    /// Clamps an offset into the bounds.
    #[must_use]
    pub fn clamp(&self, offset: PanOffset) -> PanOffset {
        PanOffset {
            x: clamp_axis(offset.x, self.left, self.right),
            y: clamp_axis(offset.y, self.top, self.bottom),
        }
    }

    /// Returns whether `offset` lies within the bounds (edges included).
    #[must_use]
    pub fn contains(&self, offset: PanOffset) -> bool {
        (self.left..=self.right).contains(&offset.x) && (self.top..=self.bottom).contains(&offset.y)
    }

    /// Maximum horizontal travel from the centre.
    #[must_use]
    pub fn half_width(&self) -> f32 {
        self.right
    }

    /// Maximum vertical travel from the centre.
    #[must_use]
    pub fn half_height(&self) -> f32 {
        self.bottom
    }
}

fn half_overflow(content: f32, viewport: f32) -> f32 {
    let overflow = (content - viewport) / 2.0;
    if overflow.is_finite() {
        overflow.max(0.0)
    } else {
        0.0
    }
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(min, max)
}

// =============================================================================
// Fitting
// =============================================================================

/// Scales `natural` to the largest size that fits inside `area` while
/// preserving its aspect ratio.
#[must_use]
pub fn fit_within(natural: Dimensions, area: Dimensions) -> Dimensions {
    if natural.is_empty() || area.is_empty() {
        return Dimensions::default();
    }
    let scale = (area.width / natural.width).min(area.height / natural.height);
    natural.scaled(scale)
}

/// Size at which an unzoomed image is displayed: fitted into the share of the
/// viewport given by `fill`.
#[must_use]
pub fn rendered_size(natural: Dimensions, viewport: Dimensions, fill: ViewportFill) -> Dimensions {
    fit_within(natural, viewport.scaled(fill.value()))
}

// =============================================================================
// Hit testing
// =============================================================================

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Returns whether the point lies inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// On-screen rectangle of the displayed image: `rendered` scaled by
    /// `scale`, centred in `viewport` and shifted by `pan`.
    #[must_use]
    pub fn image_in_viewport(
        viewport: Dimensions,
        rendered: Dimensions,
        scale: f32,
        pan: PanOffset,
    ) -> Self {
        let size = rendered.scaled(scale);
        Self {
            x: (viewport.width - size.width) / 2.0 + pan.x,
            y: (viewport.height - size.height) / 2.0 + pan.y,
            width: size.width,
            height: size.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn scenario_bounds() -> DragBounds {
        DragBounds::compute(
            Dimensions::new(2000.0, 1500.0),
            Dimensions::new(1000.0, 800.0),
            ZoomFactor::new(2.0),
        )
    }

    #[test]
    fn bounds_for_oversized_image() {
        let bounds = scenario_bounds();
        assert_abs_diff_eq!(bounds.right, 1500.0);
        assert_abs_diff_eq!(bounds.left, -1500.0);
        assert_abs_diff_eq!(bounds.bottom, 1100.0);
        assert_abs_diff_eq!(bounds.top, -1100.0);
    }

    #[test]
    fn clamp_limits_each_axis_independently() {
        let clamped = scenario_bounds().clamp(PanOffset::new(2000.0, 50.0));
        assert_abs_diff_eq!(clamped.x, 1500.0);
        assert_abs_diff_eq!(clamped.y, 50.0);

        let clamped = scenario_bounds().clamp(PanOffset::new(-9000.0, -9000.0));
        assert_abs_diff_eq!(clamped.x, -1500.0);
        assert_abs_diff_eq!(clamped.y, -1100.0);
    }

    #[test]
    fn axis_collapses_when_zoomed_image_fits() {
        let bounds = DragBounds::compute(
            Dimensions::new(300.0, 700.0),
            Dimensions::new(1000.0, 800.0),
            ZoomFactor::new(2.0),
        );
        assert_abs_diff_eq!(bounds.right, 0.0);
        assert_abs_diff_eq!(bounds.left, 0.0);
        assert_abs_diff_eq!(bounds.bottom, 300.0);

        let clamped = bounds.clamp(PanOffset::new(40.0, 10.0));
        assert_abs_diff_eq!(clamped.x, 0.0);
        assert_abs_diff_eq!(clamped.y, 10.0);
    }

    #[test]
    fn empty_viewport_or_image_never_yields_negative_bounds() {
        let bounds = DragBounds::compute(
            Dimensions::default(),
            Dimensions::new(1000.0, 800.0),
            ZoomFactor::default(),
        );
        assert_eq!(bounds, DragBounds::ZERO);
    }

    #[test]
    fn clamp_replaces_nan_with_centre() {
        let clamped = scenario_bounds().clamp(PanOffset::new(f32::NAN, 20.0));
        assert_abs_diff_eq!(clamped.x, 0.0);
        assert_abs_diff_eq!(clamped.y, 20.0);
    }

    #[test]
    fn contains_includes_edges() {
        let bounds = scenario_bounds();
        assert!(bounds.contains(PanOffset::new(1500.0, -1100.0)));
        assert!(!bounds.contains(PanOffset::new(1500.1, 0.0)));
    }

    #[test]
    fn fit_within_preserves_ratio() {
        let fitted = fit_within(Dimensions::new(4000.0, 2000.0), Dimensions::new(900.0, 720.0));
        assert_abs_diff_eq!(fitted.width, 900.0);
        assert_abs_diff_eq!(fitted.height, 450.0);

        let small = fit_within(Dimensions::new(100.0, 200.0), Dimensions::new(900.0, 720.0));
        assert_abs_diff_eq!(small.width, 360.0);
        assert_abs_diff_eq!(small.height, 720.0);
    }

    #[test]
    fn fit_within_empty_input_is_empty() {
        assert!(fit_within(Dimensions::default(), Dimensions::new(10.0, 10.0)).is_empty());
        assert!(fit_within(Dimensions::new(10.0, 10.0), Dimensions::default()).is_empty());
    }

    #[test]
    fn rendered_size_uses_viewport_fill() {
        let rendered = rendered_size(
            Dimensions::new(3000.0, 3000.0),
            Dimensions::new(1000.0, 800.0),
            ViewportFill::default(),
        );
        assert_abs_diff_eq!(rendered.width, 720.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rendered.height, 720.0, epsilon = 1e-3);
    }

    #[test]
    fn image_rect_follows_pan_and_scale() {
        let viewport = Dimensions::new(1000.0, 800.0);
        let rendered = Dimensions::new(400.0, 300.0);

        let rect = Rect::image_in_viewport(viewport, rendered, 1.0, PanOffset::ZERO);
        assert!(rect.contains(500.0, 400.0));
        assert!(!rect.contains(250.0, 400.0));

        let zoomed = Rect::image_in_viewport(viewport, rendered, 2.0, PanOffset::new(100.0, 0.0));
        assert_abs_diff_eq!(zoomed.x, 200.0);
        assert_abs_diff_eq!(zoomed.width, 800.0);
        assert!(zoomed.contains(250.0, 400.0));
    }
}

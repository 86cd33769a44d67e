// SPDX-License-Identifier: MPL-2.0
//! Aspect-ratio based sizing buckets for the gallery grid.
//!
//! Wide images get more room in a row, tall images less. The cutoffs are
//! empirical and kept exactly as the gallery has always used them; swapping
//! them for a continuous function would change every existing layout.

use super::AspectRatio;
use std::ops::Range;

/// Share of a row available to thumbnails, in percent.
pub const ROW_PERCENT: u16 = 100;

/// Relative share of a grid row given to a thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutWeight {
    /// Ratio of 2 or more.
    VeryWide,
    /// Ratio above 1.5.
    Wide,
    /// Ratio above 1.
    SlightlyWide,
    /// Ratio of exactly 1.
    Square,
    /// Ratio below 0.6.
    VeryTall,
    /// Everything else (mildly portrait).
    Standard,
}

impl LayoutWeight {
    /// Buckets an aspect ratio.
    #[must_use]
    pub fn from_aspect_ratio(ratio: AspectRatio) -> Self {
        let r = ratio.value();
        if r >= 2.0 {
            Self::VeryWide
        } else if r > 1.5 {
            Self::Wide
        } else if r > 1.0 {
            Self::SlightlyWide
        } else if (r - 1.0).abs() < f32::EPSILON {
            Self::Square
        } else if r < 0.6 {
            Self::VeryTall
        } else {
            Self::Standard
        }
    }

    /// Flex basis as a percentage of the row width.
    #[must_use]
    pub fn flex_basis_percent(self) -> u16 {
        match self {
            Self::VeryWide => 50,
            Self::Wide => 32,
            Self::SlightlyWide => 24,
            Self::Square => 20,
            Self::VeryTall => 18,
            Self::Standard => 22,
        }
    }
}

/// Splits a sequence of weights into rows, wrapping as soon as the next item
/// would push a row past [`ROW_PERCENT`]. Every row holds at least one item.
#[must_use]
pub fn pack_rows(weights: impl IntoIterator<Item = LayoutWeight>) -> Vec<Range<usize>> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut end = 0;
    let mut used = 0;

    for weight in weights {
        let basis = weight.flex_basis_percent();
        if end > start && used + basis > ROW_PERCENT {
            rows.push(start..end);
            start = end;
            used = 0;
        }
        used += basis;
        end += 1;
    }

    if end > start {
        rows.push(start..end);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight(ratio: f32) -> LayoutWeight {
        LayoutWeight::from_aspect_ratio(AspectRatio::new(ratio).unwrap())
    }

    #[test]
    fn buckets_follow_cutoffs() {
        assert_eq!(weight(2.0), LayoutWeight::VeryWide);
        assert_eq!(weight(3.5), LayoutWeight::VeryWide);
        assert_eq!(weight(1.6), LayoutWeight::Wide);
        assert_eq!(weight(1.5), LayoutWeight::SlightlyWide);
        assert_eq!(weight(1.01), LayoutWeight::SlightlyWide);
        assert_eq!(weight(1.0), LayoutWeight::Square);
        assert_eq!(weight(0.75), LayoutWeight::Standard);
        assert_eq!(weight(0.6), LayoutWeight::Standard);
        assert_eq!(weight(0.59), LayoutWeight::VeryTall);
    }

    #[test]
    fn square_from_equal_dimensions() {
        let ratio = AspectRatio::from_dimensions(1024, 1024).unwrap();
        assert_eq!(LayoutWeight::from_aspect_ratio(ratio), LayoutWeight::Square);
    }

    #[test]
    fn rows_wrap_before_overflowing() {
        use LayoutWeight::*;
        // 50 + 32 fits, 24 would overflow; 24 + 20 + 22 + 18 fits, 50 wraps.
        let rows = pack_rows([VeryWide, Wide, SlightlyWide, Square, Standard, VeryTall, VeryWide]);
        assert_eq!(rows, vec![0..2, 2..6, 6..7]);
    }

    #[test]
    fn exactly_full_row_does_not_wrap() {
        let rows = pack_rows([LayoutWeight::VeryWide, LayoutWeight::VeryWide]);
        assert_eq!(rows, vec![0..2]);
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(pack_rows(std::iter::empty()).is_empty());
    }

    #[test]
    fn flex_basis_values() {
        assert_eq!(LayoutWeight::VeryWide.flex_basis_percent(), 50);
        assert_eq!(LayoutWeight::Wide.flex_basis_percent(), 32);
        assert_eq!(LayoutWeight::SlightlyWide.flex_basis_percent(), 24);
        assert_eq!(LayoutWeight::Square.flex_basis_percent(), 20);
        assert_eq!(LayoutWeight::VeryTall.flex_basis_percent(), 18);
        assert_eq!(LayoutWeight::Standard.flex_basis_percent(), 22);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Gallery item types.
//!
//! A [`GalleryItem`] is immutable once produced by a gallery source. The order
//! in which items arrive is meaningful: it defines previous/next in the viewer.

pub mod layout;

pub use layout::{pack_rows, LayoutWeight};

use std::fmt;
use std::path::PathBuf;

// =============================================================================
// ItemId
// =============================================================================

/// Stable, unique identifier of a gallery item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// AspectRatio
// =============================================================================

/// Width divided by height, guaranteed positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f32);

impl AspectRatio {
    /// A 1:1 ratio, used when the real ratio is unknown.
    pub const SQUARE: Self = Self(1.0);

    /// Creates a ratio, rejecting zero, negative and non-finite values.
    #[must_use]
    pub fn new(ratio: f32) -> Option<Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(Self(ratio))
    }

    /// Creates a ratio from pixel dimensions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        if height == 0 {
            return None;
        }
        Self::new(width as f32 / height as f32)
    }

    /// Parses the `"width/height"` notation used by gallery listings
    /// (e.g. `"3/2"`). A bare number is accepted as the ratio itself.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.split_once('/') {
            Some((w, h)) => {
                let w: f32 = w.trim().parse().ok()?;
                let h: f32 = h.trim().parse().ok()?;
                if h == 0.0 {
                    return None;
                }
                Self::new(w / h)
            }
            None => Self::new(input.trim().parse().ok()?),
        }
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the image is wider than it is tall.
    #[must_use]
    pub fn is_landscape(self) -> bool {
        self.0 > 1.0
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

// =============================================================================
// ImageSource / Resolution
// =============================================================================

/// Location of one rendition of an image, with an optional cap on its
/// longest edge applied at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageSource {
    /// File to decode.
    pub path: PathBuf,
    /// Longest edge in pixels after decoding, if the rendition is downscaled.
    pub max_edge: Option<u32>,
}

impl ImageSource {
    /// Creates a source decoded at its natural size.
    pub fn original(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_edge: None,
        }
    }

    /// Creates a source downscaled so that its longest edge is at most `max_edge`.
    pub fn capped(path: impl Into<PathBuf>, max_edge: u32) -> Self {
        Self {
            path: path.into(),
            max_edge: Some(max_edge),
        }
    }
}

/// Which rendition of an item is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Lower-resolution rendition, shown while browsing and sliding.
    Preview,
    /// Highest-resolution rendition, shown while zoomed.
    Full,
}

// =============================================================================
// GalleryItem
// =============================================================================

/// One image of the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: ItemId,
    pub low_res: ImageSource,
    pub high_res: ImageSource,
    pub alt_text: String,
    pub aspect_ratio: AspectRatio,
    pub caption: Option<String>,
}

impl GalleryItem {
    /// Returns the source for the requested rendition.
    #[must_use]
    pub fn source(&self, resolution: Resolution) -> &ImageSource {
        match resolution {
            Resolution::Preview => &self.low_res,
            Resolution::Full => &self.high_res,
        }
    }

    /// Returns the caption if it has visible content.
    #[must_use]
    pub fn visible_caption(&self) -> Option<&str> {
        self.caption
            .as_deref()
            .map(str::trim)
            .filter(|caption| !caption.is_empty())
    }
}

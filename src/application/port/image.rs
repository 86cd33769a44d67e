// SPDX-License-Identifier: MPL-2.0
//! Image decoding port.
//!
//! The viewer asks an [`ImageLoader`] for the pixels of one rendition of an
//! item. The loader runs on the async executor; the viewer only sees the
//! outcome, tagged with the slide it was requested for.

use crate::domain::gallery::ImageSource;
use thiserror::Error;

/// Errors that can occur while decoding an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read image: {0}")]
    Io(String),

    /// The file format is not supported.
    #[error("unsupported image format")]
    UnsupportedFormat,

    /// The data could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// The decoded image has a zero-sized side.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Decoded RGBA pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Port for decoding images.
pub trait ImageLoader: Send + Sync {
    /// Decodes `source`, downscaled to its `max_edge` if one is set.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file cannot be read or decoded.
    fn load(&self, source: &ImageSource) -> Result<DecodedImage, LoadError>;
}

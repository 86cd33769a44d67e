// SPDX-License-Identifier: MPL-2.0
//! Filesystem image loader using the `image` crate.

use crate::application::port::image::{DecodedImage, ImageLoader, LoadError};
use crate::domain::gallery::ImageSource;
use image_rs::imageops::FilterType;
use image_rs::{GenericImageView, ImageError};

/// Decodes images from disk, downscaling to the rendition's longest edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

impl FsImageLoader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, source: &ImageSource) -> Result<DecodedImage, LoadError> {
        let bytes = std::fs::read(&source.path).map_err(|e| LoadError::Io(e.to_string()))?;
        let mut img = image_rs::load_from_memory(&bytes).map_err(map_image_error)?;

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(LoadError::InvalidDimensions { width, height });
        }

        if let Some(max_edge) = source.max_edge {
            if width.max(height) > max_edge {
                // `resize` keeps the aspect ratio within the given box.
                img = img.resize(max_edge, max_edge, FilterType::Triangle);
            }
        }

        let (width, height) = img.dimensions();
        tracing::trace!(path = %source.path.display(), width, height, "decoded image");

        Ok(DecodedImage {
            width,
            height,
            pixels: img.to_rgba8().into_vec(),
        })
    }
}

fn map_image_error(err: ImageError) -> LoadError {
    match err {
        ImageError::Unsupported(_) => LoadError::UnsupportedFormat,
        ImageError::IoError(e) => LoadError::Io(e.to_string()),
        other => LoadError::Decode(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::path::Path;
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]))
            .save(path)
            .expect("failed to write png");
    }

    #[test]
    fn loads_natural_size_without_cap() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("sample.png");
        write_png(&path, 4, 2);

        let decoded = FsImageLoader::new()
            .load(&ImageSource::original(&path))
            .expect("png should decode");
        assert_eq!((decoded.width, decoded.height), (4, 2));
        assert_eq!(decoded.pixels.len(), 4 * 2 * 4);
        assert_eq!(&decoded.pixels[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn downscales_to_max_edge() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("large.png");
        write_png(&path, 200, 100);

        let decoded = FsImageLoader::new()
            .load(&ImageSource::capped(&path, 50))
            .expect("png should decode");
        assert_eq!((decoded.width, decoded.height), (50, 25));
    }

    #[test]
    fn small_images_are_not_upscaled() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("small.png");
        write_png(&path, 10, 20);

        let decoded = FsImageLoader::new()
            .load(&ImageSource::capped(&path, 1200))
            .expect("png should decode");
        assert_eq!((decoded.width, decoded.height), (10, 20));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = FsImageLoader::new().load(&ImageSource::original(dir.path().join("nope.png")));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let result = FsImageLoader::new().load(&ImageSource::original(&path));
        assert!(matches!(
            result,
            Err(LoadError::UnsupportedFormat | LoadError::Decode(_))
        ));
    }
}

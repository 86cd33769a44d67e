// SPDX-License-Identifier: MPL-2.0
//! Gallery source backed by a local directory of images.
//!
//! Files are listed by name so that pages stay stable between fetches. Only the
//! requested slice has its header read for dimensions.

use crate::application::port::gallery::{GallerySource, SourceError};
use crate::domain::gallery::{AspectRatio, GalleryItem, ImageSource, ItemId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Raster formats the loader can decode.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Longest edge of the preview rendition when not configured.
pub const DEFAULT_PREVIEW_MAX_EDGE: u32 = 1200;

/// Lists the images of one directory as gallery items.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    preview_max_edge: u32,
    full_max_edge: Option<u32>,
}

impl DirectorySource {
    /// Creates a source for `root`, with previews capped at the default edge
    /// and full renditions left at their natural size.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            preview_max_edge: DEFAULT_PREVIEW_MAX_EDGE,
            full_max_edge: None,
        }
    }

    #[must_use]
    pub fn with_preview_max_edge(mut self, max_edge: u32) -> Self {
        self.preview_max_edge = max_edge.max(1);
        self
    }

    /// Caps the full rendition as well; `None` keeps the natural size.
    #[must_use]
    pub fn with_full_max_edge(mut self, max_edge: Option<u32>) -> Self {
        self.full_max_edge = max_edge.map(|edge| edge.max(1));
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn list_files(&self) -> Result<Vec<PathBuf>, SourceError> {
        let entries = std::fs::read_dir(&self.root).map_err(|err| match err.kind() {
            ErrorKind::NotFound => SourceError::NotFound(self.root.display().to_string()),
            _ => SourceError::Io(err.to_string()),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| SourceError::Io(err.to_string()))?.path();
            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn item_for(&self, path: PathBuf) -> Result<GalleryItem, SourceError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| SourceError::InvalidEntry(path.display().to_string()))?
            .to_string();

        // An unreadable header keeps its slot so offsets stay aligned with the
        // listing; the viewer reports the decode failure when it gets there.
        let aspect_ratio = match image_rs::image_dimensions(&path) {
            Ok((width, height)) => {
                AspectRatio::from_dimensions(width, height).unwrap_or_default()
            }
            Err(err) => {
                tracing::warn!(file = %file_name, error = %err, "unreadable image header");
                AspectRatio::default()
            }
        };

        let title = title_from_path(&path);
        let high_res = match self.full_max_edge {
            Some(edge) => ImageSource::capped(&path, edge),
            None => ImageSource::original(&path),
        };

        Ok(GalleryItem {
            id: ItemId::new(file_name),
            low_res: ImageSource::capped(&path, self.preview_max_edge),
            high_res,
            alt_text: title.clone(),
            aspect_ratio,
            caption: Some(title),
        })
    }
}

impl GallerySource for DirectorySource {
    fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<GalleryItem>, SourceError> {
        let files = self.list_files()?;
        let mut page = Vec::with_capacity(limit.min(files.len()));

        for path in files.into_iter().skip(offset).take(limit) {
            page.push(self.item_for(path)?);
        }

        tracing::debug!(offset, limit, returned = page.len(), "fetched gallery page");
        Ok(page)
    }
}

/// Whether `path` has one of the [`IMAGE_EXTENSIONS`].
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Human-readable title from a file stem: `sunset_over-lake.jpg` → `sunset over lake`.
fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .replace(['_', '-'], " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save(dir.join(name))
            .expect("failed to write png");
    }

    #[test]
    fn pages_are_sorted_by_file_name() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(dir.path(), "c.png", 2, 2);
        write_png(dir.path(), "a.png", 4, 2);
        write_png(dir.path(), "b.png", 2, 4);
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let source = DirectorySource::new(dir.path());
        let first = source.fetch_page(2, 0).unwrap();
        let second = source.fetch_page(2, 2).unwrap();

        let ids: Vec<_> = first
            .iter()
            .chain(second.iter())
            .map(|item| item.id.as_str().to_string())
            .collect();
        assert_eq!(ids, ["a.png", "b.png", "c.png"]);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn items_carry_aspect_ratio_and_renditions() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(dir.path(), "wide_view.png", 30, 10);

        let source = DirectorySource::new(dir.path()).with_preview_max_edge(600);
        let item = source.fetch_page(10, 0).unwrap().remove(0);

        assert!((item.aspect_ratio.value() - 3.0).abs() < 1e-6);
        assert_eq!(item.low_res.max_edge, Some(600));
        assert_eq!(item.high_res.max_edge, None);
        assert_eq!(item.caption.as_deref(), Some("wide view"));
        assert_eq!(item.alt_text, "wide view");
    }

    #[test]
    fn broken_files_keep_their_slot() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(dir.path(), "good.png", 4, 2);
        std::fs::write(dir.path().join("bad.png"), b"not an image").unwrap();

        let page = DirectorySource::new(dir.path()).fetch_page(10, 0).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id.as_str(), "bad.png");
        assert_eq!(page[0].aspect_ratio, AspectRatio::SQUARE);
        assert_eq!(page[1].id.as_str(), "good.png");
    }

    #[test]
    fn missing_directory_is_not_found() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = DirectorySource::new(dir.path().join("missing"));
        assert!(matches!(
            source.fetch_page(10, 0),
            Err(SourceError::NotFound(_))
        ));
    }

    #[test]
    fn offset_past_end_returns_empty_page() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(dir.path(), "only.png", 2, 2);
        let page = DirectorySource::new(dir.path()).fetch_page(10, 5).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.webp")));
        assert!(!is_supported_image(Path::new("movie.mp4")));
        assert!(!is_supported_image(Path::new("README")));
    }
}

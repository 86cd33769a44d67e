// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache for the viewer.
//!
//! Revisiting a slide reuses the decoded handle instead of decoding again, so
//! its load completes on the spot. Entries are evicted least recently used
//! first.

use crate::domain::gallery::{ItemId, Resolution};
use crate::domain::ui::geometry::Dimensions;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of decoded images kept.
pub const DEFAULT_CAPACITY: usize = 32;

/// Minimum number of decoded images kept.
pub const MIN_CAPACITY: usize = 2;

/// Maximum number of decoded images kept.
pub const MAX_CAPACITY: usize = 256;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    /// Decoded pixel size.
    pub dimensions: Dimensions,
}

impl LoadedImage {
    /// Wraps RGBA pixels into a display handle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: Handle::from_rgba(width, height, pixels),
            dimensions: Dimensions::new(width as f32, height as f32),
        }
    }
}

/// Cache key: one rendition of one item.
pub type CacheKey = (ItemId, Resolution);

/// LRU cache of decoded images.
pub struct ImageCache {
    entries: LruCache<CacheKey, LoadedImage>,
    hits: u64,
    misses: u64,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (clamped).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_CAPACITY, MAX_CAPACITY);
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached image and marks it most recently used.
    pub fn get(&mut self, id: &ItemId, resolution: Resolution) -> Option<LoadedImage> {
        let found = self.entries.get(&(id.clone(), resolution)).cloned();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Returns whether an image is cached without touching its recency.
    #[must_use]
    pub fn contains(&self, id: &ItemId, resolution: Resolution) -> bool {
        self.entries.contains(&(id.clone(), resolution))
    }

    /// Stores an image, evicting the least recently used entry if full.
    pub fn insert(&mut self, id: ItemId, resolution: Resolution, image: LoadedImage) {
        self.entries.put((id, resolution), image);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation.
    #[must_use]
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

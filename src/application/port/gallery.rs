// SPDX-License-Identifier: MPL-2.0
//! Gallery listing port.
//!
//! A [`GallerySource`] hands out gallery items page by page, in the order the
//! viewer should navigate them. Concrete sources are constructed by the caller
//! and injected; there is no process-wide source.

use crate::domain::gallery::GalleryItem;
use thiserror::Error;

/// Errors reported by a gallery source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The listing location does not exist.
    #[error("gallery not found: {0}")]
    NotFound(String),

    /// The listing could not be read.
    #[error("failed to read gallery: {0}")]
    Io(String),

    /// The listing was read but an entry was unusable.
    #[error("invalid gallery entry: {0}")]
    InvalidEntry(String),
}

/// Port for fetching gallery items.
///
/// Implementations must be `Send + Sync`: fetches run on the async executor.
pub trait GallerySource: Send + Sync {
    /// Returns up to `limit` items starting at `offset`.
    ///
    /// A page shorter than `limit` means the listing is exhausted.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the listing cannot be read.
    fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<GalleryItem>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_display() {
        let err = SourceError::NotFound("/photos".into());
        assert_eq!(err.to_string(), "gallery not found: /photos");

        let err = SourceError::Io("permission denied".into());
        assert!(err.to_string().contains("permission denied"));
    }
}

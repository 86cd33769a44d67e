// SPDX-License-Identifier: MPL-2.0
//! Accumulated gallery listing with pagination bookkeeping.
//!
//! The collection only grows by appending pages. Items already held never move,
//! so an index handed to the viewer stays valid while more pages arrive.

use crate::application::port::gallery::SourceError;
use crate::domain::gallery::GalleryItem;
use crate::domain::ui::newtypes::PageSize;
use std::collections::HashSet;

/// A page request: fetch `limit` items from `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

/// Items fetched so far plus the state of the next fetch.
#[derive(Debug, Clone, Default)]
pub struct GalleryCollection {
    items: Vec<GalleryItem>,
    page_size: PageSize,
    offset: usize,
    has_more: bool,
    is_fetching: bool,
    last_error: Option<SourceError>,
}

impl GalleryCollection {
    /// Creates an empty collection that will fetch `page_size` items at a time.
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            has_more: true,
            ..Self::default()
        }
    }

    /// Marks a fetch as in flight and returns what to request, or `None` if a
    /// fetch is already running or the listing is exhausted.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.is_fetching || !self.has_more {
            return None;
        }
        self.is_fetching = true;
        Some(PageRequest {
            limit: self.page_size.value(),
            offset: self.offset,
        })
    }

    /// Applies the outcome of the in-flight fetch. Returns the number of items
    /// appended.
    pub fn apply_page(&mut self, result: Result<Vec<GalleryItem>, SourceError>) -> usize {
        self.is_fetching = false;
        match result {
            Ok(page) => {
                self.last_error = None;
                if page.len() < self.page_size.value() {
                    self.has_more = false;
                }
                self.offset += page.len();

                let known: HashSet<_> = self.items.iter().map(|item| item.id.clone()).collect();
                let before = self.items.len();
                self.items
                    .extend(page.into_iter().filter(|item| !known.contains(&item.id)));
                self.items.len() - before
            }
            Err(error) => {
                self.last_error = Some(error);
                0
            }
        }
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another page may exist.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// Error of the most recent fetch, cleared by the next successful one.
    #[must_use]
    pub fn last_error(&self) -> Option<&SourceError> {
        self.last_error.as_ref()
    }

    /// Whether the listing is known to be complete.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        !self.has_more && !self.is_fetching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{AspectRatio, ImageSource, ItemId};

    fn item(name: &str) -> GalleryItem {
        GalleryItem {
            id: ItemId::new(name),
            low_res: ImageSource::capped(format!("/{name}.jpg"), 1200),
            high_res: ImageSource::original(format!("/{name}.jpg")),
            alt_text: name.to_string(),
            aspect_ratio: AspectRatio::SQUARE,
            caption: None,
        }
    }

    fn page(names: &[&str]) -> Vec<GalleryItem> {
        names.iter().map(|name| item(name)).collect()
    }

    #[test]
    fn first_fetch_starts_at_zero() {
        let mut collection = GalleryCollection::new(PageSize::new(2));
        assert_eq!(
            collection.begin_fetch(),
            Some(PageRequest {
                limit: 2,
                offset: 0
            })
        );
        assert!(collection.is_fetching());
        assert_eq!(collection.begin_fetch(), None);
    }

    #[test]
    fn full_pages_append_in_order() {
        let mut collection = GalleryCollection::new(PageSize::new(2));
        collection.begin_fetch();
        assert_eq!(collection.apply_page(Ok(page(&["a", "b"]))), 2);
        assert!(collection.has_more());

        let request = collection.begin_fetch().unwrap();
        assert_eq!(request.offset, 2);
        collection.apply_page(Ok(page(&["c", "d"])));

        let ids: Vec<_> = collection.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn short_page_ends_pagination() {
        let mut collection = GalleryCollection::new(PageSize::new(10));
        collection.begin_fetch();
        collection.apply_page(Ok(page(&["a", "b", "c"])));
        assert!(!collection.has_more());
        assert!(collection.is_exhausted());
        assert_eq!(collection.begin_fetch(), None);
    }

    #[test]
    fn empty_first_page_leaves_empty_collection() {
        let mut collection = GalleryCollection::new(PageSize::default());
        collection.begin_fetch();
        collection.apply_page(Ok(Vec::new()));
        assert!(collection.is_empty());
        assert!(collection.is_exhausted());
    }

    #[test]
    fn error_is_recorded_and_retry_is_allowed() {
        let mut collection = GalleryCollection::new(PageSize::new(2));
        collection.begin_fetch();
        collection.apply_page(Err(SourceError::Io("offline".into())));
        assert!(collection.last_error().is_some());
        assert!(collection.has_more());

        let request = collection.begin_fetch().unwrap();
        assert_eq!(request.offset, 0);
        collection.apply_page(Ok(page(&["a", "b"])));
        assert!(collection.last_error().is_none());
    }

    #[test]
    fn duplicate_ids_are_not_appended_twice() {
        let mut collection = GalleryCollection::new(PageSize::new(2));
        collection.begin_fetch();
        collection.apply_page(Ok(page(&["a", "b"])));
        collection.begin_fetch();
        assert_eq!(collection.apply_page(Ok(page(&["b", "c"]))), 1);
        assert_eq!(collection.len(), 3);
    }
}

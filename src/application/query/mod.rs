// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! - [`gallery`]: Paged gallery accumulation (`GalleryCollection`)

pub mod gallery;

// Re-export main types
pub use gallery::{GalleryCollection, PageRequest};

// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the UI only holds them as
//! `Arc<dyn ...>` handed in at construction.
//!
//! # Available Ports
//!
//! - [`gallery`]: Paged gallery listing
//! - [`image`]: Image decoding
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Traits are `Send + Sync` so calls can move onto the async executor
//! - No `async fn` - callers wrap calls in Iced `Task`s

pub mod gallery;
pub mod image;

// Re-export main types for convenience
pub use gallery::{GallerySource, SourceError};
pub use image::{DecodedImage, ImageLoader, LoadError};

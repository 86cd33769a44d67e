// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in `application::port`.
//!
//! # Available Adapters
//!
//! - [`directory`]: Gallery listing from a local directory (implements [`GallerySource`])
//! - [`loader`]: Image decoding via the `image` crate (implements [`ImageLoader`])
//!
//! [`GallerySource`]: crate::application::port::GallerySource
//! [`ImageLoader`]: crate::application::port::ImageLoader

pub mod directory;
pub mod loader;

// Re-export main types for convenience
pub use directory::DirectorySource;
pub use loader::FsImageLoader;

// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value objects with ZERO external dependencies.
//!
//! Nothing in here knows about Iced, the filesystem or time sources, so every
//! rule can be tested without a rendering environment.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery items ([`GalleryItem`](gallery::GalleryItem),
//!   [`AspectRatio`](gallery::AspectRatio), [`LayoutWeight`](gallery::LayoutWeight))
//! - [`ui`]: Viewer value objects ([`ZoomFactor`](ui::newtypes::ZoomFactor),
//!   [`DragBounds`](ui::geometry::DragBounds), [`PanOffset`](ui::geometry::PanOffset))

pub mod gallery;
pub mod ui;

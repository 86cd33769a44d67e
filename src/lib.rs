// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo gallery built with the Iced GUI framework.
//!
//! Thumbnails of a local directory are shown in an aspect-aware grid that
//! loads page by page. Selecting one opens a full-screen viewer with slide
//! transitions, swipe navigation, and a click-to-zoom mode with drag panning.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

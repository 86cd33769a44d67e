// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::gallery::SourceError;
use crate::domain::gallery::GalleryItem;
use crate::ui::viewer::component;
use iced::widget::scrollable;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// A thumbnail was clicked.
    OpenViewer(usize),
    LoadMore,
    PageLoaded(Result<Vec<GalleryItem>, SourceError>),
    WindowResized(Size),
    /// The thumbnail grid scrolled; remembered so closing the viewer can
    /// restore it.
    GridScrolled(scrollable::RelativeOffset),
}

/// Runtime flags passed from `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Directory whose images make up the gallery.
    pub directory: Option<PathBuf>,
    /// Opens the viewer at this index once it has been fetched.
    pub open_index: Option<usize>,
    /// Overrides the configuration directory.
    pub config_dir: Option<String>,
}

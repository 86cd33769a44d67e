// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery grid and the
//! viewer.
//!
//! The `App` owns the accumulated gallery, fetches pages from the injected
//! [`GallerySource`], keeps the viewer's item list and viewport in sync, and
//! restores the grid's scroll position when the viewer closes.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use view::GRID_ID;

use crate::application::port::gallery::{GallerySource, SourceError};
use crate::application::port::image::ImageLoader;
use crate::application::query::{GalleryCollection, PageRequest};
use crate::domain::gallery::GalleryItem;
use crate::domain::ui::newtypes::PageSize;
use crate::infrastructure::{DirectorySource, FsImageLoader};
use crate::ui::viewer::component;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Scrolling past this fraction of the grid fetches the next page.
const LOAD_MORE_SCROLL_FRACTION: f32 = 0.9;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Root Iced application state.
pub struct App {
    gallery: GalleryCollection,
    source: Arc<dyn GallerySource>,
    viewer: component::State,
    window_size: Size,
    /// Index requested with `--open`, waiting for its page to arrive.
    pending_open: Option<usize>,
    grid_offset: RelativeOffset,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.gallery.len())
            .field("viewer_open", &self.viewer.is_open())
            .field("window_size", &self.window_size)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application around explicit collaborators.
    pub fn with_source(
        source: Arc<dyn GallerySource>,
        loader: Arc<dyn ImageLoader>,
        viewer_config: component::ViewerConfig,
        page_size: PageSize,
    ) -> Self {
        Self {
            gallery: GalleryCollection::new(page_size),
            source,
            viewer: component::State::new(viewer_config, loader),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            pending_open: None,
            grid_offset: RelativeOffset::START,
        }
    }

    /// Loads the configuration, wires the directory source and starts fetching
    /// the first page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        // A broken settings file is already logged by the loader.
        let (config, _warning) = config::load();

        let root = flags
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        tracing::info!(directory = %root.display(), "opening gallery");

        let source = DirectorySource::new(root)
            .with_preview_max_edge(config.preview_max_edge())
            .with_full_max_edge(config.full_max_edge());

        let mut app = Self::with_source(
            Arc::new(source),
            Arc::new(FsImageLoader::new()),
            config.viewer_settings(),
            config.page_size(),
        );
        app.pending_open = flags.open_index;

        let (_, viewport_task) = app.viewer.handle_message(component::Message::ViewportResized(
            app.window_size,
        ));
        let fetch = app.load_more();
        (
            app,
            Task::batch([viewport_task.map(Message::Viewer), fetch]),
        )
    }

    fn title(&self) -> String {
        let name = "Iced Gallery";
        if !self.viewer.is_open() {
            return name.to_string();
        }
        let index = self.viewer.snapshot().current_index;
        format!("{name} - {} / {}", index + 1, self.gallery.len())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(&self.viewer)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => self.handle_viewer_message(viewer_message),
            Message::OpenViewer(index) => {
                self.handle_viewer_message(component::Message::Open { index })
            }
            Message::LoadMore => self.load_more(),
            Message::PageLoaded(result) => self.page_loaded(result),
            Message::WindowResized(size) => {
                self.window_size = size;
                self.handle_viewer_message(component::Message::ViewportResized(size))
            }
            Message::GridScrolled(offset) => {
                self.grid_offset = offset;
                if offset.y >= LOAD_MORE_SCROLL_FRACTION {
                    self.load_more()
                } else {
                    Task::none()
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            viewer: &self.viewer,
        })
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryCollection {
        &self.gallery
    }

    #[must_use]
    pub fn viewer(&self) -> &component::State {
        &self.viewer
    }

    fn handle_viewer_message(&mut self, message: component::Message) -> Task<Message> {
        let (effect, task) = self.viewer.handle_message(message);
        let task = task.map(Message::Viewer);

        match effect {
            component::Effect::None => task,
            component::Effect::Close => {
                let restore = operation::snap_to(Id::new(GRID_ID), self.grid_offset);
                Task::batch([task, restore])
            }
        }
    }

    fn load_more(&mut self) -> Task<Message> {
        let Some(request) = self.gallery.begin_fetch() else {
            return Task::none();
        };
        fetch_page(Arc::clone(&self.source), request)
    }

    fn page_loaded(&mut self, result: Result<Vec<GalleryItem>, SourceError>) -> Task<Message> {
        if let Err(error) = &result {
            tracing::error!(%error, "failed to fetch gallery page");
        }
        let added = self.gallery.apply_page(result);
        tracing::info!(
            added,
            total = self.gallery.len(),
            has_more = self.gallery.has_more(),
            "gallery page loaded"
        );

        let mut tasks = Vec::new();
        if added > 0 {
            tasks.push(self.handle_viewer_message(component::Message::ItemsChanged(
                self.gallery.items().to_vec(),
            )));
        }

        if let Some(index) = self.pending_open {
            if index < self.gallery.len() || !self.gallery.has_more() {
                self.pending_open = None;
                if !self.gallery.is_empty() {
                    tasks.push(self.handle_viewer_message(component::Message::Open { index }));
                }
            } else if self.gallery.last_error().is_none() {
                // Keep paging until the requested index exists.
                tasks.push(self.load_more());
            }
        }

        Task::batch(tasks)
    }
}

fn fetch_page(source: Arc<dyn GallerySource>, request: PageRequest) -> Task<Message> {
    let PageRequest { limit, offset } = request;
    Task::perform(
        async move { source.fetch_page(limit, offset) },
        Message::PageLoaded,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::image::{DecodedImage, LoadError};
    use crate::domain::gallery::{AspectRatio, ImageSource, ItemId};

    struct NullLoader;

    impl ImageLoader for NullLoader {
        fn load(&self, _source: &ImageSource) -> Result<DecodedImage, LoadError> {
            Err(LoadError::UnsupportedFormat)
        }
    }

    struct EmptySource;

    impl GallerySource for EmptySource {
        fn fetch_page(&self, _limit: usize, _offset: usize) -> Result<Vec<GalleryItem>, SourceError> {
            Ok(Vec::new())
        }
    }

    fn item(i: usize) -> GalleryItem {
        let path = format!("/photos/{i}.jpg");
        GalleryItem {
            id: ItemId::new(format!("{i}.jpg")),
            low_res: ImageSource::capped(&path, 1200),
            high_res: ImageSource::original(&path),
            alt_text: format!("photo {i}"),
            aspect_ratio: AspectRatio::SQUARE,
            caption: None,
        }
    }

    fn app(page_size: usize) -> App {
        App::with_source(
            Arc::new(EmptySource),
            Arc::new(NullLoader),
            component::ViewerConfig::default(),
            PageSize::new(page_size),
        )
    }

    #[test]
    fn pages_are_forwarded_to_the_viewer() {
        let mut app = app(2);
        let _ = app.update(Message::LoadMore);
        let _ = app.update(Message::PageLoaded(Ok(vec![item(0), item(1)])));

        assert_eq!(app.gallery().len(), 2);
        assert_eq!(app.viewer().item_count(), 2);
        assert!(app.gallery().has_more());
    }

    #[test]
    fn thumbnail_click_opens_viewer_at_index() {
        let mut app = app(3);
        let _ = app.update(Message::LoadMore);
        let _ = app.update(Message::PageLoaded(Ok(vec![item(0), item(1), item(2)])));
        let _ = app.update(Message::OpenViewer(2));

        assert!(app.viewer().is_open());
        assert_eq!(app.viewer().snapshot().current_index, 2);
    }

    #[test]
    fn viewer_close_returns_to_grid() {
        let mut app = app(2);
        let _ = app.update(Message::LoadMore);
        let _ = app.update(Message::PageLoaded(Ok(vec![item(0)])));
        let _ = app.update(Message::OpenViewer(0));
        let _ = app.update(Message::Viewer(component::Message::Close));

        assert!(!app.viewer().is_open());
    }

    #[test]
    fn pending_open_waits_for_its_page() {
        let mut app = app(2);
        app.pending_open = Some(3);
        let _ = app.update(Message::LoadMore);
        let _ = app.update(Message::PageLoaded(Ok(vec![item(0), item(1)])));
        assert!(!app.viewer().is_open());
        assert!(app.gallery().is_fetching());

        let _ = app.update(Message::PageLoaded(Ok(vec![item(2), item(3)])));
        assert!(app.viewer().is_open());
        assert_eq!(app.viewer().snapshot().current_index, 3);
        assert!(app.pending_open.is_none());
    }

    #[test]
    fn pending_open_past_the_end_clamps_to_last_item() {
        let mut app = app(5);
        app.pending_open = Some(10);
        let _ = app.update(Message::LoadMore);
        let _ = app.update(Message::PageLoaded(Ok(vec![item(0), item(1)])));

        assert!(app.viewer().is_open());
        assert_eq!(app.viewer().snapshot().current_index, 1);
    }

    #[test]
    fn scrolling_near_the_bottom_fetches_next_page() {
        let mut app = app(2);
        let _ = app.update(Message::LoadMore);
        let _ = app.update(Message::PageLoaded(Ok(vec![item(0), item(1)])));
        assert!(!app.gallery().is_fetching());

        let _ = app.update(Message::GridScrolled(RelativeOffset { x: 0.0, y: 0.5 }));
        assert!(!app.gallery().is_fetching());

        let _ = app.update(Message::GridScrolled(RelativeOffset { x: 0.0, y: 0.95 }));
        assert!(app.gallery().is_fetching());
    }

    #[test]
    fn fetch_error_is_kept_until_next_success() {
        let mut app = app(2);
        let _ = app.update(Message::LoadMore);
        let _ = app.update(Message::PageLoaded(Err(SourceError::Io("offline".into()))));
        assert!(app.gallery().last_error().is_some());
        assert!(app.gallery().has_more());

        let _ = app.update(Message::LoadMore);
        let _ = app.update(Message::PageLoaded(Ok(vec![item(0)])));
        assert!(app.gallery().last_error().is_none());
        assert!(!app.gallery().has_more());
    }

    #[test]
    fn title_shows_position_while_viewing() {
        let mut app = app(3);
        assert_eq!(app.title(), "Iced Gallery");

        let _ = app.update(Message::LoadMore);
        let _ = app.update(Message::PageLoaded(Ok(vec![item(0), item(1), item(2)])));
        let _ = app.update(Message::OpenViewer(1));
        assert_eq!(app.title(), "Iced Gallery - 2 / 3");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the sub-components in [`super::subcomponents`] and is
//! the only place where they meet: navigation is gated while zoomed, loads are
//! keyed by slide, timers are token-checked, and every change to what is on
//! screen is mirrored to the stage scrollables with `snap_to`.

use crate::application::port::image::{ImageLoader, LoadError};
use crate::domain::gallery::{GalleryItem, ImageSource, ItemId, Resolution};
use crate::domain::ui::geometry::{self, Dimensions, DragBounds, PanOffset, Rect};
use crate::domain::ui::newtypes::{
    HintDuration, SettleDelay, SwipeThreshold, TransitionDuration, ViewportFill, ZoomFactor,
};
use crate::ui::viewer::cache::{self, ImageCache, LoadedImage};
use crate::ui::viewer::overlay::{OverlayInput, OverlayModel};
use crate::ui::viewer::pane;
use crate::ui::viewer::slide::{self, Stage, Transform, Transition};
use crate::ui::viewer::subcomponents::loading::SlideKey;
use crate::ui::viewer::subcomponents::navigation::Direction;
use crate::ui::viewer::subcomponents::timer::{Timer, TimerToken};
use crate::ui::viewer::subcomponents::{drag, hint, loading, navigation, zoom};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{event, keyboard, mouse, touch, window, Element, Point, Size, Subscription, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Identifier of the scrollable holding the current slide.
pub const CURRENT_STAGE_ID: &str = "viewer-stage-current";
/// Identifier of the scrollable holding the slide being transitioned away from.
pub const OUTGOING_STAGE_ID: &str = "viewer-stage-outgoing";

const TICK_INTERVAL: Duration = Duration::from_millis(16);
const ZOOM_KEY: &str = "z";

/// Tunables of the viewer, resolved from the `[viewer]` config section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub zoom_factor: ZoomFactor,
    pub swipe_threshold: SwipeThreshold,
    pub hint_duration: HintDuration,
    pub settle_delay: SettleDelay,
    pub transition: TransitionDuration,
    pub viewport_fill: ViewportFill,
    pub cache_capacity: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_factor: ZoomFactor::default(),
            swipe_threshold: SwipeThreshold::default(),
            hint_duration: HintDuration::default(),
            settle_delay: SettleDelay::default(),
            transition: TransitionDuration::default(),
            viewport_fill: ViewportFill::default(),
            cache_capacity: cache::DEFAULT_CAPACITY,
        }
    }
}

/// Top-level state of the viewer machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerMode {
    Closed,
    Browsing,
    Zoomed,
}

/// Read-only snapshot of the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    pub current_index: usize,
    pub direction: Direction,
    pub is_open: bool,
    pub is_zoomed: bool,
    pub is_loading: bool,
    pub is_dragging: bool,
    pub show_hint: bool,
    pub pan_offset: PanOffset,
    pub drag_bounds: DragBounds,
}

/// Messages handled by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open at `index`, or jump there if already open.
    Open {
        index: usize,
    },
    Close,
    /// The gallery listing changed (usually grew by a page).
    ItemsChanged(Vec<GalleryItem>),
    ViewportResized(Size),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    NavigateNext,
    NavigatePrevious,
    ToggleZoom,
    ImageLoaded {
        key: SlideKey,
        id: ItemId,
        resolution: Resolution,
        result: Result<LoadedImage, LoadError>,
    },
    Prefetched {
        id: ItemId,
        result: Result<LoadedImage, LoadError>,
    },
    HintExpired(TimerToken),
    SettleElapsed(TimerToken),
    Tick(Instant),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The viewer closed itself; the host should hide it.
    Close,
}

/// Decoded renditions of one on-screen slide.
#[derive(Debug, Clone)]
struct SlideImages {
    index: usize,
    preview: Option<LoadedImage>,
    full: Option<LoadedImage>,
    failed: bool,
}

impl SlideImages {
    fn new(index: usize) -> Self {
        Self {
            index,
            preview: None,
            full: None,
            failed: false,
        }
    }

    /// The rendition to draw, falling back to whichever one is available.
    fn image(&self, resolution: Resolution) -> Option<&LoadedImage> {
        match resolution {
            Resolution::Preview => self.preview.as_ref().or(self.full.as_ref()),
            Resolution::Full => self.full.as_ref().or(self.preview.as_ref()),
        }
    }

    fn natural_size(&self) -> Option<Dimensions> {
        self.image(Resolution::Preview).map(|image| image.dimensions)
    }
}

/// Where a slide is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SlideLayout {
    display: Dimensions,
    stage: Stage,
    shift: PanOffset,
    opacity: f32,
}

/// Complete viewer component state.
pub struct State {
    config: ViewerConfig,
    loader: Arc<dyn ImageLoader>,
    items: Vec<GalleryItem>,
    is_open: bool,
    viewport: Dimensions,
    navigation: navigation::State,
    zoom: zoom::State,
    drag: drag::State,
    loading: loading::State,
    hint: hint::State,
    settle: Timer,
    transition: Option<Transition>,
    current: Option<SlideImages>,
    outgoing: Option<SlideImages>,
    cache: ImageCache,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("config", &self.config)
            .field("items", &self.items.len())
            .field("is_open", &self.is_open)
            .field("viewport", &self.viewport)
            .field("navigation", &self.navigation)
            .field("zoom", &self.zoom)
            .field("loading", &self.loading)
            .field("transition", &self.transition)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(config: ViewerConfig, loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            config,
            loader,
            items: Vec::new(),
            is_open: false,
            viewport: Dimensions::default(),
            navigation: navigation::State::default(),
            zoom: zoom::State::default(),
            drag: drag::State::new(config.swipe_threshold),
            loading: loading::State::default(),
            hint: hint::State::default(),
            settle: Timer::default(),
            transition: None,
            current: None,
            outgoing: None,
            cache: ImageCache::new(config.cache_capacity),
        }
    }

    /// Keyboard, pointer and resize listeners plus the animation clock.
    /// Nothing is subscribed while the viewer is closed.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.is_open {
            return Subscription::none();
        }

        let events = event::listen_with(|event, status, window| match status {
            // Overlay buttons capture their own clicks.
            event::Status::Ignored => Some(Message::RawEvent { window, event }),
            event::Status::Captured => None,
        });

        let ticks = if self.transition.is_some() || self.loading.is_loading() {
            iced::time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([events, ticks])
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Open { index } => (Effect::None, self.open(index)),
            Message::Close => {
                if !self.is_open {
                    return (Effect::None, Task::none());
                }
                self.close();
                (Effect::Close, Task::none())
            }
            Message::ItemsChanged(items) => (Effect::None, self.set_items(items)),
            Message::ViewportResized(size) => (Effect::None, self.resize(size)),
            Message::RawEvent { event, .. } => {
                if !self.is_open {
                    return (Effect::None, Task::none());
                }
                self.handle_raw_event(event)
            }
            Message::NavigateNext => (Effect::None, self.navigate(navigation::Message::Next)),
            Message::NavigatePrevious => {
                (Effect::None, self.navigate(navigation::Message::Previous))
            }
            Message::ToggleZoom => (Effect::None, self.toggle_zoom()),
            Message::ImageLoaded {
                key,
                id,
                resolution,
                result,
            } => (Effect::None, self.image_loaded(key, id, resolution, result)),
            Message::Prefetched { id, result } => {
                match result {
                    Ok(image) => self.cache.insert(id, Resolution::Preview, image),
                    Err(error) => tracing::debug!(item = %id, %error, "prefetch failed"),
                }
                (Effect::None, Task::none())
            }
            Message::HintExpired(token) => {
                self.hint.handle(hint::Message::Expired(token));
                (Effect::None, Task::none())
            }
            Message::SettleElapsed(token) => (Effect::None, self.settle_elapsed(token)),
            Message::Tick(now) => (Effect::None, self.tick(now)),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let resolution = slide::select_resolution(self.zoom.is_zoomed());

        let current = self
            .current
            .as_ref()
            .zip(self.current_layout())
            .map(|(images, layout)| self.slide_view(images, layout, resolution, CURRENT_STAGE_ID));
        let outgoing = self.outgoing.as_ref().zip(self.outgoing_layout()).map(
            |(images, layout)| {
                self.slide_view(images, layout, Resolution::Preview, OUTGOING_STAGE_ID)
            },
        );

        pane::view(pane::ViewModel {
            current,
            outgoing,
            overlay: self.overlay(),
            spinner_rotation: self.loading.spinner_rotation(),
            is_zoomed: self.zoom.is_zoomed(),
            is_dragging: self.zoom.is_dragging(),
            cursor_over_image: self
                .drag
                .cursor()
                .is_some_and(|position| self.press_target(position) == drag::PressTarget::Image),
        })
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn snapshot(&self) -> ViewerState {
        ViewerState {
            current_index: self.navigation.index(),
            direction: self.navigation.direction(),
            is_open: self.is_open,
            is_zoomed: self.zoom.is_zoomed(),
            is_loading: self.loading.is_loading(),
            is_dragging: self.zoom.is_dragging(),
            show_hint: self.hint.is_visible(),
            pan_offset: self.zoom.pan(),
            drag_bounds: self.zoom.bounds(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> ViewerMode {
        match (self.is_open, self.zoom.is_zoomed()) {
            (false, _) => ViewerMode::Closed,
            (true, false) => ViewerMode::Browsing,
            (true, true) => ViewerMode::Zoomed,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Key of the slide whose load is awaited, if any.
    #[must_use]
    pub fn current_slide_key(&self) -> Option<SlideKey> {
        self.loading.current()
    }

    /// Token of the pending hint dismissal.
    #[must_use]
    pub fn pending_hint_dismiss(&self) -> Option<TimerToken> {
        self.hint.pending_dismiss()
    }

    /// Token of the pending bounds measurement.
    #[must_use]
    pub fn pending_settle(&self) -> Option<TimerToken> {
        self.settle.pending()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether the current slide's image failed to load.
    #[must_use]
    pub fn current_failed(&self) -> bool {
        self.current.as_ref().is_some_and(|slide| slide.failed)
    }

    /// Whether the full rendition of the current slide is available.
    #[must_use]
    pub fn has_full_resolution(&self) -> bool {
        self.current.as_ref().is_some_and(|slide| slide.full.is_some())
    }

    /// (hits, misses) of the decoded image cache.
    #[must_use]
    pub fn cache_stats(&self) -> (u64, u64) {
        self.cache.stats()
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayModel {
        OverlayModel::from_input(OverlayInput {
            is_loading: self.loading.is_loading(),
            show_hint: self.hint.is_visible(),
            is_zoomed: self.zoom.is_zoomed(),
            caption: self.current_item().and_then(GalleryItem::visible_caption),
            index: self.navigation.index(),
            item_count: self.items.len(),
        })
    }

    fn current_item(&self) -> Option<&GalleryItem> {
        self.current
            .as_ref()
            .and_then(|slide| self.items.get(slide.index))
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    fn open(&mut self, index: usize) -> Task<Message> {
        let zoom_task = self.zoom_out();

        if !self.is_open {
            self.is_open = true;
            self.navigation = navigation::State::new(self.items.len(), index);
            return Task::batch([zoom_task, self.show_slide(None)]);
        }

        let previous = self.navigation.index();
        let slide_task = match self.navigation.handle(navigation::Message::JumpTo(index)) {
            navigation::Effect::IndexChanged { .. } => self.show_slide(Some(previous)),
            navigation::Effect::None => Task::none(),
        };
        Task::batch([zoom_task, slide_task])
    }

    fn close(&mut self) {
        self.is_open = false;
        self.zoom.handle(zoom::Message::Reset);
        self.hint.handle(hint::Message::Cancel);
        self.drag.handle(drag::Message::Cancel);
        self.settle.cancel();
        self.loading.handle(loading::Message::Invalidate);
        self.navigation.handle(navigation::Message::Settle);
        self.transition = None;
        self.current = None;
        self.outgoing = None;
        tracing::debug!("viewer closed");
    }

    fn set_items(&mut self, items: Vec<GalleryItem>) -> Task<Message> {
        self.items = items;
        if !self.is_open {
            return Task::none();
        }

        if self.items.is_empty() {
            let zoom_task = self.zoom_out();
            self.navigation = navigation::State::default();
            self.loading.handle(loading::Message::Invalidate);
            self.transition = None;
            self.current = None;
            self.outgoing = None;
            return zoom_task;
        }

        let previous = self.navigation.index();
        match self
            .navigation
            .handle(navigation::Message::SetLen(self.items.len()))
        {
            navigation::Effect::IndexChanged { .. } => {
                let zoom_task = self.zoom_out();
                Task::batch([zoom_task, self.show_slide(Some(previous))])
            }
            // Opened before the first page arrived.
            navigation::Effect::None if self.current.is_none() => self.show_slide(None),
            navigation::Effect::None => Task::none(),
        }
    }

    fn resize(&mut self, size: Size) -> Task<Message> {
        let viewport = Dimensions::new(size.width, size.height);
        if viewport == self.viewport {
            return Task::none();
        }
        self.viewport = viewport;
        if !self.is_open {
            return Task::none();
        }

        let settle = if self.zoom.is_zoomed() {
            self.schedule_settle()
        } else {
            Task::none()
        };
        Task::batch([settle, self.snap_stages()])
    }

    // -------------------------------------------------------------------------
    // Slides and loading
    // -------------------------------------------------------------------------

    /// Mounts the slide at the current navigation index and starts loading it.
    /// `previous` is the index being left, if a slide was on screen.
    fn show_slide(&mut self, previous: Option<usize>) -> Task<Message> {
        self.drag.handle(drag::Message::Cancel);
        self.settle.cancel();

        let index = self.navigation.index();
        let Some(item) = self.items.get(index).cloned() else {
            self.loading.handle(loading::Message::Invalidate);
            self.current = None;
            return Task::none();
        };

        let leaving = previous.and(self.current.take());
        if self.config.transition.is_instant() {
            self.transition = None;
            self.outgoing = None;
            self.navigation.handle(navigation::Message::Settle);
        } else {
            self.transition = Some(Transition::new(
                leaving.as_ref().map(|slide| slide.index),
                self.navigation.direction(),
            ));
            self.outgoing = leaving;
        }

        let loading::Effect::Started(key) =
            self.loading.handle(loading::Message::Begin { index })
        else {
            return Task::none();
        };
        tracing::debug!(index, item = %item.id, "showing slide");

        self.current = Some(SlideImages::new(index));
        let load = self.request(key, &item, Resolution::Preview);
        let prefetch = self.prefetch_neighbors(index);
        Task::batch([load, prefetch, self.snap_stages()])
    }

    /// Loads one rendition of the current slide, from the cache when possible.
    fn request(&mut self, key: SlideKey, item: &GalleryItem, resolution: Resolution) -> Task<Message> {
        if let Some(image) = self.cache.get(&item.id, resolution) {
            return self.image_loaded(key, item.id.clone(), resolution, Ok(image));
        }

        let loader = Arc::clone(&self.loader);
        let source = item.source(resolution).clone();
        let id = item.id.clone();
        Task::perform(
            async move {
                let result = decode(loader.as_ref(), &source);
                (id, result)
            },
            move |(id, result)| Message::ImageLoaded {
                key,
                id,
                resolution,
                result,
            },
        )
    }

    fn prefetch_neighbors(&self, index: usize) -> Task<Message> {
        let len = self.items.len();
        if len < 2 {
            return Task::none();
        }

        let mut neighbors = vec![(index + 1) % len, (index + len - 1) % len];
        neighbors.dedup();

        let tasks: Vec<_> = neighbors
            .into_iter()
            .filter_map(|i| self.items.get(i))
            .filter(|item| !self.cache.contains(&item.id, Resolution::Preview))
            .map(|item| {
                let loader = Arc::clone(&self.loader);
                let source = item.source(Resolution::Preview).clone();
                let id = item.id.clone();
                Task::perform(
                    async move {
                        let result = decode(loader.as_ref(), &source);
                        (id, result)
                    },
                    |(id, result)| Message::Prefetched { id, result },
                )
            })
            .collect();
        Task::batch(tasks)
    }

    fn image_loaded(
        &mut self,
        key: SlideKey,
        id: ItemId,
        resolution: Resolution,
        result: Result<LoadedImage, LoadError>,
    ) -> Task<Message> {
        if let Ok(image) = &result {
            self.cache.insert(id.clone(), resolution, image.clone());
        }

        if !self.loading.is_current(key) {
            tracing::debug!(index = key.index(), item = %id, "discarding stale image load");
            return Task::none();
        }
        let Some(slide) = self.current.as_mut() else {
            return Task::none();
        };

        match resolution {
            Resolution::Preview => {
                self.loading.handle(loading::Message::Completed { key });
                match result {
                    Ok(image) => {
                        slide.preview = Some(image);
                        slide.failed = false;
                    }
                    Err(error) => {
                        tracing::warn!(item = %id, %error, "failed to load image");
                        slide.failed = true;
                    }
                }
            }
            Resolution::Full => match result {
                Ok(image) => slide.full = Some(image),
                Err(error) => {
                    tracing::warn!(item = %id, %error, "failed to load full resolution, keeping preview");
                }
            },
        }

        Task::batch([self.schedule_settle(), self.snap_stages()])
    }

    fn request_full(&mut self) -> Task<Message> {
        if self.has_full_resolution() {
            return Task::none();
        }
        let (Some(key), Some(item)) = (self.loading.current(), self.current_item().cloned()) else {
            return Task::none();
        };
        self.request(key, &item, Resolution::Full)
    }

    // -------------------------------------------------------------------------
    // Navigation and zoom
    // -------------------------------------------------------------------------

    fn navigate(&mut self, message: navigation::Message) -> Task<Message> {
        if !self.is_open || self.zoom.is_zoomed() {
            return Task::none();
        }
        let previous = self.navigation.index();
        match self.navigation.handle(message) {
            navigation::Effect::IndexChanged { .. } => self.show_slide(Some(previous)),
            navigation::Effect::None => Task::none(),
        }
    }

    fn toggle_zoom(&mut self) -> Task<Message> {
        if self.zoom.is_zoomed() {
            self.zoom_out()
        } else {
            self.zoom_in()
        }
    }

    fn zoom_in(&mut self) -> Task<Message> {
        if !self.is_open || self.current.is_none() {
            return Task::none();
        }
        if self.zoom.handle(zoom::Message::ZoomIn) != zoom::Effect::ZoomedIn {
            return Task::none();
        }

        let hint = match self.hint.handle(hint::Message::ZoomedIn) {
            hint::Effect::ScheduleDismiss(token) => delayed(
                self.config.hint_duration.as_duration(),
                Message::HintExpired(token),
            ),
            hint::Effect::None => Task::none(),
        };
        let full = self.request_full();
        Task::batch([hint, full, self.schedule_settle(), self.snap_stages()])
    }

    fn zoom_out(&mut self) -> Task<Message> {
        if self.zoom.handle(zoom::Message::ZoomOut) != zoom::Effect::ZoomedOut {
            return Task::none();
        }
        self.hint.handle(hint::Message::ZoomedOut);
        self.drag.handle(drag::Message::Cancel);
        self.settle.cancel();
        self.snap_stages()
    }

    fn schedule_settle(&mut self) -> Task<Message> {
        let token = self.settle.arm();
        delayed(
            self.config.settle_delay.as_duration(),
            Message::SettleElapsed(token),
        )
    }

    fn settle_elapsed(&mut self, token: TimerToken) -> Task<Message> {
        if !self.settle.fire(token) {
            return Task::none();
        }
        let effect = self.zoom.handle(zoom::Message::RecomputeBounds {
            rendered: self.current_rendered_size(),
            viewport: self.viewport,
            factor: self.config.zoom_factor,
        });
        match effect {
            zoom::Effect::PanChanged(_) => self.snap_stages(),
            _ => Task::none(),
        }
    }

    fn tick(&mut self, now: Instant) -> Task<Message> {
        self.loading.handle(loading::Message::SpinnerTick);

        let Some(transition) = self.transition.as_mut() else {
            return Task::none();
        };
        if transition.advance(now, self.config.transition) {
            self.transition = None;
            self.outgoing = None;
            self.navigation.handle(navigation::Message::Settle);
        }
        self.snap_stages()
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    fn handle_raw_event(&mut self, event: event::Event) -> (Effect, Task<Message>) {
        match event {
            event::Event::Window(window::Event::Resized(size)) => (Effect::None, self.resize(size)),
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    (Effect::None, self.pointer_moved(position))
                }
                mouse::Event::CursorLeft => {
                    self.drag.handle(drag::Message::CursorLeft);
                    (Effect::None, self.pointer_cancelled())
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    self.pointer_pressed();
                    (Effect::None, Task::none())
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => self.pointer_released(),
                _ => (Effect::None, Task::none()),
            },
            event::Event::Touch(touch_event) => match touch_event {
                touch::Event::FingerPressed { position, .. } => {
                    self.drag.handle(drag::Message::CursorMoved(position));
                    self.pointer_pressed();
                    (Effect::None, Task::none())
                }
                touch::Event::FingerMoved { position, .. } => {
                    (Effect::None, self.pointer_moved(position))
                }
                touch::Event::FingerLifted { .. } => self.pointer_released(),
                touch::Event::FingerLost { .. } => (Effect::None, self.pointer_cancelled()),
            },
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => self.handle_key(&key),
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_key(&mut self, key: &keyboard::Key) -> (Effect, Task<Message>) {
        match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                if self.zoom.is_zoomed() {
                    (Effect::None, self.zoom_out())
                } else {
                    self.close();
                    (Effect::Close, Task::none())
                }
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                (Effect::None, self.navigate(navigation::Message::Previous))
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                (Effect::None, self.navigate(navigation::Message::Next))
            }
            keyboard::Key::Character(c) if c.eq_ignore_ascii_case(ZOOM_KEY) => {
                (Effect::None, self.toggle_zoom())
            }
            _ => (Effect::None, Task::none()),
        }
    }

    fn pointer_pressed(&mut self) {
        let Some(position) = self.drag.cursor() else {
            return;
        };
        let target = self.press_target(position);
        self.drag.handle(drag::Message::Pressed {
            target,
            zoomed: self.zoom.is_zoomed(),
            pan: self.zoom.pan(),
        });
    }

    fn pointer_moved(&mut self, position: Point) -> Task<Message> {
        match self.drag.handle(drag::Message::CursorMoved(position)) {
            drag::Effect::Pan(target) => {
                if !self.zoom.is_dragging() {
                    self.zoom.handle(zoom::Message::BeginDrag);
                }
                match self.zoom.handle(zoom::Message::DragTo(target)) {
                    zoom::Effect::PanChanged(_) => self.snap_stages(),
                    _ => Task::none(),
                }
            }
            _ if self.drag.swipe_offset().abs() > f32::EPSILON => self.snap_stages(),
            _ => Task::none(),
        }
    }

    fn pointer_released(&mut self) -> (Effect, Task<Message>) {
        let was_swiping = self.drag.swipe_offset().abs() > f32::EPSILON;
        let was_dragging = self.zoom.is_dragging();
        let effect = self.drag.handle(drag::Message::Released);
        self.zoom.handle(zoom::Message::EndDrag);

        let task = match effect {
            drag::Effect::Click(drag::PressTarget::Image) => {
                if !self.zoom.is_zoomed() {
                    self.zoom_in()
                } else if was_dragging {
                    Task::none()
                } else {
                    self.zoom_out()
                }
            }
            drag::Effect::Click(drag::PressTarget::Backdrop) => {
                if self.zoom.is_zoomed() {
                    self.zoom_out()
                } else {
                    self.close();
                    return (Effect::Close, Task::none());
                }
            }
            drag::Effect::Swipe(drag::Swipe::Previous) => {
                self.navigate(navigation::Message::Previous)
            }
            drag::Effect::Swipe(drag::Swipe::Next) => self.navigate(navigation::Message::Next),
            drag::Effect::DragEnded | drag::Effect::Pan(_) | drag::Effect::None => {
                if was_swiping {
                    self.snap_stages()
                } else {
                    Task::none()
                }
            }
        };
        (Effect::None, task)
    }

    fn pointer_cancelled(&mut self) -> Task<Message> {
        let was_swiping = self.drag.swipe_offset().abs() > f32::EPSILON;
        self.drag.handle(drag::Message::Cancel);
        self.zoom.handle(zoom::Message::EndDrag);
        if was_swiping {
            self.snap_stages()
        } else {
            Task::none()
        }
    }

    fn press_target(&self, position: Point) -> drag::PressTarget {
        let Some(layout) = self.current_layout() else {
            return drag::PressTarget::Backdrop;
        };
        if self.viewport.is_empty() {
            return drag::PressTarget::Image;
        }
        let rect = Rect::image_in_viewport(self.viewport, layout.display, 1.0, layout.shift);
        if rect.contains(position.x, position.y) {
            drag::PressTarget::Image
        } else {
            drag::PressTarget::Backdrop
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    fn rendered_size_of(&self, slide: &SlideImages) -> Dimensions {
        let natural = slide
            .natural_size()
            .or_else(|| {
                self.items
                    .get(slide.index)
                    .map(|item| Dimensions::new(item.aspect_ratio.value(), 1.0))
            })
            .unwrap_or_default();
        geometry::rendered_size(natural, self.viewport, self.config.viewport_fill)
    }

    fn current_rendered_size(&self) -> Dimensions {
        self.current
            .as_ref()
            .map(|slide| self.rendered_size_of(slide))
            .unwrap_or_default()
    }

    fn current_layout(&self) -> Option<SlideLayout> {
        let slide = self.current.as_ref()?;
        let scale = if self.zoom.is_zoomed() {
            self.config.zoom_factor.value()
        } else {
            1.0
        };
        let display = self.rendered_size_of(slide).scaled(scale);
        let transform = self
            .transition
            .as_ref()
            .map_or(Transform::CENTER, Transition::incoming_transform);
        let pan = self.zoom.pan();
        let shift = PanOffset::new(
            pan.x + transform.offset_x * self.viewport.width + self.drag.swipe_offset(),
            pan.y,
        );

        Some(SlideLayout {
            display,
            stage: Stage::new(self.viewport, display),
            shift,
            opacity: transform.opacity,
        })
    }

    fn outgoing_layout(&self) -> Option<SlideLayout> {
        let slide = self.outgoing.as_ref()?;
        let transform = self.transition.as_ref()?.outgoing_transform();
        let display = self.rendered_size_of(slide);

        Some(SlideLayout {
            display,
            stage: Stage::new(self.viewport, display),
            shift: PanOffset::new(transform.offset_x * self.viewport.width, 0.0),
            opacity: transform.opacity,
        })
    }

    fn snap_stages(&self) -> Task<Message> {
        let current = self
            .current_layout()
            .map(|layout| snap_stage(CURRENT_STAGE_ID, &layout));
        let outgoing = self
            .outgoing_layout()
            .map(|layout| snap_stage(OUTGOING_STAGE_ID, &layout));
        Task::batch(current.into_iter().chain(outgoing))
    }

    fn slide_view<'a>(
        &'a self,
        images: &'a SlideImages,
        layout: SlideLayout,
        resolution: Resolution,
        id: &'static str,
    ) -> pane::SlideView<'a> {
        pane::SlideView {
            id,
            handle: images.image(resolution).map(|image| &image.handle),
            display: layout.display,
            content: layout.stage.content_size(),
            opacity: layout.opacity,
            alt_text: self
                .items
                .get(images.index)
                .map_or("", |item| item.alt_text.as_str()),
            failed: images.failed,
        }
    }
}

fn snap_stage(id: &'static str, layout: &SlideLayout) -> Task<Message> {
    let (x, y) = layout.stage.relative_offset(layout.shift);
    operation::snap_to(Id::new(id), RelativeOffset { x, y })
}

fn decode(loader: &dyn ImageLoader, source: &ImageSource) -> Result<LoadedImage, LoadError> {
    let decoded = loader.load(source)?;
    Ok(LoadedImage::from_rgba(
        decoded.width,
        decoded.height,
        decoded.pixels,
    ))
}

/// Emits `message` once `delay` has elapsed.
///
/// The sleep is created inside the future so that building the task does not
/// need a running reactor; only polling it does.
fn delayed(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| message.clone(),
    )
}

// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows over a real directory: listing pages, decoding renditions
//! and driving the viewer with the decoded images.

use iced::{event, keyboard, window, Size};
use iced_gallery::application::port::{GallerySource, ImageLoader, SourceError};
use iced_gallery::application::query::GalleryCollection;
use iced_gallery::domain::gallery::{Resolution, GalleryItem};
use iced_gallery::domain::ui::newtypes::PageSize;
use iced_gallery::infrastructure::{DirectorySource, FsImageLoader};
use iced_gallery::ui::viewer::cache::LoadedImage;
use iced_gallery::ui::viewer::{Effect, Message, State, ViewerConfig, ViewerMode};
use image_rs::{Rgba, RgbaImage};
use std::path::Path;
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

fn write_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([30, 60, 90, 255]))
        .save(path)
        .expect("failed to write png");
}

/// Five images of mixed orientation plus a file that is not an image.
fn sample_gallery() -> TempDir {
    let dir = tempdir().expect("failed to create temp dir");
    write_png(&dir.path().join("a_harbour.png"), 64, 32);
    write_png(&dir.path().join("b_tower.png"), 20, 60);
    write_png(&dir.path().join("c_field.png"), 40, 40);
    write_png(&dir.path().join("d_coast.png"), 90, 30);
    write_png(&dir.path().join("e_forest.png"), 30, 40);
    std::fs::write(dir.path().join("notes.txt"), "not an image").expect("write notes");
    dir
}

fn fetch_all(source: &dyn GallerySource, page_size: usize) -> GalleryCollection {
    let mut gallery = GalleryCollection::new(PageSize::new(page_size));
    while let Some(request) = gallery.begin_fetch() {
        let page = source.fetch_page(request.limit, request.offset);
        gallery.apply_page(page);
    }
    gallery
}

fn decode(item: &GalleryItem, resolution: Resolution) -> LoadedImage {
    let decoded = FsImageLoader::new()
        .load(item.source(resolution))
        .expect("sample should decode");
    LoadedImage::from_rgba(decoded.width, decoded.height, decoded.pixels)
}

fn escape() -> Message {
    let key = keyboard::Key::Named(keyboard::key::Named::Escape);
    Message::RawEvent {
        window: window::Id::unique(),
        event: event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }),
    }
}

#[test]
fn directory_is_paged_in_name_order() {
    let dir = sample_gallery();
    let source = DirectorySource::new(dir.path());

    let gallery = fetch_all(&source, 2);
    let ids: Vec<_> = gallery.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(
        ids,
        ["a_harbour.png", "b_tower.png", "c_field.png", "d_coast.png", "e_forest.png"]
    );
    assert!(!gallery.has_more());
    assert!(gallery.last_error().is_none());
}

#[test]
fn items_carry_aspect_ratio_and_titles() {
    let dir = sample_gallery();
    let page = DirectorySource::new(dir.path())
        .fetch_page(10, 0)
        .expect("listing should succeed");

    assert!(page[0].aspect_ratio.is_landscape());
    assert!(!page[1].aspect_ratio.is_landscape());
    assert_eq!(page[0].alt_text, "a harbour");
    assert_eq!(page[0].visible_caption(), Some("a harbour"));
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempdir().expect("failed to create temp dir");
    let source = DirectorySource::new(dir.path().join("missing"));

    let mut gallery = GalleryCollection::new(PageSize::new(4));
    let request = gallery.begin_fetch().expect("first fetch");
    let result = source.fetch_page(request.limit, request.offset);
    assert!(matches!(result, Err(SourceError::NotFound(_))));

    gallery.apply_page(result);
    assert!(gallery.is_empty());
    assert!(gallery.last_error().is_some());
}

#[test]
fn preview_is_capped_and_full_keeps_natural_size() {
    let dir = tempdir().expect("failed to create temp dir");
    write_png(&dir.path().join("wide.png"), 200, 100);
    let source = DirectorySource::new(dir.path()).with_preview_max_edge(50);
    let item = source.fetch_page(1, 0).expect("listing").remove(0);

    let preview = decode(&item, Resolution::Preview);
    let full = decode(&item, Resolution::Full);
    assert_eq!(
        (preview.dimensions.width, preview.dimensions.height),
        (50.0, 25.0)
    );
    assert_eq!((full.dimensions.width, full.dimensions.height), (200.0, 100.0));
}

#[test]
fn viewer_shows_decoded_slides_and_closes() {
    let dir = sample_gallery();
    let gallery = fetch_all(&DirectorySource::new(dir.path()), 3);
    let items = gallery.items().to_vec();

    let mut viewer = State::new(ViewerConfig::default(), Arc::new(FsImageLoader::new()));
    let _ = viewer.handle_message(Message::ViewportResized(Size::new(800.0, 600.0)));
    let _ = viewer.handle_message(Message::ItemsChanged(items.clone()));
    let _ = viewer.handle_message(Message::Open { index: 4 });
    assert_eq!(viewer.mode(), ViewerMode::Browsing);
    assert!(viewer.snapshot().is_loading);

    let key = viewer.current_slide_key().expect("slide should be loading");
    let _ = viewer.handle_message(Message::ImageLoaded {
        key,
        id: items[4].id.clone(),
        resolution: Resolution::Preview,
        result: Ok(decode(&items[4], Resolution::Preview)),
    });
    assert!(!viewer.snapshot().is_loading);
    assert!(!viewer.current_failed());

    // Wraps from the last item to the first.
    let _ = viewer.handle_message(Message::NavigateNext);
    assert_eq!(viewer.snapshot().current_index, 0);

    let (effect, _) = viewer.handle_message(escape());
    assert_eq!(effect, Effect::Close);
    assert!(!viewer.is_open());
}

#[test]
fn undecodable_file_keeps_its_slot() {
    let dir = sample_gallery();
    std::fs::write(dir.path().join("c_broken.png"), b"not a png").expect("write broken");

    let gallery = fetch_all(&DirectorySource::new(dir.path()), 10);
    let broken = &gallery.items()[2];
    assert_eq!(broken.id.as_str(), "c_broken.png");
    assert_eq!(gallery.len(), 6);

    let result = FsImageLoader::new().load(broken.source(Resolution::Preview));
    assert!(result.is_err());
}

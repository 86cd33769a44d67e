// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::config::{self, Config, DEFAULT_PAGE_SIZE};
use iced_gallery::domain::ui::newtypes::ZoomFactor;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn saved_settings_drive_the_viewer() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut settings = Config::default();
    settings.viewer.zoom_factor = Some(3.0);
    settings.viewer.transition_ms = Some(0);
    settings.gallery.page_size = Some(12);
    config::save_with_override(&settings, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, settings);

    let viewer = loaded.viewer_settings();
    assert_eq!(viewer.zoom_factor, ZoomFactor::new(3.0));
    assert!(viewer.transition.is_instant());
    assert_eq!(loaded.page_size().value(), 12);
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[viewer]\nhint_duration_ms = 4000\n",
    )
    .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(
        loaded.viewer_settings().hint_duration.as_duration(),
        Duration::from_millis(4000)
    );
    assert_eq!(loaded.page_size().value(), DEFAULT_PAGE_SIZE);
}

#[test]
fn malformed_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[viewer\nzoom_factor = ")
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

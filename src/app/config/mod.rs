// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[viewer]` - Zoom factor, swipe threshold, hint/settle/transition timings
//! - `[gallery]` - Page size, rendition sizes, decoded image cache
//!
//! Every field is optional. Missing fields take the defaults in [`defaults`],
//! out-of-range values are clamped by the domain newtypes.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.viewer.zoom_factor = Some(3.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::newtypes::{
    HintDuration, PageSize, SettleDelay, SwipeThreshold, TransitionDuration, ViewportFill,
    ZoomFactor,
};
use crate::error::{Error, Result};
use crate::ui::viewer::component;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Viewer tunables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    #[serde(default = "default_zoom_factor", skip_serializing_if = "Option::is_none")]
    pub zoom_factor: Option<f32>,

    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    #[serde(
        default = "default_hint_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hint_duration_ms: Option<u64>,

    #[serde(
        default = "default_settle_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub settle_delay_ms: Option<u64>,

    /// Slide transition length; `0` switches slides without animation.
    #[serde(default = "default_transition_ms", skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,

    #[serde(default = "default_viewport_fill", skip_serializing_if = "Option::is_none")]
    pub viewport_fill: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_factor: default_zoom_factor(),
            swipe_threshold_px: default_swipe_threshold_px(),
            hint_duration_ms: default_hint_duration_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            transition_ms: default_transition_ms(),
            viewport_fill: default_viewport_fill(),
        }
    }
}

/// Gallery paging and image sizes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    #[serde(
        default = "default_preview_max_edge",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_max_edge: Option<u32>,

    /// Longest edge of the zoomed rendition; `0` keeps the natural size.
    #[serde(default = "default_full_max_edge", skip_serializing_if = "Option::is_none")]
    pub full_max_edge: Option<u32>,

    #[serde(
        default = "default_cache_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_capacity: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            preview_max_edge: default_preview_max_edge(),
            full_max_edge: default_full_max_edge(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Viewer tunables with defaults filled in and bounds applied.
    #[must_use]
    pub fn viewer_settings(&self) -> component::ViewerConfig {
        let viewer = &self.viewer;
        component::ViewerConfig {
            zoom_factor: ZoomFactor::new(viewer.zoom_factor.unwrap_or(DEFAULT_ZOOM_FACTOR)),
            swipe_threshold: SwipeThreshold::new(
                viewer
                    .swipe_threshold_px
                    .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
            ),
            hint_duration: HintDuration::new(
                viewer.hint_duration_ms.unwrap_or(DEFAULT_HINT_DURATION_MS),
            ),
            settle_delay: SettleDelay::new(viewer.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS)),
            transition: TransitionDuration::new(
                viewer.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
            ),
            viewport_fill: ViewportFill::new(viewer.viewport_fill.unwrap_or(DEFAULT_VIEWPORT_FILL)),
            cache_capacity: self
                .gallery
                .cache_capacity
                .unwrap_or(DEFAULT_CACHE_CAPACITY),
        }
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.gallery.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    #[must_use]
    pub fn preview_max_edge(&self) -> u32 {
        self.gallery
            .preview_max_edge
            .unwrap_or(DEFAULT_PREVIEW_MAX_EDGE)
    }

    /// `None` when the full rendition should keep its natural size.
    #[must_use]
    pub fn full_max_edge(&self) -> Option<u32> {
        match self.gallery.full_max_edge {
            Some(0) => None,
            Some(edge) => Some(edge),
            None => Some(DEFAULT_FULL_MAX_EDGE),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_zoom_factor() -> Option<f32> {
    Some(DEFAULT_ZOOM_FACTOR)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_hint_duration_ms() -> Option<u64> {
    Some(DEFAULT_HINT_DURATION_MS)
}

fn default_settle_delay_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_DELAY_MS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_viewport_fill() -> Option<f32> {
    Some(DEFAULT_VIEWPORT_FILL)
}

fn default_page_size() -> Option<usize> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_preview_max_edge() -> Option<u32> {
    Some(DEFAULT_PREVIEW_MAX_EDGE)
}

fn default_full_max_edge() -> Option<u32> {
    Some(DEFAULT_FULL_MAX_EDGE)
}

fn default_cache_capacity() -> Option<usize> {
    Some(DEFAULT_CACHE_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file is not a
/// warning; an unreadable one yields defaults and the reason.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "using default settings");
            (Config::default(), Some(err.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            viewer: ViewerConfig {
                zoom_factor: Some(3.0),
                transition_ms: Some(0),
                ..ViewerConfig::default()
            },
            gallery: GalleryConfig {
                page_size: Some(25),
                ..GalleryConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[viewer\nzoom_factor = ").expect("failed to write");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config: Config = toml::from_str("[viewer]\nzoom_factor = 4.0\n").unwrap();
        assert_eq!(config.viewer.zoom_factor, Some(4.0));
        assert_eq!(config.viewer.hint_duration_ms, Some(DEFAULT_HINT_DURATION_MS));
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config: Config = toml::from_str(
            "[viewer]\nzoom_factor = 50.0\nswipe_threshold_px = 1.0\n\n[gallery]\npage_size = 0\n",
        )
        .unwrap();

        let viewer = config.viewer_settings();
        assert_abs_diff_eq!(viewer.zoom_factor.value(), zoom_bounds::MAX_FACTOR);
        assert_abs_diff_eq!(viewer.swipe_threshold.value(), swipe_bounds::MIN_PX);
        assert_eq!(config.page_size().value(), page_bounds::MIN);
    }

    #[test]
    fn zero_full_edge_keeps_natural_size() {
        let mut config = Config::default();
        assert_eq!(config.full_max_edge(), Some(DEFAULT_FULL_MAX_EDGE));
        config.gallery.full_max_edge = Some(0);
        assert_eq!(config.full_max_edge(), None);
    }

    #[test]
    fn default_viewer_settings_match_component_defaults() {
        assert_eq!(
            Config::default().viewer_settings(),
            component::ViewerConfig::default()
        );
    }

    #[test]
    fn broken_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not toml at all = = =").unwrap();

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}

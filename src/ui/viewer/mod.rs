// SPDX-License-Identifier: MPL-2.0
//! Full-screen image viewer ("carousel").
//!
//! - [`component`]: the orchestrating state machine (open/close, navigation,
//!   zoom, loading, timers)
//! - [`subcomponents`]: small TEA pieces owned by the component
//! - [`slide`]: slide transforms, transitions and stage geometry
//! - [`overlay`]: which overlay elements are visible
//! - [`cache`]: decoded image cache
//! - [`pane`]: the widget tree

pub mod cache;
pub mod component;
pub mod overlay;
pub mod pane;
pub mod slide;
pub mod subcomponents;

pub use component::{Effect, Message, State, ViewerConfig, ViewerMode, ViewerState};

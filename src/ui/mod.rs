// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Full-screen viewer with zoom, pan, and slide navigation
//! - [`widgets`] - Custom Iced widgets (spinner, input blocking)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod styles;
pub mod viewer;
pub mod widgets;

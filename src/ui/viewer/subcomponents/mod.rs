// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components; they never talk to
//! each other directly.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── navigation - Current index and slide direction
//!     ├── zoom       - Zoom flag, pan offset, drag bounds
//!     ├── drag       - Pointer press tracking and gesture classification
//!     ├── loading    - Slide keys and spinner
//!     ├── hint       - Auto-dismissing drag hint
//!     └── timer      - Token bookkeeping shared by the timed pieces
//! ```

pub mod drag;
pub mod hint;
pub mod loading;
pub mod navigation;
pub mod timer;
pub mod zoom;

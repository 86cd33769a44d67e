// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! Viewer value objects that are independent of any presentation framework.

pub mod geometry;
pub mod newtypes;

// Re-export commonly used types
pub use geometry::{Dimensions, DragBounds, PanOffset, Rect};
pub use newtypes::{
    HintDuration, PageSize, SettleDelay, SwipeThreshold, TransitionDuration, ViewportFill,
    ZoomFactor,
};

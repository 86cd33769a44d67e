// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component: zoom flag, pan offset, drag flag and drag bounds.
//!
//! Invariants kept by every handler:
//! - `is_dragging` implies `is_zoomed`
//! - `pan` always lies within `bounds`
//! - leaving zoom puts `pan` back at the centre immediately

use crate::domain::ui::geometry::{Dimensions, DragBounds, PanOffset};
use crate::domain::ui::newtypes::ZoomFactor;

/// Zoom sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    is_zoomed: bool,
    is_dragging: bool,
    pan: PanOffset,
    bounds: DragBounds,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Flip between zoomed and unzoomed.
    Toggle,
    /// Zoom in if not already zoomed.
    ZoomIn,
    /// Zoom out if zoomed.
    ZoomOut,
    /// A drag on the zoomed image started.
    BeginDrag,
    /// The drag ended (sent unconditionally on release).
    EndDrag,
    /// The drag wants the image centre at this offset.
    DragTo(PanOffset),
    /// Re-measure the bounds from the current layout.
    RecomputeBounds {
        rendered: Dimensions,
        viewport: Dimensions,
        factor: ZoomFactor,
    },
    /// Return to the unzoomed, centred state without reporting a zoom-out.
    Reset,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The image became zoomed.
    ZoomedIn,
    /// The image became unzoomed; the pan is back at the centre.
    ZoomedOut,
    /// The pan offset moved.
    PanChanged(PanOffset),
}

impl State {
    /// Handle a zoom message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle => {
                if self.is_zoomed {
                    self.zoom_out()
                } else {
                    self.zoom_in()
                }
            }
            Message::ZoomIn => {
                if self.is_zoomed {
                    Effect::None
                } else {
                    self.zoom_in()
                }
            }
            Message::ZoomOut => {
                if self.is_zoomed {
                    self.zoom_out()
                } else {
                    Effect::None
                }
            }
            Message::BeginDrag => {
                if self.is_zoomed {
                    self.is_dragging = true;
                }
                Effect::None
            }
            Message::EndDrag => {
                self.is_dragging = false;
                Effect::None
            }
            Message::DragTo(target) => {
                if !self.is_dragging {
                    return Effect::None;
                }
                self.move_pan(target)
            }
            Message::RecomputeBounds {
                rendered,
                viewport,
                factor,
            } => {
                if !self.is_zoomed {
                    self.bounds = DragBounds::ZERO;
                    return Effect::None;
                }
                self.bounds = DragBounds::compute(rendered, viewport, factor);
                self.move_pan(self.pan)
            }
            Message::Reset => {
                *self = Self::default();
                Effect::None
            }
        }
    }

    fn zoom_in(&mut self) -> Effect {
        self.is_zoomed = true;
        self.pan = PanOffset::ZERO;
        Effect::ZoomedIn
    }

    fn zoom_out(&mut self) -> Effect {
        self.is_zoomed = false;
        self.is_dragging = false;
        self.pan = PanOffset::ZERO;
        self.bounds = DragBounds::ZERO;
        Effect::ZoomedOut
    }

    fn move_pan(&mut self, target: PanOffset) -> Effect {
        let clamped = self.bounds.clamp(target);
        if clamped == self.pan {
            Effect::None
        } else {
            self.pan = clamped;
            Effect::PanChanged(clamped)
        }
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[must_use]
    pub fn pan(&self) -> PanOffset {
        self.pan
    }

    #[must_use]
    pub fn bounds(&self) -> DragBounds {
        self.bounds
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window size is tracked at all times so the viewer knows its viewport the
//! moment it opens. Everything else is owned by the viewer, which only
//! subscribes while it is open.

use super::Message;
use crate::ui::viewer::component;
use iced::{window, Subscription};

pub fn create(viewer: &component::State) -> Subscription<Message> {
    let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));
    let viewer = viewer.subscription().map(Message::Viewer);

    Subscription::batch([resize, viewer])
}

// SPDX-License-Identifier: MPL-2.0
//! Full-screen pane: backdrop, the two slide stages and the overlay layer.
//!
//! Stage slots are always present, even when empty, so the widget tree keeps
//! its shape across slide changes and the scrollables keep their identity.

use crate::domain::ui::geometry::Dimensions;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use crate::ui::viewer::overlay::OverlayModel;
use crate::ui::widgets::{input_blocking, AnimatedSpinner};
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::image::Handle;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, image, mouse_area, Column, Container, Id, Row, Scrollable, Space, Stack, Text,
};
use iced::{ContentFit, Element, Length, Padding};

const HINT_TEXT: &str = "Drag to pan image";

/// One slide as it should be drawn this frame.
pub struct SlideView<'a> {
    /// Identifier of the stage scrollable.
    pub id: &'static str,
    /// `None` while the image is loading or after it failed.
    pub handle: Option<&'a Handle>,
    /// Size the image is drawn at.
    pub display: Dimensions,
    /// Size of the stage content the image is centred in.
    pub content: Dimensions,
    pub opacity: f32,
    pub alt_text: &'a str,
    pub failed: bool,
}

pub struct ViewModel<'a> {
    pub current: Option<SlideView<'a>>,
    pub outgoing: Option<SlideView<'a>>,
    pub overlay: OverlayModel,
    pub spinner_rotation: f32,
    pub is_zoomed: bool,
    pub is_dragging: bool,
    pub cursor_over_image: bool,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let cursor = cursor_interaction(model.is_zoomed, model.is_dragging, model.cursor_over_image);

    let stages = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(stage_slot(model.outgoing))
        .push(stage_slot(model.current));

    let backdrop = Container::new(mouse_area(stages).interaction(cursor))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop);

    let OverlayModel {
        spinner: show_spinner,
        hint: show_hint,
        caption,
        counter,
        arrows,
    } = model.overlay;

    if show_spinner {
        stack = stack.push(centered(spinner(model.spinner_rotation)));
    }

    if show_hint {
        let hint = Container::new(Text::new(HINT_TEXT).size(typography::BODY))
            .padding(Padding::from([spacing::XS, spacing::MD]))
            .style(styles::overlay::indicator(radius::LG));
        stack = stack.push(
            Container::new(hint)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Top),
        );
    }

    if arrows {
        stack = stack
            .push(arrow("◀", Message::NavigatePrevious, Horizontal::Left))
            .push(arrow("▶", Message::NavigateNext, Horizontal::Right));
    }

    stack = stack.push(top_controls(model.is_zoomed));

    if let Some(footer) = footer(caption, counter) {
        stack = stack.push(
            Container::new(footer)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        );
    }

    stack.into()
}

fn cursor_interaction(is_zoomed: bool, is_dragging: bool, over_image: bool) -> mouse::Interaction {
    match (is_zoomed, is_dragging, over_image) {
        (true, true, _) => mouse::Interaction::Grabbing,
        (true, false, true) => mouse::Interaction::Grab,
        (false, _, true) => mouse::Interaction::ZoomIn,
        _ => mouse::Interaction::default(),
    }
}

/// A stage scrollable, or an empty placeholder of the same extent.
fn stage_slot(slide: Option<SlideView<'_>>) -> Element<'_, Message> {
    let Some(slide) = slide else {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    };

    let picture: Element<'_, Message> = match slide.handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(slide.display.width))
            .height(Length::Fixed(slide.display.height))
            .content_fit(ContentFit::Fill)
            .opacity(slide.opacity)
            .into(),
        None if slide.failed => Container::new(
            Text::new(format!("Could not load \u{201c}{}\u{201d}", slide.alt_text))
                .size(typography::BODY_LG)
                .color(palette::GRAY_200),
        )
        .padding(spacing::MD)
        .style(styles::overlay::indicator(radius::MD))
        .into(),
        // Loading: the spinner overlay covers it.
        None => Space::new()
            .width(Length::Fixed(slide.display.width))
            .height(Length::Fixed(slide.display.height))
            .into(),
    };

    let content = Container::new(picture)
        .width(Length::Fixed(slide.content.width))
        .height(Length::Fixed(slide.content.height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let scrollable = Scrollable::new(content)
        .id(Id::new(slide.id))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        });

    input_blocking(scrollable).into()
}

fn centered<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn spinner<'a>(rotation: f32) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::WHITE, rotation)
        .size(sizing::ICON_XL)
        .into_element();

    Container::new(spinner)
        .padding(spacing::MD)
        .style(styles::overlay::loading(radius::MD))
        .into()
}

fn arrow<'a>(glyph: &'a str, message: Message, side: Horizontal) -> Element<'a, Message> {
    let button = button(Text::new(glyph).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .on_press(message)
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::TRANSPARENT,
            opacity::OVERLAY_MEDIUM,
        ));

    Container::new(button)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn control<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(),
    )
    .width(Length::Fixed(sizing::CONTROL_BUTTON))
    .height(Length::Fixed(sizing::CONTROL_BUTTON))
    .on_press(message)
    .style(styles::button_overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
    .into()
}

/// Zoom toggle and close button, top right.
fn top_controls<'a>(is_zoomed: bool) -> Element<'a, Message> {
    let zoom_glyph = if is_zoomed { "−" } else { "+" };
    let controls = Row::new()
        .spacing(spacing::XS)
        .push(control(zoom_glyph, Message::ToggleZoom))
        .push(control("✕", Message::Close));

    Container::new(controls)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

fn footer<'a>(caption: Option<String>, counter: Option<String>) -> Option<Element<'a, Message>> {
    if caption.is_none() && counter.is_none() {
        return None;
    }

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);

    if let Some(caption) = caption {
        column = column.push(
            Container::new(Text::new(caption).size(typography::BODY_LG))
                .max_width(sizing::CAPTION_MAX_WIDTH)
                .padding(Padding::from([spacing::XS, spacing::SM]))
                .style(styles::overlay::indicator(radius::SM)),
        );
    }

    if let Some(counter) = counter {
        column = column.push(
            Container::new(Text::new(counter).size(typography::CAPTION))
                .padding(Padding::from([spacing::XXS, spacing::XS]))
                .style(styles::overlay::indicator(radius::LG)),
        );
    }

    Some(column.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_reflects_zoom_and_drag() {
        assert_eq!(
            cursor_interaction(false, false, true),
            mouse::Interaction::ZoomIn
        );
        assert_eq!(
            cursor_interaction(true, false, true),
            mouse::Interaction::Grab
        );
        assert_eq!(
            cursor_interaction(true, true, false),
            mouse::Interaction::Grabbing
        );
        assert_eq!(
            cursor_interaction(false, false, false),
            mouse::Interaction::default()
        );
    }

    #[test]
    fn footer_is_omitted_when_empty() {
        assert!(footer(None, None).is_none());
        assert!(footer(Some("Harbour".into()), None).is_some());
        assert!(footer(None, Some("1 / 3".into())).is_some());
    }
}

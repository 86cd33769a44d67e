// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is a grid of thumbnails whose widths follow their aspect ratio.
//! While the viewer is open it replaces the grid entirely.

use super::Message;
use crate::application::query::GalleryCollection;
use crate::domain::gallery::layout::ROW_PERCENT;
use crate::domain::gallery::{pack_rows, GalleryItem, LayoutWeight};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component;
use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::{button, image, Column, Container, Id, Row, Scrollable, Space, Text};
use iced::{ContentFit, Element, Length, Padding};

/// Identifier of the thumbnail grid scrollable.
pub const GRID_ID: &str = "gallery-grid";

const EMPTY_TITLE: &str = "No images found in this gallery";
const EMPTY_DETAIL: &str = "Add some images to the directory to get started";
const FETCH_ERROR: &str = "Failed to load images. Please try again later.";
const END_OF_GALLERY: &str = "You've reached the end of the gallery";
const LOADING: &str = "Loading images…";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a GalleryCollection,
    pub viewer: &'a component::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.viewer.is_open() {
        return ctx.viewer.view().map(Message::Viewer);
    }

    let content = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(grid(ctx.gallery.items()))
        .push(status(ctx.gallery));

    Scrollable::new(content)
        .id(Id::new(GRID_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::GridScrolled(viewport.relative_offset()))
        .into()
}

fn grid(items: &[GalleryItem]) -> Element<'_, Message> {
    let weights: Vec<LayoutWeight> = items
        .iter()
        .map(|item| LayoutWeight::from_aspect_ratio(item.aspect_ratio))
        .collect();
    let rows = pack_rows(weights.iter().copied());
    let last_row = rows.len().saturating_sub(1);

    let mut column = Column::new().spacing(spacing::XS).width(Length::Fill);
    for (row_index, range) in rows.into_iter().enumerate() {
        let mut row = Row::new()
            .spacing(spacing::XS)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::GRID_ROW_HEIGHT));
        let mut used = 0;

        for index in range {
            let basis = weights[index].flex_basis_percent();
            used += basis;
            row = row.push(thumbnail(index, &items[index], basis));
        }

        // Full rows stretch; the trailing row keeps its proportions.
        if row_index == last_row && used < ROW_PERCENT {
            row = row.push(Space::new().width(Length::FillPortion(ROW_PERCENT - used)));
        }
        column = column.push(row);
    }

    column.into()
}

fn thumbnail(index: usize, item: &GalleryItem, basis: u16) -> Element<'_, Message> {
    let picture = image(Handle::from_path(&item.low_res.path))
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill);

    button(picture)
        .padding(Padding::ZERO)
        .width(Length::FillPortion(basis))
        .height(Length::Fill)
        .on_press(Message::OpenViewer(index))
        .style(styles::button::tile)
        .into()
}

/// Empty state, fetch error, loading line, "Load more" or end of gallery.
fn status(gallery: &GalleryCollection) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    if gallery.is_empty() && !gallery.has_more() && !gallery.is_fetching() {
        column = column.push(
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(Text::new(EMPTY_TITLE).size(typography::TITLE_MD))
                    .push(
                        Text::new(EMPTY_DETAIL)
                            .size(typography::BODY)
                            .color(palette::GRAY_400),
                    ),
            )
            .padding(spacing::XL)
            .style(styles::container::panel),
        );
    }

    if gallery.last_error().is_some() {
        column = column.push(
            Container::new(Text::new(FETCH_ERROR).size(typography::BODY))
                .padding(spacing::SM)
                .style(styles::container::error_banner),
        );
    }

    if gallery.is_fetching() {
        column = column.push(
            Text::new(LOADING)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    } else if gallery.has_more() {
        column = column.push(
            button(Text::new("Load more").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::LoadMore)
                .style(styles::button_primary),
        );
    } else if !gallery.is_empty() {
        column = column.push(
            Text::new(END_OF_GALLERY)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    column.into()
}

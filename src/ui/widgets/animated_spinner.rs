// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas, rotated by the caller on every tick.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Default diameter in logical pixels.
pub const DEFAULT_SIZE: f32 = 48.0;

const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: u16 = 30;

/// A ring with a half-circle arc that turns with `rotation`.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: DEFAULT_SIZE,
        }
    }

    /// Sets the diameter. Non-positive sizes fall back to the default.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = if size > 0.0 { size } else { DEFAULT_SIZE };
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(Color {
                            a: 0.25,
                            ..self.color
                        }),
                );

                // Half circle starting at the top.
                let start_angle = self.rotation - PI / 2.0;
                let mut arc = canvas::path::Builder::new();
                arc.move_to(point_on_circle(center, radius, start_angle));
                for i in 1..=ARC_SEGMENTS {
                    let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                    arc.line_to(point_on_circle(center, radius, start_angle + PI * t));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

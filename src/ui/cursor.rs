/// The custom cursor layer
///
/// Two shapes drawn on a canvas over the whole window: a small dot glued
/// to the pointer, and a larger ring trailing it with an eased follow
/// (15% of the remaining distance per frame). Hovering an interactive
/// region grows the ring. The layer only draws; it never captures
/// events, so everything underneath stays clickable.

use cgmath::Vector2;
use iced::mouse;
use iced::widget::canvas::{self, Canvas, Path, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// Fraction of the remaining distance the ring covers each frame
const FOLLOW_FACTOR: f32 = 0.15;
/// Ring radius at rest / while hovering an interactive element
const RING_RADIUS: f32 = 16.0;
const RING_RADIUS_HOVER: f32 = 28.0;
const DOT_RADIUS: f32 = 3.0;

/// Pointer state: exact position plus the trailing ring position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorTrail {
    mouse: Vector2<f32>,
    trail: Vector2<f32>,
    hovering: bool,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self {
            mouse: Vector2::new(-100.0, -100.0),
            trail: Vector2::new(-100.0, -100.0),
            hovering: false,
        }
    }

    pub fn set_position(&mut self, position: Point) {
        self.mouse = Vector2::new(position.x, position.y);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// One frame of the follow loop
    pub fn step(&mut self) {
        self.trail += (self.mouse - self.trail) * FOLLOW_FACTOR;
    }

    pub fn dot(&self) -> Point {
        Point::new(self.mouse.x, self.mouse.y)
    }

    pub fn ring(&self) -> Point {
        Point::new(self.trail.x, self.trail.y)
    }
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw-only canvas program for the cursor shapes
struct CursorLayer {
    dot: Point,
    ring: Point,
    hovering: bool,
}

impl<Message> canvas::Program<Message> for CursorLayer {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill(&Path::circle(self.dot, DOT_RADIUS), Color::WHITE);

        let radius = if self.hovering {
            RING_RADIUS_HOVER
        } else {
            RING_RADIUS
        };
        frame.stroke(
            &Path::circle(self.ring, radius),
            Stroke::default()
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.6))
                .with_width(1.5),
        );

        vec![frame.into_geometry()]
    }
}

/// The full-window cursor layer
pub fn view<'a, Message: 'a>(trail: &CursorTrail) -> Element<'a, Message> {
    Canvas::new(CursorLayer {
        dot: trail.dot(),
        ring: trail.ring(),
        hovering: trail.is_hovering(),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// The preloader overlay
///
/// A black panel with a thin progress bar and a percentage counter.
/// When loading completes the bar snaps to 100%, dwells, then the whole
/// panel slides up and away. The slide is rendered by shrinking the
/// panel from the top of the screen, so its bottom edge rises until
/// nothing is left.

use std::time::Instant;

use iced::widget::{center, column, container, text, Space};
use iced::{Color, Element, Length};

use crate::anim::timeline::Preloader;
use crate::Message;

/// Width of the loader bar track
const BAR_WIDTH: f32 = 320.0;

pub fn view<'a>(preloader: &Preloader, progress: f32, window_height: f32, now: Instant) -> Element<'a, Message> {
    let progress = progress.clamp(0.0, 1.0);

    // offset_fraction goes 0 -> -1 as the panel leaves
    let visible_height = (window_height * (1.0 + preloader.offset_fraction(now))).max(0.0);

    let track = container(
        container(Space::new(
            Length::Fixed(BAR_WIDTH * progress),
            Length::Fixed(2.0),
        ))
        .style(|_theme| container::Style {
            background: Some(Color::WHITE.into()),
            ..container::Style::default()
        }),
    )
    .width(Length::Fixed(BAR_WIDTH))
    .style(|_theme| container::Style {
        background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.12).into()),
        ..container::Style::default()
    });

    let counter = text(format!("{}%", (progress * 100.0).round() as u32))
        .size(12)
        .color(Color::from_rgb(0.6, 0.6, 0.6));

    let panel = container(center(
        column![track, Space::with_height(Length::Fixed(16.0)), counter]
            .align_x(iced::Alignment::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fixed(visible_height))
    .clip(true)
    .style(|_theme| container::Style {
        background: Some(Color::from_rgb(0.02, 0.02, 0.02).into()),
        ..container::Style::default()
    });

    column![panel].width(Length::Fill).into()
}

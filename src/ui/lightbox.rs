/// The lightbox overlay
///
/// A near-black full-screen surface over the page: the current photo at
/// crossfade opacity/scale, the 1-based counter, previous/next controls
/// and a close control. Clicking the backdrop closes; the photo column
/// is opaque to clicks, the backdrop is not.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, text, Space};
use iced::{Color, ContentFit, Element, Length, Size};

use crate::state::lightbox::Lightbox;
use crate::state::gallery::Gallery;
use crate::Message;

fn control<'a>(label: &'a str, size: u16, message: Message) -> Element<'a, Message> {
    button(text(label).size(size).color(Color::WHITE))
        .style(button::text)
        .on_press(message)
        .into()
}

pub fn view<'a>(
    lightbox: &Lightbox,
    gallery: &Gallery,
    full_images: &HashMap<PathBuf, image::Handle>,
    window: Size,
    now: Instant,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.95).into()),
                ..container::Style::default()
            }),
    )
    .on_press(Message::CloseLightbox);

    // Scale is applied through the rendered width: the crossfade
    // shrinks the photo to 95% and grows the replacement back
    let base_width = window.width * 0.68;
    let photo: Element<Message> = match lightbox.source().and_then(|p| full_images.get(p)) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(base_width * lightbox.image_scale(now)))
            .height(Length::Fixed(window.height * 0.72 * lightbox.image_scale(now)))
            .content_fit(ContentFit::Contain)
            .opacity(lightbox.image_opacity(now))
            .into(),
        None => Space::new(Length::Fixed(base_width), Length::Fixed(window.height * 0.72)).into(),
    };

    let counter = text(lightbox.counter_label(gallery).unwrap_or_default())
        .size(14)
        .color(Color::from_rgb(0.7, 0.7, 0.7));

    let controls = row![
        control("‹", 36, Message::NavigateLightbox(-1)),
        Space::with_width(Length::Fixed(24.0)),
        counter,
        Space::with_width(Length::Fixed(24.0)),
        control("›", 36, Message::NavigateLightbox(1)),
        Space::with_width(Length::Fixed(48.0)),
        control("✕", 24, Message::CloseLightbox),
    ]
    .align_y(iced::Alignment::Center);

    let panel = column![photo, Space::with_height(Length::Fixed(24.0)), controls]
        .align_x(iced::Alignment::Center);

    // `opaque` keeps clicks on the photo and controls from falling
    // through to the closing backdrop underneath
    let content = center(opaque(panel));

    iced::widget::stack![backdrop, content]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The gallery grid
///
/// A wrapped grid of square thumbnails. Tiles enter with the staggered
/// reveal and open the lightbox on click; hovering one grows the custom
/// cursor ring.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use iced::widget::{column, container, image, mouse_area, text, Space};
use iced::{Color, ContentFit, Element, Length, Padding};
use iced_aw::Wrap;

use crate::anim::reveal::{RevealDriver, RevealKind};
use crate::state::gallery::Gallery;
use crate::ui::sections::{self, PAGE_MARGIN, TILE_SIZE, TILE_SPACING};
use crate::Message;

/// One square tile: the cached thumbnail, or a placeholder while it is
/// still being generated
fn tile<'a>(
    ordinal: usize,
    path: &PathBuf,
    thumbs: &HashMap<PathBuf, image::Handle>,
    reveals: &RevealDriver,
    now: Instant,
) -> Element<'a, Message> {
    let progress = reveals.progress(RevealKind::GalleryItem { ordinal }, now);
    let alpha = sections::reveal_alpha(progress);

    let content: Element<Message> = match thumbs.get(path) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(TILE_SIZE))
            .content_fit(ContentFit::Cover)
            .opacity(alpha)
            .into(),
        None => container(Space::new(
            Length::Fixed(TILE_SIZE),
            Length::Fixed(TILE_SIZE),
        ))
        .style(move |_theme| {
            container::Style {
                background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.04 * alpha).into()),
                ..container::Style::default()
            }
        })
        .into(),
    };

    let clicked = path.clone();
    container(
        mouse_area(content)
            .on_press(Message::OpenLightbox(clicked))
            .on_enter(Message::HoverChanged(true))
            .on_exit(Message::HoverChanged(false)),
    )
    .padding(Padding {
        top: sections::reveal_offset(RevealKind::GalleryItem { ordinal }, progress),
        ..Padding::ZERO
    })
    .into()
}

/// The full gallery section: header plus the wrapped tile grid
pub fn section<'a>(
    gallery: &Gallery,
    thumbs: &HashMap<PathBuf, image::Handle>,
    reveals: &RevealDriver,
    now: Instant,
) -> Element<'a, Message> {
    let header_progress = reveals.progress(RevealKind::SectionHeader { ordinal: 0 }, now);
    let header = container(
        text("SELECTED WORKS").size(14).color(Color {
            a: sections::reveal_alpha(header_progress),
            ..Color::from_rgb(0.55, 0.55, 0.55)
        }),
    )
    .padding(Padding {
        top: sections::reveal_offset(RevealKind::SectionHeader { ordinal: 0 }, header_progress),
        ..Padding::ZERO
    })
    .height(Length::Fixed(sections::GALLERY_HEADER_H))
    .align_y(iced::alignment::Vertical::Center);

    let tiles: Vec<Element<Message>> = gallery
        .images()
        .iter()
        .enumerate()
        .map(|(ordinal, img)| tile(ordinal, &img.path, thumbs, reveals, now))
        .collect();

    let grid = Wrap::with_elements(tiles)
        .spacing(TILE_SPACING)
        .line_spacing(TILE_SPACING);

    container(column![header, grid])
        .width(Length::Fill)
        .padding(Padding::new(0.0).left(PAGE_MARGIN).right(PAGE_MARGIN))
        .into()
}

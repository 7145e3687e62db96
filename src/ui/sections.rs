/// Page sections: hero, about, footer, and the layout map
///
/// The page is one scrollable column: hero, gallery, about, footer.
/// `PageMap` is the document geometry everything else keys off: reveal
/// bindings get their element positions from it and the menu gets its
/// scroll targets.

use std::time::Instant;

use iced::widget::{column, container, image, row, text, Space};
use iced::{Alignment, Color, Element, Length, Padding, Size};

use crate::anim::reveal::{self, RevealDriver, RevealKind};
use crate::config::SiteConfig;
use crate::Message;

/// Gallery tile edge
pub const TILE_SIZE: f32 = 320.0;
/// Gap between gallery tiles
pub const TILE_SPACING: f32 = 24.0;
/// Horizontal page margin
pub const PAGE_MARGIN: f32 = 64.0;
/// Header area above the gallery grid
pub const GALLERY_HEADER_H: f32 = 200.0;
/// Fixed height of the about section
pub const ABOUT_HEIGHT: f32 = 720.0;
/// Fixed height of the footer
pub const FOOTER_HEIGHT: f32 = 360.0;

/// Document geometry of the page, derived from the window size and the
/// gallery length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMap {
    pub size: Size,
    pub columns: usize,
    pub hero_top: f32,
    pub gallery_top: f32,
    pub about_top: f32,
    pub footer_top: f32,
    pub content_height: f32,
}

pub fn page_map(size: Size, gallery_len: usize) -> PageMap {
    let usable = (size.width - 2.0 * PAGE_MARGIN).max(TILE_SIZE);
    let columns = ((usable / (TILE_SIZE + TILE_SPACING)).floor() as usize).max(1);
    let rows = gallery_len.div_ceil(columns.max(1));
    let gallery_height = GALLERY_HEADER_H + rows as f32 * (TILE_SIZE + TILE_SPACING);

    let hero_top = 0.0;
    let gallery_top = size.height;
    let about_top = gallery_top + gallery_height;
    let footer_top = about_top + ABOUT_HEIGHT;

    PageMap {
        size,
        columns,
        hero_top,
        gallery_top,
        about_top,
        footer_top,
        content_height: footer_top + FOOTER_HEIGHT,
    }
}

/// Navigation targets of the menu overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Work,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::Work, Section::About, Section::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::Work => "WORK",
            Section::About => "ABOUT",
            Section::Contact => "CONTACT",
        }
    }

    /// Scroll offset this section's link glides to
    pub fn target_y(self, map: &PageMap) -> f32 {
        match self {
            Section::Home => map.hero_top,
            Section::Work => map.gallery_top - 40.0,
            Section::About => map.about_top - 40.0,
            Section::Contact => map.footer_top,
        }
    }
}

/// The page's reveal bindings, positioned from the layout map.
/// Registered once, on the preloader's ready signal.
pub fn reveal_bindings(map: &PageMap, gallery_len: usize) -> Vec<reveal::RevealBinding> {
    let mut bindings = vec![
        reveal::RevealBinding::new(RevealKind::SplitText, map.hero_top + map.size.height * 0.3),
        reveal::RevealBinding::new(
            RevealKind::TextBlock { ordinal: 0 },
            map.hero_top + map.size.height * 0.55,
        ),
        reveal::RevealBinding::new(RevealKind::SectionHeader { ordinal: 0 }, map.gallery_top + 40.0),
        reveal::RevealBinding::new(RevealKind::SectionHeader { ordinal: 1 }, map.about_top + 40.0),
        reveal::RevealBinding::new(RevealKind::TextBlock { ordinal: 1 }, map.about_top + 180.0),
        reveal::RevealBinding::new(RevealKind::AboutImage, map.about_top + 120.0),
    ];

    for ordinal in 0..gallery_len {
        let row = ordinal / map.columns.max(1);
        bindings.push(reveal::RevealBinding::new(
            RevealKind::GalleryItem { ordinal },
            map.gallery_top + GALLERY_HEADER_H + row as f32 * (TILE_SIZE + TILE_SPACING),
        ));
    }

    for ordinal in 0..3 {
        bindings.push(reveal::RevealBinding::new(
            RevealKind::FooterChild { ordinal },
            map.footer_top,
        ));
    }

    bindings
}

/// Vertical rest offset of a revealing element (clamped so overshoot
/// never produces negative padding)
pub fn reveal_offset(kind: RevealKind, progress: f32) -> f32 {
    (kind.travel() * (1.0 - progress)).max(0.0)
}

/// Text alpha for a reveal progress (back-out may overshoot 1)
pub fn reveal_alpha(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0)
}

fn faded(base: Color, alpha: f32) -> Color {
    Color { a: alpha, ..base }
}

/// A block of text that rises in when its reveal fires
fn revealed_text<'a>(
    content: String,
    size: u16,
    color: Color,
    kind: RevealKind,
    reveals: &RevealDriver,
    now: Instant,
) -> Element<'a, Message> {
    let progress = reveals.progress(kind, now);
    container(text(content).size(size).color(faded(color, reveal_alpha(progress))))
        .padding(Padding {
            top: reveal_offset(kind, progress),
            ..Padding::ZERO
        })
        .into()
}

/// The hero: split-text headline, tagline, scroll indicator
pub fn hero<'a>(
    config: &SiteConfig,
    reveals: &RevealDriver,
    scroll_y: f32,
    map: &PageMap,
    now: Instant,
) -> Element<'a, Message> {
    // Headline characters rise in one by one
    let title_binding = reveals.binding(RevealKind::SplitText);
    let chars: Vec<Element<Message>> = config
        .title
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let progress = if !reveals.is_registered() {
                0.0
            } else {
                title_binding.map_or(1.0, |b| b.progress_at(now, reveal::char_delay(i)))
            };
            container(
                text(ch.to_string())
                    .size(96)
                    .color(faded(Color::WHITE, reveal_alpha(progress))),
            )
            .padding(Padding {
                top: reveal_offset(RevealKind::SplitText, progress),
                ..Padding::ZERO
            })
            .into()
        })
        .collect();

    // The indicator sits near the hero's bottom edge and fades out as it
    // scrubs between 60% and 30% of the viewport
    let indicator_top = map.hero_top + map.size.height * 0.88;
    let indicator_alpha =
        1.0 - reveal::scrub_progress(indicator_top, scroll_y, map.size.height, 0.6, 0.3);

    let content = column![
        Space::with_height(Length::Fill),
        row(chars).align_y(Alignment::End),
        Space::with_height(Length::Fixed(24.0)),
        revealed_text(
            config.tagline.clone(),
            18,
            Color::from_rgb(0.7, 0.7, 0.7),
            RevealKind::TextBlock { ordinal: 0 },
            reveals,
            now,
        ),
        Space::with_height(Length::Fill),
        text("SCROLL ↓")
            .size(12)
            .color(faded(Color::from_rgb(0.6, 0.6, 0.6), indicator_alpha)),
        Space::with_height(Length::Fixed(32.0)),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(map.size.height))
        .center_x(Length::Fill)
        .into()
}

/// The about section: header, copy, and a parallax portrait that slides
/// in from the right
pub fn about<'a>(
    config: &SiteConfig,
    reveals: &RevealDriver,
    scroll_y: f32,
    portrait: Option<&image::Handle>,
    now: Instant,
) -> Element<'a, Message> {
    let copy = column![
        revealed_text(
            "ABOUT".to_string(),
            14,
            Color::from_rgb(0.55, 0.55, 0.55),
            RevealKind::SectionHeader { ordinal: 1 },
            reveals,
            now,
        ),
        Space::with_height(Length::Fixed(32.0)),
        revealed_text(
            config.about.clone(),
            24,
            Color::from_rgb(0.85, 0.85, 0.85),
            RevealKind::TextBlock { ordinal: 1 },
            reveals,
            now,
        ),
    ]
    .width(Length::FillPortion(3));

    let image_progress = reveals.progress(RevealKind::AboutImage, now);
    let portrait_view: Element<Message> = match portrait {
        Some(handle) => {
            // Slide in from the right, drift with the parallax speed
            let slide = reveal_offset(RevealKind::AboutImage, image_progress);
            let drift =
                (80.0 + reveal::parallax_offset(scroll_y, config.about_image_speed)).max(0.0);
            column![
                Space::with_height(Length::Fixed(drift)),
                container(
                    image(handle.clone())
                        .width(Length::Fixed(360.0))
                        .opacity(reveal_alpha(image_progress)),
                )
                .padding(Padding {
                    left: slide,
                    ..Padding::ZERO
                }),
            ]
            .into()
        }
        None => Space::with_height(Length::Fixed(0.0)).into(),
    };

    let body = row![
        copy,
        Space::with_width(Length::Fixed(64.0)),
        container(portrait_view).width(Length::FillPortion(2)),
    ];

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(ABOUT_HEIGHT))
        .padding(Padding::new(PAGE_MARGIN).top(120.0))
        .into()
}

/// The footer: three staggered rows
pub fn footer<'a>(
    config: &SiteConfig,
    reveals: &RevealDriver,
    now: Instant,
) -> Element<'a, Message> {
    let rows = column![
        revealed_text(
            config.title.clone(),
            40,
            Color::WHITE,
            RevealKind::FooterChild { ordinal: 0 },
            reveals,
            now,
        ),
        Space::with_height(Length::Fixed(24.0)),
        revealed_text(
            config.contact.clone(),
            16,
            Color::from_rgb(0.7, 0.7, 0.7),
            RevealKind::FooterChild { ordinal: 1 },
            reveals,
            now,
        ),
        Space::with_height(Length::Fixed(16.0)),
        revealed_text(
            format!("© 2026 {}", config.title),
            12,
            Color::from_rgb(0.45, 0.45, 0.45),
            RevealKind::FooterChild { ordinal: 2 },
            reveals,
            now,
        ),
    ]
    .align_x(Alignment::Center);

    container(rows)
        .width(Length::Fill)
        .height(Length::Fixed(FOOTER_HEIGHT))
        .center_x(Length::Fill)
        .padding(Padding::new(0.0).top(80.0))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_map_orders_sections() {
        let map = page_map(Size::new(1440.0, 900.0), 9);
        assert_eq!(map.hero_top, 0.0);
        assert!(map.gallery_top > map.hero_top);
        assert!(map.about_top > map.gallery_top);
        assert!(map.footer_top > map.about_top);
        assert_eq!(map.content_height, map.footer_top + FOOTER_HEIGHT);
    }

    #[test]
    fn test_page_map_never_zero_columns() {
        let map = page_map(Size::new(200.0, 400.0), 3);
        assert_eq!(map.columns, 1);
    }

    #[test]
    fn test_reveal_bindings_cover_every_tile_and_footer_row() {
        let map = page_map(Size::new(1440.0, 900.0), 7);
        let bindings = reveal_bindings(&map, 7);

        for ordinal in 0..7 {
            assert!(bindings
                .iter()
                .any(|b| b.kind == RevealKind::GalleryItem { ordinal }));
        }
        for ordinal in 0..3 {
            assert!(bindings
                .iter()
                .any(|b| b.kind == RevealKind::FooterChild { ordinal }));
        }
        // Later grid rows sit lower in the document
        let first = bindings
            .iter()
            .find(|b| b.kind == RevealKind::GalleryItem { ordinal: 0 })
            .unwrap();
        let last = bindings
            .iter()
            .find(|b| b.kind == RevealKind::GalleryItem { ordinal: 6 })
            .unwrap();
        assert!(last.element_top > first.element_top);
    }

    #[test]
    fn test_reveal_offset_clamps_overshoot() {
        // back-out overshoot (progress > 1) must not yield negative padding
        assert_eq!(reveal_offset(RevealKind::SplitText, 1.05), 0.0);
        assert_eq!(reveal_offset(RevealKind::SplitText, 0.0), 100.0);
    }

    #[test]
    fn test_section_targets_are_ordered() {
        let map = page_map(Size::new(1440.0, 900.0), 9);
        assert!(Section::Home.target_y(&map) < Section::Work.target_y(&map));
        assert!(Section::Work.target_y(&map) < Section::About.target_y(&map));
        assert!(Section::About.target_y(&map) < Section::Contact.target_y(&map));
    }
}

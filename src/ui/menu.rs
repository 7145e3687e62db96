/// The full-screen navigation menu overlay
///
/// Four oversized section links and a close control over a near-opaque
/// backdrop. A link closes the menu and glides the page to its section.

use iced::widget::{button, center, column, container, opaque, text, Space};
use iced::{Alignment, Color, Element, Length};

use crate::ui::sections::Section;
use crate::Message;

fn link<'a>(section: Section) -> Element<'a, Message> {
    button(text(section.label()).size(56).color(Color::WHITE))
        .style(button::text)
        .on_press(Message::ScrollToSection(section))
        .into()
}

pub fn view<'a>() -> Element<'a, Message> {
    let links = Section::ALL.into_iter().map(link);

    let content = column(links)
        .push(Space::with_height(Length::Fixed(48.0)))
        .push(
            button(text("CLOSE").size(14).color(Color::from_rgb(0.6, 0.6, 0.6)))
                .style(button::text)
                .on_press(Message::ToggleMenu),
        )
        .spacing(16)
        .align_x(Alignment::Center);

    // The overlay swallows every event underneath it
    opaque(
        container(center(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.02, 0.02, 0.02, 0.97).into()),
                ..container::Style::default()
            }),
    )
}

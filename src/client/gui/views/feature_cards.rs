// Static feature overview shown under the analysis card
use iced::{Color, Element, Font, Length};
use iced::widget::{Column, Container, Row, Text};
use crate::client::models::messages::Message;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const ACCENT: Color = Color::from_rgb(0.15, 0.39, 0.92);
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub static FEATURES: [(&str, &str); 4] = [
    (
        "🔍 Fraud Detection",
        "Identify fraudulent billing practices, duplicate claims, and suspicious provider behavior patterns.",
    ),
    (
        "💰 Waste Analysis",
        "Detect unnecessary procedures, over-utilization of services, and inefficient resource allocation.",
    ),
    (
        "⚠️ Abuse Prevention",
        "Monitor for abusive healthcare practices, inappropriate billing codes, and policy violations.",
    ),
    (
        "🤖 AI-Powered",
        "Leverage advanced AI algorithms to analyze healthcare text and identify potential FWA indicators.",
    ),
];

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(Color::WHITE),
        border: iced::Border {
            width: 2.0,
            color: ACCENT,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(10)
            .push(Text::new(title).font(BOLD_FONT).size(18))
            .push(Text::new(body).size(14).style(TEXT_SECONDARY)),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

/// Two-by-two grid of feature cards.
pub fn view<'a>() -> Element<'a, Message> {
    let mut grid = Column::new().spacing(20);
    for pair in FEATURES.chunks(2) {
        let mut row = Row::new().spacing(20);
        for (title, body) in pair {
            row = row.push(card(title, body));
        }
        grid = grid.push(row);
    }
    grid.into()
}

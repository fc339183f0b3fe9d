use iced::{Alignment, Color, Element, Font, Length};
use iced::widget::{Button, Column, Container, PickList, Row, Scrollable, Space, Text, TextInput};
use crate::client::config::HostType;
use crate::client::gui::views::{feature_cards, logger::logger_view};
use crate::client::gui::widgets::result_card;
use crate::client::models::app_state::FwaAppState;
use crate::client::models::messages::Message;

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn host_row(state: &FwaAppState) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Space::new(Length::Fill, Length::Fixed(0.0)));

    if state.selected_host == HostType::Manual {
        row = row.push(
            Container::new(
                TextInput::new("http://host:8000", &state.manual_host)
                    .on_input(Message::ManualHostChanged)
                    .width(Length::Fixed(260.0))
                    .padding(8)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );
    }

    row.push(Text::new("🌐").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
        .push(
            PickList::new(HostType::all(), Some(state.selected_host), Message::HostSelected)
                .placeholder("Select host")
                .width(Length::Fixed(120.0)),
        )
        .into()
}

pub fn view(state: &FwaAppState) -> Element<'_, Message> {
    let client = &state.client;
    let loading = client.is_loading();
    let submit_enabled = client.can_submit();

    let logger_bar = Container::new(logger_view(&state.logger))
        .width(Length::Fill)
        .padding([8, 12, 0, 12]);

    let title = Text::new("Healthcare FWA Detection")
        .size(40)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new("AI-powered analysis for Fraud, Waste, and Abuse detection in healthcare text")
        .size(18)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let input = Container::new(
        TextInput::new("Enter healthcare-related text for FWA analysis...", client.input())
            .on_input(Message::InputChanged)
            .on_submit(if submit_enabled { Message::Submit } else { Message::None })
            .width(Length::Fill)
            .padding(16)
            .size(14),
    )
    .style(iced::theme::Container::Custom(Box::new(input_appearance)));

    let submit_label = if loading { "Analyzing..." } else { "Analyze Text" };
    let mut submit_button = Button::new(Text::new(submit_label).font(BOLD_FONT).size(16))
        .padding([12, 32]);
    submit_button = if submit_enabled {
        submit_button.on_press(Message::Submit).style(iced::theme::Button::Primary)
    } else {
        submit_button.style(iced::theme::Button::Secondary)
    };

    let mut actions = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(submit_button);
    if loading {
        actions = actions
            .push(
                Button::new(Text::new("Cancel").size(16))
                    .on_press(Message::Cancel)
                    .style(iced::theme::Button::Text)
                    .padding([12, 16]),
            )
            .push(Text::new("⏳").font(EMOJI_FONT).size(16))
            .push(Text::new("Waiting for the analysis service...").size(14).style(ACCENT_COLOR));
    }

    let mut card_content = Column::new()
        .spacing(16)
        .padding(32)
        .push(Text::new("Analyze Healthcare Text").font(BOLD_FONT).size(20))
        .push(input)
        .push(actions);

    if let Some(result) = client.result() {
        card_content = card_content
            .push(Space::new(Length::Fill, Length::Fixed(8.0)))
            .push(result_card::view(result));
    }

    let card = Container::new(card_content)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let page = Column::new()
        .max_width(900.0)
        .spacing(24)
        .padding(20)
        .align_items(Alignment::Center)
        .push(
            Column::new()
                .spacing(10)
                .align_items(Alignment::Center)
                .push(title)
                .push(subtitle),
        )
        .push(card)
        .push(feature_cards::view());

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(logger_bar)
        .push(Container::new(host_row(state)).width(Length::Fill).padding([16, 20, 0, 20]))
        .push(
            Scrollable::new(Container::new(page).width(Length::Fill).center_x())
                .height(Length::Fill),
        );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}

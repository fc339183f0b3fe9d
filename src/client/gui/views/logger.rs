use iced::{Alignment, Element, Font, Length};
use iced::widget::{Button, Container, Row, Space, Text};
use crate::client::models::messages::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into() }
    }

    pub fn emoji(&self) -> &'static str {
        match self.level {
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
        }
    }

    pub fn color(&self) -> iced::Color {
        match self.level {
            LogLevel::Success => iced::Color::from_rgb(0.2, 0.8, 0.4),
            LogLevel::Error => iced::Color::from_rgb(1.0, 0.2, 0.2),
            LogLevel::Info => iced::Color::from_rgb(0.2, 0.6, 1.0),
            LogLevel::Warning => iced::Color::from_rgb(1.0, 0.8, 0.0),
        }
    }
}

/// Alert bar showing the latest log entry. Errors get Retry and Dismiss buttons.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    let Some(log) = messages.iter().next_back() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };
    let bg_color = log.color();

    let mut row = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(
            Text::new(log.emoji())
                .font(Font::with_name("Segoe UI Emoji"))
                .size(20)
                .style(iced::Color::WHITE),
        )
        .push(Text::new(&log.message).size(16).style(iced::Color::WHITE).width(Length::Fill));

    if log.level == LogLevel::Error {
        row = row
            .push(
                Button::new(Text::new("Retry").size(14))
                    .on_press(Message::Retry)
                    .style(iced::theme::Button::Secondary)
                    .padding([6, 12]),
            )
            .push(
                Button::new(Text::new("Dismiss").size(14))
                    .on_press(Message::DismissError)
                    .style(iced::theme::Button::Text)
                    .padding([6, 12]),
            );
    }

    Container::new(row)
        .padding([12, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(iced::Color::WHITE),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                },
            }
        })))
        .into()
}

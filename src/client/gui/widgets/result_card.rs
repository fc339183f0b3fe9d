use iced::{Color, Element, Font, Length};
use iced::widget::{Column, Container, Text};
use crate::client::models::messages::Message;
use crate::common::models::AnalysisResult;

const RESULT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const SUCCESS_BORDER: Color = Color::from_rgb(0.13, 0.77, 0.37);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn result_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(RESULT_BG)),
        text_color: Some(Color::from_rgb(0.85, 0.85, 0.9)),
        border: iced::Border {
            width: 2.0,
            color: SUCCESS_BORDER,
            radius: 6.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(result: &AnalysisResult) -> Element<'_, Message> {
    Column::new()
        .spacing(12)
        .push(Text::new("Analysis Result:").font(BOLD_FONT).size(18))
        .push(
            Container::new(Text::new(&result.analysis).size(14).font(Font::MONOSPACE))
                .padding(16)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(result_appearance))),
        )
        .into()
}

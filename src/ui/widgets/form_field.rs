//! Labeled form field: a caption above any input widget

use iced::widget::{Space, column, text};
use iced::{Element, Fill};

use crate::ui::theme::{self, MEDIUM_WEIGHT};

pub fn view<'a, Message: 'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let caption = text(label)
        .size(12)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    column![caption, Space::new().height(6), input.into()]
        .width(Fill)
        .into()
}

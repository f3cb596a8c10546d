//! Rating widget: a gold star followed by the numeric score

use iced::widget::{Space, row, svg, text};
use iced::{Alignment, Element};

use crate::ui::icons;
use crate::ui::theme::{self, MEDIUM_WEIGHT};

/// Score as shown on the card (`4.5` → "4.5", `3.0` → "3")
pub fn format_rating(rating: f32) -> String {
    rating.to_string()
}

pub fn view<'a, Message: 'a>(rating: f32) -> Element<'a, Message> {
    let star = svg(svg::Handle::from_memory(icons::STAR.as_bytes()))
        .width(14)
        .height(14)
        .style(|_theme, _status| svg::Style {
            color: Some(theme::STAR_GOLD),
        });

    let score = text(format_rating(rating))
        .size(13)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    row![star, Space::new().width(4), score]
        .align_y(Alignment::Center)
        .into()
}

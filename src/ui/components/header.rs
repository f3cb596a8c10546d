//! Header bar: application title plus display preferences

use iced::widget::{Space, container, pick_list, row, text, toggler};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Language, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

pub const HEADER_HEIGHT: f32 = 64.0;

pub fn view<'a>(dark_mode: bool, locale: Locale) -> Element<'a, Message> {
    let title = text(locale.get(Key::AppTitle)).size(22).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let dark_mode_toggle = toggler(dark_mode)
        .label(locale.get(Key::DarkMode))
        .on_toggle(Message::UpdateDarkMode)
        .text_size(13)
        .size(20);

    let language = pick_list(Language::all(), Some(locale.language), Message::UpdateLanguage)
        .style(theme::form_pick_list)
        .menu_style(theme::form_pick_list_menu)
        .padding([6, 10])
        .text_size(13);

    let content = row![
        title,
        Space::new().width(Fill),
        dark_mode_toggle,
        Space::new().width(16),
        language,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(0.0).left(24.0).right(24.0));

    container(content)
        .width(Fill)
        .height(HEADER_HEIGHT)
        .center_y(HEADER_HEIGHT)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface(theme))),
            border: iced::Border {
                width: 1.0,
                color: theme::border_color(theme),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

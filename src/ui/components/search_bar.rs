//! Search bar component
//!
//! Controlled inputs for the three library filters. Every value shown comes
//! from the current criteria and every edit is forwarded as a message.

use iced::widget::{Space, checkbox, container, row, svg, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::FilterCriteria;
use crate::i18n::{Key, Locale};
use crate::ui::components::genre_picker::{self, GenreChoice};
use crate::ui::theme;
use crate::ui::widgets::form_field;

/// Build the search bar component
pub fn view(criteria: &FilterCriteria, locale: Locale) -> Element<'_, Message> {
    let search_icon = svg(svg::Handle::from_memory(
        crate::ui::icons::SEARCH.as_bytes(),
    ))
    .width(16)
    .height(16)
    .style(|theme, _status| svg::Style {
        color: Some(theme::text_muted(theme)),
    });

    let input = text_input(locale.get(Key::SearchPlaceholder), &criteria.search_text)
        .on_input(Message::SearchTextChanged)
        .padding(Padding::new(10.0).left(0.0))
        .size(14)
        .style(|theme, _status| text_input::Style {
            background: iced::Background::Color(iced::Color::TRANSPARENT),
            border: iced::Border::default(),
            icon: theme::text_muted(theme),
            placeholder: theme::text_muted(theme),
            value: theme::text_primary(theme),
            selection: iced::Color {
                a: 0.4,
                ..theme::ACCENT
            },
        });

    let search_field = container(
        row![
            Space::new().width(14),
            search_icon,
            Space::new().width(10),
            input,
            Space::new().width(14),
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .style(|theme| container::Style {
        background: Some(iced::Background::Color(theme::input_bg(theme))),
        border: iced::Border {
            radius: 20.0.into(),
            width: 1.0,
            color: theme::border_color(theme),
        },
        ..Default::default()
    });

    let bookmarked = checkbox(criteria.bookmarked_only)
        .label(locale.get(Key::BookmarkedOnlyLabel))
        .on_toggle(Message::BookmarkedOnlyToggled)
        .text_size(13)
        .spacing(8)
        .style(theme::form_checkbox);

    let genre = genre_picker::view(
        genre_picker::choices(locale, true),
        GenreChoice::new(criteria.selected_genre, locale),
        |choice| Message::GenreSelected(choice.genre),
    );

    let text_column = form_field::view(locale.get(Key::SearchTextLabel), search_field);
    let genre_column =
        container(form_field::view(locale.get(Key::GenreFilterLabel), genre)).width(200);

    row![
        text_column,
        Space::new().width(20),
        container(bookmarked).padding(Padding::new(0.0).top(18.0)),
        Space::new().width(20),
        genre_column,
    ]
    .align_y(Alignment::Center)
    .width(Fill)
    .into()
}

//! Add-movie form component
//!
//! Renders the draft held in UI state. Each input emits a
//! `Message::DraftChanged`; the button emits `Message::SubmitDraft`.

use iced::widget::{Space, button, column, container, row, scrollable, svg, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::{DraftField, MovieDraft};
use crate::i18n::{Key, Locale};
use crate::ui::components::genre_picker::{self, GenreChoice};
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::form_field;

pub const PANEL_WIDTH: f32 = 320.0;

fn input<'a>(
    value: &'a str,
    placeholder: &'a str,
    on_input: fn(String) -> DraftField,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |value| Message::DraftChanged(on_input(value)))
        .padding([8, 10])
        .size(14)
        .style(theme::form_input)
        .into()
}

pub fn view(draft: &MovieDraft, locale: Locale) -> Element<'_, Message> {
    let heading = text(locale.get(Key::AddMovieTitle)).size(18).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let title = form_field::view(
        locale.get(Key::TitleLabel),
        input(&draft.title, "", DraftField::Title),
    );
    let subtitle = form_field::view(
        locale.get(Key::SubtitleLabel),
        input(&draft.subtitle, "", DraftField::Subtitle),
    );
    let image_path = form_field::view(
        locale.get(Key::ImageLabel),
        input(&draft.image_path, "images/poster.jpg", DraftField::ImagePath),
    );
    let storyline = form_field::view(
        locale.get(Key::StorylineLabel),
        input(&draft.storyline, "", DraftField::Storyline),
    );
    let rating = form_field::view(
        locale.get(Key::RatingLabel),
        input(&draft.rating, "0", DraftField::Rating),
    );
    let genre = form_field::view(
        locale.get(Key::GenreLabel),
        genre_picker::view(
            genre_picker::choices(locale, false),
            GenreChoice::new(Some(draft.genre), locale),
            |choice| Message::DraftChanged(DraftField::Genre(choice.genre.unwrap_or_default())),
        ),
    );

    let submit = button(
        row![
            svg(svg::Handle::from_memory(icons::PLUS.as_bytes()))
                .width(16)
                .height(16)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::Color::WHITE),
                }),
            Space::new().width(8),
            text(locale.get(Key::AddMovieButton)).size(14),
        ]
        .align_y(Alignment::Center),
    )
    .padding([10, 20])
    .style(theme::primary_button)
    .on_press(Message::SubmitDraft);

    let content = column![
        heading,
        Space::new().height(16),
        title,
        subtitle,
        image_path,
        storyline,
        rating,
        genre,
        Space::new().height(8),
        container(submit).width(Fill).center_x(Fill),
    ]
    .spacing(12)
    .padding(Padding::new(20.0));

    container(scrollable(content).style(theme::thin_scrollable))
        .width(PANEL_WIDTH)
        .height(Fill)
        .style(theme::form_panel)
        .into()
}

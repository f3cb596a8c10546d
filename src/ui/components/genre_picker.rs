//! Localized genre dropdown shared by the search bar and the add-movie form

use std::fmt;

use iced::Element;
use iced::widget::pick_list;

use crate::features::Genre;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// A dropdown entry: `None` stands for "any genre"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreChoice {
    pub genre: Option<Genre>,
    label: &'static str,
}

impl GenreChoice {
    pub fn new(genre: Option<Genre>, locale: Locale) -> Self {
        let key = genre.map_or(Key::GenreAll, |genre| genre.label_key());
        Self {
            genre,
            label: locale.get(key),
        }
    }
}

impl fmt::Display for GenreChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Dropdown entries in display order, optionally led by "any genre"
pub fn choices(locale: Locale, include_any: bool) -> Vec<GenreChoice> {
    let any = include_any.then(|| GenreChoice::new(None, locale));
    any.into_iter()
        .chain(
            Genre::all()
                .iter()
                .map(|genre| GenreChoice::new(Some(*genre), locale)),
        )
        .collect()
}

pub fn view<'a, Message: Clone + 'a>(
    options: Vec<GenreChoice>,
    selected: GenreChoice,
    on_select: impl Fn(GenreChoice) -> Message + 'a,
) -> Element<'a, Message> {
    pick_list(options, Some(selected), on_select)
        .style(theme::form_pick_list)
        .menu_style(theme::form_pick_list_menu)
        .padding([8, 12])
        .width(iced::Fill)
        .into()
}

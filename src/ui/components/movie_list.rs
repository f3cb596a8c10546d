//! Movie list component
//!
//! Lays out the filtered movies as a responsive grid of cards, in the
//! order the library hands them over.

use std::collections::HashMap;

use iced::widget::{Space, column, container, image, row, scrollable, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::features::Movie;
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::theme;
use crate::ui::widgets::movie_card::{self, CARD_WIDTH};

const CARD_SPACING: f32 = 20.0;
const ROW_SPACING: f32 = 20.0;

/// Calculate number of columns based on container width
fn calculate_columns(container_width: f32) -> usize {
    let columns = ((container_width + CARD_SPACING) / (CARD_WIDTH + CARD_SPACING)).floor() as usize;
    columns.max(1)
}

fn empty_state<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(15).style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    }))
    .width(Fill)
    .height(200)
    .center_x(Fill)
    .center_y(200)
    .into()
}

/// Create the movie grid
///
/// `movies` pairs every visible movie with its position in the library,
/// which keys the hover animation. `posters` maps image paths to
/// pre-loaded handles.
pub fn view<'a>(
    movies: Vec<(usize, &'a Movie)>,
    posters: &'a HashMap<String, image::Handle>,
    animations: &'a HoverAnimations<usize>,
    container_width: f32,
    loading: bool,
    locale: Locale,
) -> Element<'a, Message> {
    if movies.is_empty() {
        let key = if loading {
            Key::LoadingCatalog
        } else {
            Key::NoMoviesMatch
        };
        return empty_state(locale.get(key));
    }

    let columns = calculate_columns(container_width);
    let bookmarked_label = locale.get(Key::Bookmarked);

    let rows = movies.chunks(columns).map(|chunk| {
        let mut cards: Vec<Element<'a, Message>> = chunk
            .iter()
            .map(|&(position, movie)| {
                movie_card::view(
                    movie,
                    posters.get(&movie.image_path),
                    animations.progress(&position),
                    bookmarked_label,
                    Message::HoverMovie(Some(position)),
                    Message::HoverMovie(None),
                )
            })
            .collect();

        // Pad short rows so cards keep their column alignment
        for _ in chunk.len()..columns {
            cards.push(Space::new().width(CARD_WIDTH).into());
        }

        row(cards).spacing(CARD_SPACING).into()
    });

    let grid = column(rows.collect::<Vec<Element<'a, Message>>>())
        .spacing(ROW_SPACING)
        .padding(Padding::new(4.0).bottom(24.0));

    scrollable(grid)
        .style(theme::thin_scrollable)
        .width(Fill)
        .height(Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_containers_still_get_one_column() {
        assert_eq!(calculate_columns(0.0), 1);
        assert_eq!(calculate_columns(CARD_WIDTH - 1.0), 1);
    }

    #[test]
    fn columns_grow_with_width() {
        assert_eq!(calculate_columns(CARD_WIDTH * 2.0 + CARD_SPACING), 2);
        assert_eq!(calculate_columns(CARD_WIDTH * 3.0 + CARD_SPACING * 2.0), 3);
        assert_eq!(calculate_columns(CARD_WIDTH * 3.0 + CARD_SPACING), 2);
    }
}

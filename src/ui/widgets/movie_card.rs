//! Movie card widget
//!
//! Poster, title, subtitle, storyline and rating of a single movie.
//! Uses a generic Message type; the caller decides what hovering means.

use iced::widget::{Space, column, container, image, mouse_area, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::features::Movie;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::rating;

pub const CARD_WIDTH: f32 = 220.0;
const POSTER_HEIGHT: f32 = 140.0;
const POSTER_RADIUS: f32 = 8.0;

/// Poster image, or a film icon when there is no cached handle
fn poster<'a, Message: 'a>(poster_handle: Option<&'a image::Handle>) -> Element<'a, Message> {
    let inner: Element<'a, Message> = if let Some(handle) = poster_handle {
        image(handle.clone())
            .width(Fill)
            .height(Fill)
            .content_fit(iced::ContentFit::Cover)
            .border_radius(POSTER_RADIUS)
            .into()
    } else {
        svg(svg::Handle::from_memory(icons::FILM.as_bytes()))
            .width(40)
            .height(40)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into()
    };

    container(inner)
        .width(Fill)
        .height(POSTER_HEIGHT)
        .center_x(Fill)
        .center_y(POSTER_HEIGHT)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::placeholder_bg(theme))),
            border: iced::Border {
                radius: POSTER_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn bookmark_marker<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    let icon = svg(svg::Handle::from_memory(icons::BOOKMARK.as_bytes()))
        .width(12)
        .height(12)
        .style(|_theme, _status| svg::Style {
            color: Some(theme::ACCENT),
        });

    row![
        icon,
        Space::new().width(4),
        text(label).size(11).color(theme::ACCENT)
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Create a movie card element
///
/// # Arguments
/// * `movie` - The movie to render
/// * `poster_handle` - Pre-loaded poster image, if the movie has one
/// * `hover_progress` - Hover animation progress (0.0 to 1.0)
/// * `bookmarked_label` - Caption shown next to the bookmark marker
/// * `on_hover` / `on_unhover` - Messages for mouse enter and exit
pub fn view<'a, Message: Clone + 'a>(
    movie: &'a Movie,
    poster_handle: Option<&'a image::Handle>,
    hover_progress: f32,
    bookmarked_label: &'a str,
    on_hover: Message,
    on_unhover: Message,
) -> Element<'a, Message> {
    let title = text(&movie.title).size(16).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let subtitle = text(&movie.subtitle)
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let storyline = text(&movie.storyline)
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let footer: Element<'a, Message> = if movie.bookmarked {
        row![
            rating::view(movie.rating),
            Space::new().width(Fill),
            bookmark_marker(bookmarked_label),
        ]
        .align_y(Alignment::Center)
        .into()
    } else {
        rating::view(movie.rating)
    };

    let content = column![
        poster(poster_handle),
        Space::new().height(10),
        title,
        Space::new().height(2),
        subtitle,
        Space::new().height(8),
        storyline,
        Space::new().height(Fill),
        footer,
    ]
    .width(Fill)
    .height(Fill);

    let card = container(content)
        .width(CARD_WIDTH)
        .height(340)
        .padding(Padding::new(12.0))
        .style(move |theme| theme::movie_card(theme, hover_progress));

    mouse_area(card)
        .on_enter(on_hover)
        .on_exit(on_unhover)
        .into()
}

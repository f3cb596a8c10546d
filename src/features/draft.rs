//! Add-movie draft
//!
//! The form edits a [`MovieDraft`]; submitting turns the draft into a
//! [`Movie`] and resets every field to its initial value.

use super::movie::{Genre, Movie, coerce_rating};

/// Initial text of the rating field
const INITIAL_RATING: &str = "0";

/// In-progress movie held by the add-movie form
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub subtitle: String,
    pub image_path: String,
    pub storyline: String,
    /// Raw rating text as typed; coerced on submit
    pub rating: String,
    pub genre: Genre,
}

impl Default for MovieDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            image_path: String::new(),
            storyline: String::new(),
            rating: INITIAL_RATING.to_string(),
            genre: Genre::Action,
        }
    }
}

/// A single field edit coming from the form
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Title(String),
    Subtitle(String),
    ImagePath(String),
    Storyline(String),
    Rating(String),
    Genre(Genre),
}

impl MovieDraft {
    /// Apply a field edit. Returns `false` if the edit was rejected.
    ///
    /// Only rating edits can be rejected: the field accepts an optional
    /// leading `-` and digits with at most one decimal point, so it never
    /// holds non-numeric text.
    pub fn apply(&mut self, field: DraftField) -> bool {
        match field {
            DraftField::Title(value) => self.title = value,
            DraftField::Subtitle(value) => self.subtitle = value,
            DraftField::ImagePath(value) => self.image_path = value,
            DraftField::Storyline(value) => self.storyline = value,
            DraftField::Rating(value) => {
                if !is_rating_text(&value) {
                    return false;
                }
                self.rating = value;
            }
            DraftField::Genre(genre) => self.genre = genre,
        }
        true
    }

    /// Numeric rating, `0.0` when the field is empty
    pub fn rating_value(&self) -> f32 {
        coerce_rating(&self.rating)
    }

    /// Build the movie this draft describes. New movies are never bookmarked.
    pub fn to_movie(&self) -> Movie {
        Movie {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            storyline: self.storyline.clone(),
            image_path: self.image_path.clone(),
            rating: self.rating_value(),
            genre: self.genre,
            bookmarked: false,
        }
    }

    /// Hand out the current draft as a movie and reset the form
    pub fn submit(&mut self) -> Movie {
        let movie = self.to_movie();
        *self = Self::default();
        movie
    }
}

/// Digits with at most one `.`, optionally after a leading `-`
fn is_rating_text(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    unsigned.chars().all(|c| c.is_ascii_digit() || c == '.') && unsigned.matches('.').count() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MovieDraft {
        let mut draft = MovieDraft::default();
        draft.apply(DraftField::Title("Harry Potter I".into()));
        draft.apply(DraftField::Subtitle("Magical subtitle".into()));
        draft.apply(DraftField::ImagePath("images/harry.jpg".into()));
        draft.apply(DraftField::Storyline("The boy who lived.".into()));
        draft.apply(DraftField::Rating("3.5".into()));
        draft.apply(DraftField::Genre(Genre::Comedy));
        draft
    }

    #[test]
    fn initial_values() {
        let draft = MovieDraft::default();
        assert_eq!(draft.title, "");
        assert_eq!(draft.subtitle, "");
        assert_eq!(draft.image_path, "");
        assert_eq!(draft.storyline, "");
        assert_eq!(draft.rating_value(), 0.0);
        assert_eq!(draft.genre, Genre::Action);
    }

    #[test]
    fn edits_update_fields() {
        let draft = filled();
        assert_eq!(draft.title, "Harry Potter I");
        assert_eq!(draft.subtitle, "Magical subtitle");
        assert_eq!(draft.storyline, "The boy who lived.");
        assert_eq!(draft.rating_value(), 3.5);
        assert_eq!(draft.genre, Genre::Comedy);
    }

    #[test]
    fn submit_returns_draft_and_resets() {
        let mut draft = filled();
        let movie = draft.submit();

        assert_eq!(movie.title, "Harry Potter I");
        assert_eq!(movie.subtitle, "Magical subtitle");
        assert_eq!(movie.image_path, "images/harry.jpg");
        assert_eq!(movie.storyline, "The boy who lived.");
        assert_eq!(movie.rating, 3.5);
        assert_eq!(movie.genre, Genre::Comedy);
        assert!(!movie.bookmarked);

        assert_eq!(draft, MovieDraft::default());
    }

    #[test]
    fn submit_of_empty_draft_still_resets() {
        let mut draft = MovieDraft::default();
        let movie = draft.submit();
        assert_eq!(movie.title, "");
        assert_eq!(movie.rating, 0.0);
        assert_eq!(draft, MovieDraft::default());
    }

    #[test]
    fn to_movie_leaves_draft_untouched() {
        let draft = filled();
        let movie = draft.to_movie();
        assert_eq!(movie.title, draft.title);
        assert_ne!(draft, MovieDraft::default());
    }

    #[test]
    fn rating_rejects_non_numeric_text() {
        let mut draft = MovieDraft::default();
        assert!(draft.apply(DraftField::Rating("1.5".into())));
        assert!(!draft.apply(DraftField::Rating("1.5a".into())));
        assert!(!draft.apply(DraftField::Rating("1.5.".into())));
        assert_eq!(draft.rating, "1.5");
    }

    #[test]
    fn rating_accepts_partial_and_empty_input() {
        let mut draft = MovieDraft::default();
        assert!(draft.apply(DraftField::Rating("4.".into())));
        assert_eq!(draft.rating_value(), 4.0);
        assert!(draft.apply(DraftField::Rating(String::new())));
        assert_eq!(draft.rating_value(), 0.0);
    }

    #[test]
    fn rating_accepts_negative_input() {
        let mut draft = MovieDraft::default();
        assert!(draft.apply(DraftField::Rating("-".into())));
        assert_eq!(draft.rating, "-");
        assert_eq!(draft.rating_value(), 0.0);

        assert!(draft.apply(DraftField::Rating("-4.".into())));
        assert_eq!(draft.rating_value(), -4.0);

        assert!(draft.apply(DraftField::Rating("-1.5".into())));
        assert_eq!(draft.submit().rating, -1.5);

        assert!(!draft.apply(DraftField::Rating("--1".into())));
        assert!(!draft.apply(DraftField::Rating("1-".into())));
        assert_eq!(draft.rating, "0");
    }
}

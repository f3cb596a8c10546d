//! Movie records and genres
//!
//! A [`Movie`] is immutable once it enters the library. Catalog files use
//! camelCase keys (`imagePath`).

use serde::{Deserialize, Deserializer, Serialize};

use crate::i18n::Key;

/// Movie genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    #[default]
    Action,
    Comedy,
    Thriller,
}

impl Genre {
    /// All genres in display order
    pub fn all() -> &'static [Genre] {
        &[Genre::Action, Genre::Comedy, Genre::Thriller]
    }

    /// Stable lowercase code, as used in catalog files
    pub fn code(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Comedy => "comedy",
            Genre::Thriller => "thriller",
        }
    }

    /// Translation key for the genre's display name
    pub fn label_key(&self) -> Key {
        match self {
            Genre::Action => Key::GenreAction,
            Genre::Comedy => Key::GenreComedy,
            Genre::Thriller => Key::GenreThriller,
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub storyline: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: f32,
    pub genre: Genre,
    #[serde(default)]
    pub bookmarked: bool,
}

impl Movie {
    /// Case-insensitive substring match against title, subtitle or storyline.
    ///
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [&self.title, &self.subtitle, &self.storyline]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Coerce free-form rating text into a number.
///
/// Empty, unparsable and non-finite input all become `0.0`.
pub fn coerce_rating(input: &str) -> f32 {
    input
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Ratings arrive either as JSON numbers or as numeric strings (`"4.9"`)
fn deserialize_rating<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRating {
        Number(f32),
        Text(String),
    }

    Ok(match RawRating::deserialize(deserializer)? {
        RawRating::Number(value) => value,
        RawRating::Text(text) => coerce_rating(&text),
    })
}

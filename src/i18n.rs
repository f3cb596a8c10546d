//! Internationalization (i18n) support
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - pt.rs: Brazilian Portuguese translations

mod en;
mod pt;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    English,
    #[default]
    Portuguese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Português",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
        }
    }

    /// Parse a language code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|lang| lang.code() == code)
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::Portuguese, Language::English]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppTitle,

    // Search bar
    SearchTextLabel,
    SearchPlaceholder,
    BookmarkedOnlyLabel,
    GenreFilterLabel,
    GenreAll,

    // Genres
    GenreAction,
    GenreComedy,
    GenreThriller,

    // Movie list
    NoMoviesMatch,
    LoadingCatalog,
    Bookmarked,

    // Add movie form
    AddMovieTitle,
    TitleLabel,
    SubtitleLabel,
    ImageLabel,
    StorylineLabel,
    RatingLabel,
    GenreLabel,
    AddMovieButton,

    // Toasts
    MovieAdded,
    CatalogLoadFailed,
    SettingsSaveFailed,

    // Preferences
    DarkMode,
}

impl Key {
    /// Every key, used to check translation tables for gaps
    #[cfg(test)]
    pub const ALL: &'static [Key] = &[
        Key::AppTitle,
        Key::SearchTextLabel,
        Key::SearchPlaceholder,
        Key::BookmarkedOnlyLabel,
        Key::GenreFilterLabel,
        Key::GenreAll,
        Key::GenreAction,
        Key::GenreComedy,
        Key::GenreThriller,
        Key::NoMoviesMatch,
        Key::LoadingCatalog,
        Key::Bookmarked,
        Key::AddMovieTitle,
        Key::TitleLabel,
        Key::SubtitleLabel,
        Key::ImageLabel,
        Key::StorylineLabel,
        Key::RatingLabel,
        Key::GenreLabel,
        Key::AddMovieButton,
        Key::MovieAdded,
        Key::CatalogLoadFailed,
        Key::SettingsSaveFailed,
        Key::DarkMode,
    ];
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Portuguese => pt::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_translated() {
        for lang in Language::all() {
            for key in Key::ALL {
                assert_ne!(t(*lang, *key), "???", "{:?} missing for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn portuguese_labels() {
        let locale = Locale::new(Language::Portuguese);
        assert_eq!(locale.get(Key::AppTitle), "Movie Cards Library");
        assert_eq!(locale.get(Key::SearchTextLabel), "Inclui o texto");
        assert_eq!(locale.get(Key::BookmarkedOnlyLabel), "Mostrar somente favoritos");
        assert_eq!(locale.get(Key::GenreFilterLabel), "Filtrar por gênero");
        assert_eq!(locale.get(Key::AddMovieButton), "Adicionar filme");
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("zz"), None);
    }
}

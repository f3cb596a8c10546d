//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppTitle, "Movie Cards Library");

    // Search bar
    m.insert(Key::SearchTextLabel, "Includes the text");
    m.insert(Key::SearchPlaceholder, "Title, subtitle or storyline...");
    m.insert(Key::BookmarkedOnlyLabel, "Show bookmarked only");
    m.insert(Key::GenreFilterLabel, "Filter by genre");
    m.insert(Key::GenreAll, "All");

    // Genres
    m.insert(Key::GenreAction, "Action");
    m.insert(Key::GenreComedy, "Comedy");
    m.insert(Key::GenreThriller, "Thriller");

    // Movie list
    m.insert(Key::NoMoviesMatch, "No movies match the current filters");
    m.insert(Key::LoadingCatalog, "Loading catalog...");
    m.insert(Key::Bookmarked, "Bookmarked");

    // Add movie form
    m.insert(Key::AddMovieTitle, "New movie");
    m.insert(Key::TitleLabel, "Title");
    m.insert(Key::SubtitleLabel, "Subtitle");
    m.insert(Key::ImageLabel, "Image");
    m.insert(Key::StorylineLabel, "Storyline");
    m.insert(Key::RatingLabel, "Rating");
    m.insert(Key::GenreLabel, "Genre");
    m.insert(Key::AddMovieButton, "Add movie");

    // Toasts
    m.insert(Key::MovieAdded, "Movie added");
    m.insert(
        Key::CatalogLoadFailed,
        "Could not load the catalog, using the built-in one",
    );
    m.insert(Key::SettingsSaveFailed, "Could not save preferences");

    // Preferences
    m.insert(Key::DarkMode, "Dark mode");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}

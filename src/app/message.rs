//! Application messages

use iced::Size;

use crate::features::{DraftField, Genre, Movie};
use crate::i18n::Language;

#[derive(Debug, Clone)]
pub enum Message {
    // Seed catalog
    CatalogLoaded(Vec<Movie>),
    CatalogFailed(String),

    // Library filters
    SearchTextChanged(String),
    BookmarkedOnlyToggled(bool),
    GenreSelected(Option<Genre>),

    // Add-movie form
    DraftChanged(DraftField),
    SubmitDraft,

    // Cards and window
    /// Card under the cursor, keyed by library position
    HoverMovie(Option<usize>),
    AnimationTick,
    WindowResized(Size),

    // Toasts
    ShowErrorToast(String),
    /// Hide the toast if it is still the one with this id
    HideToast(u64),

    // Settings
    UpdateDarkMode(bool),
    UpdateLanguage(Language),
    SaveSettings,
}

//! Library seeding and filter handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::catalog;
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    /// Handle seed catalog and filter messages
    pub fn handle_library(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CatalogLoaded(movies) => {
                if self.library.catalog.seed(movies.clone()) {
                    tracing::info!("Library seeded with {} movies", movies.len());
                    self.ui.cache_posters(self.library.catalog.movies());
                } else {
                    tracing::warn!("Library already seeded, ignoring {} movies", movies.len());
                }
                Some(Task::none())
            }

            Message::CatalogFailed(error) => {
                tracing::warn!("Failed to load catalog, using built-in one: {}", error);
                self.library.catalog.seed(catalog::builtin_catalog());
                self.ui.cache_posters(self.library.catalog.movies());
                let text = self.core.locale.get(Key::CatalogLoadFailed);
                Some(self.show_toast(Toast::warning(text)))
            }

            Message::SearchTextChanged(text) => {
                tracing::debug!("Search text: {:?}", text);
                self.library.catalog.set_search_text(text.as_str());
                Some(Task::none())
            }

            Message::BookmarkedOnlyToggled(enabled) => {
                tracing::debug!("Bookmarked only: {}", enabled);
                self.library.catalog.set_bookmarked_only(*enabled);
                Some(Task::none())
            }

            Message::GenreSelected(genre) => {
                tracing::debug!("Genre filter: {:?}", genre);
                self.library.catalog.set_selected_genre(*genre);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

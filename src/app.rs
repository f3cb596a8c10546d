//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use std::path::PathBuf;

use iced::{Task, Theme};

use crate::features::Settings;
use crate::features::catalog;
use crate::i18n::Key;
pub use message::Message;
pub use state::{App, CoreState, LibraryState, UiState};

impl App {
    /// Create new application instance
    ///
    /// `cli_catalog` is the catalog file given on the command line, if any.
    pub fn new(cli_catalog: Option<PathBuf>) -> (Self, Task<Message>) {
        // 1. Load settings first so the locale is right from the first frame
        let settings = Settings::load();
        let catalog_path =
            catalog::resolve_catalog_path(cli_catalog, settings.catalog.path.as_deref());

        // 2. Initialize sub-states
        let app = Self::from_settings(settings);
        tracing::info!(
            "Starting with language {} and dark mode {}",
            app.core.locale.language,
            app.core.settings.display.dark_mode
        );

        // 3. Seed the library in the background
        let seed_task = Task::perform(helpers::load_seed_catalog(catalog_path), |result| {
            match result {
                Ok(movies) => Message::CatalogLoaded(movies),
                Err(e) => Message::CatalogFailed(e),
            }
        });

        (app, seed_task)
    }

    /// Build the state without touching the filesystem
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            core: CoreState::new(settings),
            library: LibraryState::default(),
            ui: UiState::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        self.core.locale.get(Key::AppTitle).to_string()
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([animation_sub, resize_sub])
    }
}

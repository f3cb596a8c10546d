//! Application state definitions

use std::collections::HashMap;
use std::path::Path;

use iced::widget::image;

use crate::features::{Movie, MovieDraft, MovieLibrary, Settings};
use crate::i18n::Locale;
use crate::ui::animation::HoverAnimations;
use crate::ui::widgets::Toast;

/// Window width assumed until the first resize event arrives
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Main application state
pub struct App {
    /// Settings and locale
    pub core: CoreState,
    /// The movie library and its filters
    pub library: LibraryState,
    /// Form draft, animations, toasts
    pub ui: UiState,
}

pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let locale = Locale::new(settings.display.language());
        Self { settings, locale }
    }
}

#[derive(Default)]
pub struct LibraryState {
    pub catalog: MovieLibrary,
}

pub struct UiState {
    pub draft: MovieDraft,
    pub card_animations: HoverAnimations<usize>,
    /// Poster image handle cache: image path -> image::Handle
    pub posters: HashMap<String, image::Handle>,
    pub toast: Option<Toast>,
    /// Incremented for every toast shown, so stale hide timers are ignored
    pub toast_id: u64,
    pub window_width: f32,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            draft: MovieDraft::default(),
            card_animations: HoverAnimations::new(),
            posters: HashMap::new(),
            toast: None,
            toast_id: 0,
            window_width: DEFAULT_WINDOW_WIDTH,
        }
    }

    pub fn has_active_animations(&self) -> bool {
        self.card_animations.is_animating()
    }

    /// Load handles for posters that point at local files.
    ///
    /// Paths that are not a readable file stay uncached and the card shows
    /// its placeholder.
    pub fn cache_posters(&mut self, movies: &[Movie]) {
        for movie in movies {
            if movie.image_path.is_empty() || self.posters.contains_key(&movie.image_path) {
                continue;
            }
            let path = Path::new(&movie.image_path);
            if path.is_file() {
                tracing::debug!("Caching poster {}", movie.image_path);
                self.posters
                    .insert(movie.image_path.clone(), image::Handle::from_path(path));
            }
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

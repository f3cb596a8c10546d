//! Message update handlers - thin dispatcher delegating to submodules

mod add_movie;
mod library;
mod settings;
mod toast;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_library(&message) {
            return task;
        }
        if let Some(task) = self.handle_add_movie(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }
        if let Some(task) = self.handle_toast(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }

        Task::none()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::app::App;
    use crate::features::{Genre, Movie, Settings};

    pub fn movie(title: &str, genre: Genre, bookmarked: bool) -> Movie {
        Movie {
            title: title.to_string(),
            subtitle: String::new(),
            storyline: String::new(),
            image_path: String::new(),
            rating: 0.0,
            genre,
            bookmarked,
        }
    }

    /// App with default settings and no catalog loaded yet
    pub fn app() -> App {
        App::from_settings(Settings::default())
    }
}

//! Add-movie form handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    /// Handle draft edits and submission
    pub fn handle_add_movie(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DraftChanged(field) => {
                if !self.ui.draft.apply(field.clone()) {
                    tracing::debug!("Rejected draft edit: {:?}", field);
                }
                Some(Task::none())
            }

            Message::SubmitDraft => {
                self.library.catalog.add_movie(self.ui.draft.submit());
                if let Some(added) = self.library.catalog.movies().last() {
                    tracing::info!("Added movie: {} ({})", added.title, added.genre.code());
                    self.ui.cache_posters(std::slice::from_ref(added));
                }
                tracing::debug!("Library now holds {} movies", self.library.catalog.len());
                let text = self.core.locale.get(Key::MovieAdded);
                Some(self.show_toast(Toast::success(text)))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::Message;
    use crate::app::update::test_support::{app, movie};
    use crate::features::{DraftField, Genre, MovieDraft};

    #[test]
    fn submit_appends_and_resets() {
        let mut app = app();
        let _ = app.update(Message::CatalogLoaded(vec![movie(
            "Kingsglaive",
            Genre::Action,
            true,
        )]));

        for field in [
            DraftField::Title("Paprika".to_string()),
            DraftField::Subtitle("Dream detective".to_string()),
            DraftField::ImagePath("images/paprika.jpg".to_string()),
            DraftField::Storyline("A device to enter dreams is stolen".to_string()),
            DraftField::Rating("4.5".to_string()),
            DraftField::Genre(Genre::Thriller),
        ] {
            let _ = app.update(Message::DraftChanged(field));
        }
        let _ = app.update(Message::SubmitDraft);

        let movies = app.library.catalog.movies();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Kingsglaive");

        let added = &movies[1];
        assert_eq!(added.title, "Paprika");
        assert_eq!(added.subtitle, "Dream detective");
        assert_eq!(added.image_path, "images/paprika.jpg");
        assert_eq!(added.rating, 4.5);
        assert_eq!(added.genre, Genre::Thriller);
        assert!(!added.bookmarked);

        assert_eq!(app.ui.draft, MovieDraft::default());
        assert!(app.ui.toast.is_some());
        assert!(app.ui.posters.is_empty());
    }

    #[test]
    fn submitted_poster_file_is_cached() {
        let path = std::env::temp_dir().join(format!(
            "movie-cards-submitted-poster-{}.png",
            std::process::id()
        ));
        std::fs::write(&path, b"poster").unwrap();
        let image_path = path.to_string_lossy().into_owned();

        let mut app = app();
        let _ = app.update(Message::DraftChanged(DraftField::ImagePath(image_path.clone())));
        let _ = app.update(Message::SubmitDraft);

        assert!(app.ui.posters.contains_key(&image_path));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn empty_draft_submits_defaults() {
        let mut app = app();
        let _ = app.update(Message::SubmitDraft);

        let movies = app.library.catalog.movies();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "");
        assert_eq!(movies[0].rating, 0.0);
        assert_eq!(movies[0].genre, Genre::Action);
    }

    #[test]
    fn invalid_rating_edit_keeps_previous_text() {
        let mut app = app();
        let _ = app.update(Message::DraftChanged(DraftField::Rating("3".to_string())));
        let _ = app.update(Message::DraftChanged(DraftField::Rating("3x".to_string())));
        assert_eq!(app.ui.draft.rating, "3");
    }

    #[test]
    fn added_movie_respects_active_filters() {
        let mut app = app();
        let _ = app.update(Message::BookmarkedOnlyToggled(true));
        let _ = app.update(Message::DraftChanged(DraftField::Title("Paprika".to_string())));
        let _ = app.update(Message::SubmitDraft);

        assert_eq!(app.library.catalog.len(), 1);
        assert!(app.library.catalog.visible().is_empty());
    }
}

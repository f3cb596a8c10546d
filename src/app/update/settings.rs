//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::{Key, Locale};

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                tracing::info!("Dark mode: {}", enabled);
                Some(Task::done(Message::SaveSettings))
            }

            Message::UpdateLanguage(language) => {
                self.core.settings.display.language = language.code().to_string();
                self.core.locale = Locale::new(*language);
                tracing::info!("Language changed to: {}", language.code());
                Some(Task::done(Message::SaveSettings))
            }

            Message::SaveSettings => {
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                    let text = self.core.locale.get(Key::SettingsSaveFailed).to_string();
                    return Some(Task::done(Message::ShowErrorToast(text)));
                }
                tracing::info!("Settings saved successfully");
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::Message;
    use crate::app::update::test_support::app;
    use crate::i18n::{Key, Language};

    #[test]
    fn dark_mode_switches_theme() {
        let mut app = app();
        let _ = app.update(Message::UpdateDarkMode(false));
        assert!(!app.core.settings.display.dark_mode);
        assert_eq!(app.theme(), iced::Theme::Light);
    }

    #[test]
    fn language_updates_locale_and_settings() {
        let mut app = app();
        let _ = app.update(Message::UpdateLanguage(Language::English));
        assert_eq!(app.core.settings.display.language, "en");
        assert_eq!(app.core.locale.get(Key::GenreAll), "All");
        assert_eq!(app.title(), "Movie Cards Library");
    }
}

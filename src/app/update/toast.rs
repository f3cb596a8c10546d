//! Toast handlers

use std::time::Duration;

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::{Toast, ToastStyle};

const TOAST_DURATION: Duration = Duration::from_secs(3);
const ERROR_TOAST_DURATION: Duration = Duration::from_secs(4);

impl App {
    /// Show a toast and schedule its auto-hide
    pub(super) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        let duration = match toast.style {
            ToastStyle::Success => TOAST_DURATION,
            ToastStyle::Warning | ToastStyle::Error => ERROR_TOAST_DURATION,
        };
        self.ui.toast_id += 1;
        self.ui.toast = Some(toast);

        let id = self.ui.toast_id;
        Task::perform(helpers::toast_delay(duration), move |_| {
            Message::HideToast(id)
        })
    }

    pub fn handle_toast(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ShowErrorToast(text) => Some(self.show_toast(Toast::error(text.clone()))),

            Message::HideToast(id) => {
                if *id == self.ui.toast_id {
                    self.ui.toast = None;
                }
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
    use crate::ui::widgets::ToastStyle;

    #[test]
    fn stale_hide_keeps_newer_toast() {
        let mut app = app();
        let _ = app.update(Message::ShowErrorToast("first".to_string()));
        let first_id = app.ui.toast_id;
        let _ = app.update(Message::ShowErrorToast("second".to_string()));

        let _ = app.update(Message::HideToast(first_id));
        assert_eq!(
            app.ui.toast.as_ref().map(|toast| toast.message.as_str()),
            Some("second")
        );

        let _ = app.update(Message::HideToast(app.ui.toast_id));
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn error_toast_uses_error_style() {
        let mut app = app();
        let _ = app.update(Message::ShowErrorToast("save failed".to_string()));
        assert!(matches!(
            app.ui.toast.as_ref().map(|toast| toast.style),
            Some(ToastStyle::Error)
        ));
    }
}

//! Hover, animation frame and resize handlers

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::HoverMovie(position) => {
                self.ui.card_animations.set_hovered(*position);
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.ui.card_animations.tick(Instant::now());
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                self.ui.window_width = size.width;
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

    #[test]
    fn hover_moves_between_cards() {
        let mut app = app();
        let _ = app.update(Message::HoverMovie(Some(2)));
        assert_eq!(app.ui.card_animations.hovered(), Some(&2));
        assert!(app.ui.has_active_animations());

        let _ = app.update(Message::HoverMovie(None));
        assert!(app.ui.card_animations.hovered().is_none());
    }

    #[test]
    fn resize_updates_width() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(iced::Size::new(900.0, 600.0)));
        assert_eq!(app.ui.window_width, 900.0);
    }
}

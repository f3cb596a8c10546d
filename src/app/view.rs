//! Application view rendering

use iced::widget::{Space, column, container, row, stack};
use iced::{Alignment, Element, Fill, Padding};

use super::App;
use super::message::Message;
use crate::ui::components::{add_movie_form, header, movie_list, search_bar};
use crate::ui::{theme, widgets};

/// Outer padding around the library area
const CONTENT_PADDING: f32 = 24.0;
const PANEL_GAP: f32 = 24.0;

impl App {
    /// Width left for the card grid once the form panel and padding are taken
    fn list_width(&self) -> f32 {
        (self.ui.window_width - add_movie_form::PANEL_WIDTH - PANEL_GAP - CONTENT_PADDING * 2.0)
            .max(0.0)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let catalog = &self.library.catalog;

        let list = movie_list::view(
            catalog.visible(),
            &self.ui.posters,
            &self.ui.card_animations,
            self.list_width(),
            !catalog.is_seeded() && catalog.is_empty(),
            locale,
        );

        let library_column = column![
            search_bar::view(catalog.criteria(), locale),
            Space::new().height(20),
            list,
        ]
        .width(Fill)
        .height(Fill);

        let body = row![
            library_column,
            Space::new().width(PANEL_GAP),
            add_movie_form::view(&self.ui.draft, locale),
        ]
        .padding(Padding::new(CONTENT_PADDING))
        .width(Fill)
        .height(Fill);

        let main_layout = container(column![
            header::view(self.core.settings.display.dark_mode, locale),
            body,
        ])
        .width(Fill)
        .height(Fill)
        .style(theme::main_content);

        // Toast overlay (empty space if nothing to show)
        let toast_overlay: Element<'_, Message> = if let Some(toast) = &self.ui.toast {
            container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        // Always use consistent stack structure to preserve scroll position
        stack![main_layout, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}

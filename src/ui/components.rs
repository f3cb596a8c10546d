//! UI components - application-specific pieces wired to `crate::app::Message`
//!
//! Components compose widgets (`crate::ui::widgets`) and read application
//! state; widgets stay generic over the message type.

pub mod add_movie_form;
pub mod genre_picker;
pub mod header;
pub mod movie_list;
pub mod search_bar;

//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets use generic Message types and never import `crate::app`.
//! Components (`crate::ui::components`) wire them to application messages.

pub mod form_field;
pub mod movie_card;
pub mod rating;
mod toast;

pub use toast::{Toast, ToastStyle, view_toast};

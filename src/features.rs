//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod catalog;
pub mod draft;
pub mod library;
pub mod movie;
pub mod settings;

pub use draft::{DraftField, MovieDraft};
pub use library::{FilterCriteria, MovieLibrary};
pub use movie::{Genre, Movie};
pub use settings::Settings;

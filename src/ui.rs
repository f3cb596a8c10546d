//! UI module for the movie catalog
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable pieces without business logic
//! - **Components** (`components`): Application-specific UI with Message handling
//! - **Theme** (`theme`): Palette and style functions for both modes

pub mod animation;
pub mod components;
pub mod icons;
pub mod theme;
pub mod widgets;

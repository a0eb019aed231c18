//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the form and submission list using ratatui and
//! maps keyboard input onto the application's controllers.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;

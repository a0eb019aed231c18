//! Infrastructure layer providing external service integrations.
//!
//! This module wraps system-level services the form talks to, currently
//! only the clipboard.

pub mod clipboard;

pub use clipboard::*;

//! Shared test utilities
//!
//! - TUI terminal testing helpers
//! - Key-driven input helpers

pub mod keys;
pub mod terminal;

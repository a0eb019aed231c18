//! Integration tests for the signup form
//!
//! These tests drive the application through key events and check both
//! the resulting state and what ends up on screen.

#[path = "../common/mod.rs"]
pub mod common;

pub mod form_flow;
pub mod rendering;

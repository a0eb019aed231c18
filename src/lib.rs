//! Signup form library
//!
//! A terminal form with three validated fields and an in-memory list of
//! accepted submissions, built in Rust.

pub mod config;
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
pub use config::Config;

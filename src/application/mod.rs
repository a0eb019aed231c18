//! Application layer managing form state and user workflows.
//!
//! This module sits between the domain layer and the presentation layer,
//! holding the draft, error map and submission list and the controllers
//! that change them.

pub mod state;

pub use state::*;

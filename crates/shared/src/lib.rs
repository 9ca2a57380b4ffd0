//! Shared data model and canvas geometry engine for the note wall.
//!
//! Everything in here is plain math and state (no DOM, no async) so the
//! frontend can drive it from event handlers and the tests can drive it
//! directly.

pub mod layout;
pub mod models;
pub mod radar;
pub mod viewport;

//! Test utilities
//!
//! Test fixtures for unit and end-to-end tests. The production repository is
//! already in-memory, so tests construct it directly instead of mocking the
//! port trait.

pub mod fixtures;

pub use fixtures::*;

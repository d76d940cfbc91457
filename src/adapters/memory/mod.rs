//! In-memory adapter
//!
//! The in-memory store backing the API. There is no persistence; the
//! collection is rebuilt from the seed set on every process start.

pub mod villa_repo;

pub use villa_repo::InMemoryVillaRepository;

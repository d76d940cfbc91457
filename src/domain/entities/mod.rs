//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod villa;

pub use villa::{NewVilla, Villa, VillaId, MAX_NAME_LEN};

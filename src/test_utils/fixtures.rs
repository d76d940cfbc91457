//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Villa, VillaId};

/// Create a test villa with default values
pub fn test_villa() -> Villa {
    Villa {
        id: VillaId(1),
        name: "Vista a la playa".to_string(),
        occupants: 3,
        area: 50,
    }
}

/// Create a test villa with a specific id and name
pub fn test_villa_named(id: i32, name: &str) -> Villa {
    Villa {
        id: VillaId(id),
        name: name.to_string(),
        occupants: 2,
        area: 60,
    }
}

//! Villa domain entity
//!
//! Represents a villa record managed through the API.

use serde::{Deserialize, Serialize};

/// Unique identifier for a villa
///
/// Assigned by the store on insertion; always positive once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VillaId(pub i32);

impl From<i32> for VillaId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VillaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum allowed length of a villa name, in characters
pub const MAX_NAME_LEN: usize = 30;

/// A villa record
///
/// Also the wire shape exchanged over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Villa {
    pub id: VillaId,
    pub name: String,
    pub occupants: i32,
    /// Area in square meters
    pub area: i32,
}

/// Input for creating a villa; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewVilla {
    pub name: String,
    pub occupants: i32,
    pub area: i32,
}

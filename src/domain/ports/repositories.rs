//! Repository port traits
//!
//! These traits define the interface for the villa data source.
//! Implementations are provided by adapters (currently the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{NewVilla, Villa, VillaId};
use crate::error::DomainError;

/// Repository for Villa records
#[async_trait]
pub trait VillaRepository: Send + Sync {
    /// List all villas in insertion order
    async fn list(&self) -> Result<Vec<Villa>, DomainError>;

    /// Find a villa by id (first match)
    async fn find_by_id(&self, id: VillaId) -> Result<Option<Villa>, DomainError>;

    /// Find a villa whose name matches case-insensitively
    async fn find_by_name(&self, name: &str) -> Result<Option<Villa>, DomainError>;

    /// Insert a new villa, assigning the next id: max existing id + 1, or 1
    /// when the store is empty.
    ///
    /// Fails with `DomainError::Validation` when another villa already carries
    /// the same name (case-insensitive). The uniqueness check and the append
    /// run inside one write-lock critical section so concurrent creates can
    /// neither duplicate a name nor compute the same id.
    async fn insert(&self, villa: NewVilla) -> Result<Villa, DomainError>;

    /// Overwrite name, occupants and area of the villa with the given id
    async fn update(&self, villa: &Villa) -> Result<(), DomainError>;

    /// Remove the villa with the given id
    async fn remove(&self, id: VillaId) -> Result<(), DomainError>;
}

//! In-memory villa repository
//!
//! Holds the authoritative villa collection in insertion order behind a
//! `RwLock`. All lookups are linear scans by id; there is no index structure.
//! Read-modify-write sequences (insert, update, remove) each run under one
//! write-lock critical section.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::{NewVilla, Villa, VillaId};
use crate::domain::ports::VillaRepository;
use crate::error::DomainError;

#[derive(Default)]
pub struct InMemoryVillaRepository {
    villas: RwLock<Vec<Villa>>,
}

impl InMemoryVillaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the fixed startup records
    pub fn seeded() -> Self {
        Self::new()
            .with_villa(Villa {
                id: VillaId(1),
                name: "Vista a la Piscina".to_string(),
                occupants: 3,
                area: 50,
            })
            .with_villa(Villa {
                id: VillaId(2),
                name: "Vista a la Playa".to_string(),
                occupants: 5,
                area: 80,
            })
    }

    /// Pre-populate with a villa
    pub fn with_villa(self, villa: Villa) -> Self {
        {
            let mut villas = self.villas.write().expect("villa store lock poisoned");
            villas.push(villa);
        }
        self
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Villa>>, DomainError> {
        self.villas
            .read()
            .map_err(|_| DomainError::Internal("villa store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Villa>>, DomainError> {
        self.villas
            .write()
            .map_err(|_| DomainError::Internal("villa store lock poisoned".to_string()))
    }
}

#[async_trait]
impl VillaRepository for InMemoryVillaRepository {
    async fn list(&self) -> Result<Vec<Villa>, DomainError> {
        let villas = self.read()?;
        Ok(villas.clone())
    }

    async fn find_by_id(&self, id: VillaId) -> Result<Option<Villa>, DomainError> {
        let villas = self.read()?;
        Ok(villas.iter().find(|v| v.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Villa>, DomainError> {
        let needle = name.to_lowercase();
        let villas = self.read()?;
        Ok(villas
            .iter()
            .find(|v| v.name.to_lowercase() == needle)
            .cloned())
    }

    async fn insert(&self, new_villa: NewVilla) -> Result<Villa, DomainError> {
        let mut villas = self.write()?;

        // Re-check uniqueness under the write lock: the service-level check
        // and this insert are separate lock acquisitions.
        let needle = new_villa.name.to_lowercase();
        if villas.iter().any(|v| v.name.to_lowercase() == needle) {
            return Err(DomainError::Validation(format!(
                "a villa named '{}' already exists",
                new_villa.name
            )));
        }

        let next_id = villas.iter().map(|v| v.id.0).max().unwrap_or(0) + 1;
        let villa = Villa {
            id: VillaId(next_id),
            name: new_villa.name,
            occupants: new_villa.occupants,
            area: new_villa.area,
        };
        villas.push(villa.clone());

        Ok(villa)
    }

    async fn update(&self, villa: &Villa) -> Result<(), DomainError> {
        let mut villas = self.write()?;
        match villas.iter_mut().find(|v| v.id == villa.id) {
            Some(existing) => {
                existing.name = villa.name.clone();
                existing.occupants = villa.occupants;
                existing.area = villa.area;
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Villa {} not found",
                villa.id
            ))),
        }
    }

    async fn remove(&self, id: VillaId) -> Result<(), DomainError> {
        let mut villas = self.write()?;
        match villas.iter().position(|v| v.id == id) {
            Some(index) => {
                villas.remove(index);
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("Villa {} not found", id))),
        }
    }
}

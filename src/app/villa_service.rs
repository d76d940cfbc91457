//! Villa service
//!
//! Validation and orchestration for the villa CRUD operations. Generic over
//! the repository so tests can substitute a differently seeded store.

use std::sync::Arc;

use crate::domain::entities::{NewVilla, Villa, VillaId, MAX_NAME_LEN};
use crate::domain::ports::VillaRepository;
use crate::error::AppError;

pub struct VillaService<R: VillaRepository> {
    villas: Arc<R>,
}

impl<R: VillaRepository> VillaService<R> {
    pub fn new(villas: Arc<R>) -> Self {
        Self { villas }
    }

    /// List the full collection, unfiltered and unpaged.
    pub async fn list(&self) -> Result<Vec<Villa>, AppError> {
        Ok(self.villas.list().await?)
    }

    /// Get a villa by id. Id 0 is rejected before the store is consulted.
    pub async fn get(&self, id: VillaId) -> Result<Villa, AppError> {
        if id.0 == 0 {
            return Err(AppError::BadRequest("id must not be 0".to_string()));
        }
        self.villas
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Villa {} not found", id)))
    }

    /// Create a villa.
    ///
    /// `requested_id` is whatever the client put in the body. Ids are assigned
    /// by the store, so a nonzero value is rejected with an internal error
    /// (surfaced as 500, matching the API's published contract).
    pub async fn create(&self, requested_id: i32, villa: NewVilla) -> Result<Villa, AppError> {
        if villa.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        if villa.name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::BadRequest(format!(
                "name must be at most {} characters",
                MAX_NAME_LEN
            )));
        }
        if self.villas.find_by_name(&villa.name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "a villa named '{}' already exists",
                villa.name
            )));
        }
        if requested_id != 0 {
            return Err(AppError::Internal(
                "villa ids are assigned by the store".to_string(),
            ));
        }

        Ok(self.villas.insert(villa).await?)
    }

    /// Overwrite an existing villa. The path id must match the body id; the
    /// name is not re-checked for uniqueness on update.
    pub async fn update(&self, id: VillaId, villa: Villa) -> Result<(), AppError> {
        if id != villa.id {
            return Err(AppError::BadRequest(format!(
                "path id {} does not match body id {}",
                id, villa.id
            )));
        }
        self.villas.update(&villa).await?;
        Ok(())
    }

    /// Delete a villa by id. Id 0 is rejected before the store is consulted.
    pub async fn delete(&self, id: VillaId) -> Result<(), AppError> {
        if id.0 == 0 {
            return Err(AppError::BadRequest("id must not be 0".to_string()));
        }
        self.villas.remove(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryVillaRepository;
    use crate::error::DomainError;
    use crate::test_utils::{test_villa, test_villa_named};

    fn service_with(repo: InMemoryVillaRepository) -> VillaService<InMemoryVillaRepository> {
        VillaService::new(Arc::new(repo))
    }

    fn new_villa(name: &str) -> NewVilla {
        NewVilla {
            name: name.to_string(),
            occupants: 2,
            area: 60,
        }
    }

    #[tokio::test]
    async fn get_with_zero_id_is_bad_request() {
        let service = service_with(InMemoryVillaRepository::new());
        let result = service.get(VillaId(0)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let service = service_with(InMemoryVillaRepository::new());
        let result = service.get(VillaId(42)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_returns_the_matching_villa() {
        let service =
            service_with(InMemoryVillaRepository::new().with_villa(test_villa()));
        let villa = service.get(VillaId(1)).await.unwrap();
        assert_eq!(villa.name, "Vista a la playa");
    }

    #[tokio::test]
    async fn create_rejects_empty_name() {
        let service = service_with(InMemoryVillaRepository::new());
        let result = service.create(0, new_villa("   ")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn create_rejects_name_over_thirty_chars() {
        let service = service_with(InMemoryVillaRepository::new());
        let result = service.create(0, new_villa(&"v".repeat(31))).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn create_accepts_name_of_exactly_thirty_chars() {
        let service = service_with(InMemoryVillaRepository::new());
        let villa = service.create(0, new_villa(&"v".repeat(30))).await.unwrap();
        assert_eq!(villa.id, VillaId(1));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name_case_insensitive() {
        let service =
            service_with(InMemoryVillaRepository::new().with_villa(test_villa()));
        let result = service.create(0, new_villa("VISTA A LA PLAYA")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn create_rejects_client_supplied_id() {
        let service = service_with(InMemoryVillaRepository::new());
        let result = service.create(7, new_villa("Vista al lago")).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn create_assigns_next_id() {
        let service =
            service_with(InMemoryVillaRepository::new().with_villa(test_villa_named(3, "Tres")));
        let villa = service.create(0, new_villa("Cuatro")).await.unwrap();
        assert_eq!(villa.id, VillaId(4));

        let fetched = service.get(VillaId(4)).await.unwrap();
        assert_eq!(fetched.name, "Cuatro");
    }

    #[tokio::test]
    async fn update_with_mismatched_id_is_bad_request() {
        let service =
            service_with(InMemoryVillaRepository::new().with_villa(test_villa()));
        let result = service
            .update(VillaId(1), test_villa_named(2, "Otra"))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        // Collection untouched
        let villa = service.get(VillaId(1)).await.unwrap();
        assert_eq!(villa.name, "Vista a la playa");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let service = service_with(InMemoryVillaRepository::new());
        let result = service
            .update(VillaId(9), test_villa_named(9, "Fantasma"))
            .await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn update_overwrites_fields_in_place() {
        let service =
            service_with(InMemoryVillaRepository::new().with_villa(test_villa()));
        let mut changed = test_villa();
        changed.name = "Vista cambiada".to_string();
        changed.occupants = 6;
        service.update(VillaId(1), changed).await.unwrap();

        let villa = service.get(VillaId(1)).await.unwrap();
        assert_eq!(villa.name, "Vista cambiada");
        assert_eq!(villa.occupants, 6);
        assert_eq!(villa.id, VillaId(1));
    }

    #[tokio::test]
    async fn delete_with_zero_id_is_bad_request() {
        let service = service_with(InMemoryVillaRepository::new());
        let result = service.delete(VillaId(0)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn delete_removes_the_villa() {
        let service =
            service_with(InMemoryVillaRepository::new().with_villa(test_villa()));
        service.delete(VillaId(1)).await.unwrap();
        let result = service.get(VillaId(1)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let service = service_with(InMemoryVillaRepository::new());
        let result = service.delete(VillaId(5)).await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }
}

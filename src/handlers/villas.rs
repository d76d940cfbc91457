//! Villa handlers
//!
//! Endpoints for villa management under `/api/villa`.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{NewVilla, Villa, VillaId};
use crate::error::AppError;
use crate::handlers::ApiJson;
use crate::AppState;

/// Request body for creating a villa
///
/// `id` is accepted so a client-supplied nonzero id can be rejected explicitly;
/// a well-formed create request omits it.
#[derive(Debug, Deserialize)]
pub struct CreateVillaRequest {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub occupants: i32,
    #[serde(default)]
    pub area: i32,
}

/// Request body for updating a villa; `id` must match the path id
#[derive(Debug, Deserialize)]
pub struct UpdateVillaRequest {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub occupants: i32,
    #[serde(default)]
    pub area: i32,
}

/// GET /api/villa
///
/// List all villas.
pub async fn list_villas(State(state): State<AppState>) -> Result<Json<Vec<Villa>>, AppError> {
    Ok(Json(state.villa_service.list().await?))
}

/// GET /api/villa/:id
///
/// Get a villa by id.
pub async fn get_villa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Villa>, AppError> {
    Ok(Json(state.villa_service.get(VillaId(id)).await?))
}

/// POST /api/villa
///
/// Create a villa. Responds 201 with a Location header pointing at the new
/// record's get-by-id endpoint.
pub async fn create_villa(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateVillaRequest>,
) -> Result<impl IntoResponse, AppError> {
    let villa = state
        .villa_service
        .create(
            request.id,
            NewVilla {
                name: request.name,
                occupants: request.occupants,
                area: request.area,
            },
        )
        .await?;

    let location = format!("/api/villa/{}", villa.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(villa),
    ))
}

/// PUT /api/villa/:id
///
/// Overwrite a villa's name, occupants and area. The body id must match the
/// path id; the stored id is left unchanged.
pub async fn update_villa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(request): ApiJson<UpdateVillaRequest>,
) -> Result<StatusCode, AppError> {
    state
        .villa_service
        .update(
            VillaId(id),
            Villa {
                id: VillaId(request.id),
                name: request.name,
                occupants: request.occupants,
                area: request.area,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/villa/:id
///
/// Remove a villa by id.
pub async fn delete_villa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.villa_service.delete(VillaId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! JSON catalog endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use philologic_catalog::CatalogError;
use philologic_common::{ApiError, LearningModule, PhiloError, PhilosopherRecord};

use crate::state::SharedState;

fn catalog_error(err: CatalogError) -> ApiError {
    match err {
        CatalogError::NotFound(id) => PhiloError::PhilosopherNotFound(id).into(),
        other => ApiError::Upstream(format!("Catalog unavailable: {}", other)),
    }
}

/// GET /api/philosophers
pub async fn api_philosophers(
    State(state): State<SharedState>,
) -> Result<Json<Vec<PhilosopherRecord>>, ApiError> {
    let list = state.catalog.philosophers().await.map_err(catalog_error)?;
    Ok(Json(list))
}

/// GET /api/philosophers/{id}/modules
pub async fn api_modules(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<LearningModule>>, ApiError> {
    let modules = state.catalog.modules(id).await.map_err(catalog_error)?;
    Ok(Json(modules))
}

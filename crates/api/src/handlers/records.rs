use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, instrument};
use zonelight_domain::DomainError;

use crate::{
    dto::{RecordDto, ZoneDto},
    errors::ApiError,
    state::AppState,
};

#[instrument(skip(state), name = "api_get_records")]
pub async fn get_records(State(state): State<AppState>) -> Json<Vec<RecordDto>> {
    debug!("Listing global records");
    Json(RecordDto::global_from_store(&state.store))
}

#[instrument(skip(state), name = "api_get_zones")]
pub async fn get_zones(State(state): State<AppState>) -> Json<Vec<ZoneDto>> {
    debug!("Listing zones");
    Json(ZoneDto::all_from_store(&state.store))
}

#[instrument(skip(state), name = "api_get_zone")]
pub async fn get_zone(
    State(state): State<AppState>,
    Path(suffix): Path<String>,
) -> Result<Json<ZoneDto>, ApiError> {
    let zone = state
        .store
        .zone(&suffix)
        .ok_or_else(|| DomainError::NotFound(format!("zone {}", suffix)))?;

    Ok(Json(ZoneDto::from_zone(&suffix, zone)))
}

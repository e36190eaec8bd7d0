//! Map catalog and map detail routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::listing::{self, ListingRequest};
use crate::services::maps::{self, MapListing, ViewerPayload};
use crate::state::AppState;

#[cfg(test)]
#[path = "maps_test.rs"]
mod maps_test;

#[derive(Debug, Default, Deserialize)]
pub struct ListMapsQuery {
    pub name: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "columnAndOrder")]
    pub column_and_order: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MapDetailResponse {
    pub id: i64,
    pub name: String,
    pub width: i64,
    pub height: i64,
    pub height_by_width: f64,
    pub viewer: ViewerPayload,
}

/// `GET /api/maps`: one page of the catalog.
pub async fn list_maps(
    State(state): State<AppState>,
    Query(query): Query<ListMapsQuery>,
) -> Result<Json<MapListing>, StatusCode> {
    let request = ListingRequest::from_query(
        query.name.as_deref(),
        query.page.as_deref(),
        query.column_and_order.as_deref(),
    );
    let listing = maps::list_maps(&state.pool, &request)
        .await
        .map_err(map_error_to_status)?;
    Ok(Json(listing))
}

/// `GET /api/maps/:id`: one map with its viewer payload.
pub async fn get_map(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MapDetailResponse>, StatusCode> {
    let id = parse_map_id(&raw_id).ok_or(StatusCode::NOT_FOUND)?;
    let record = maps::get_map(&state.pool, id)
        .await
        .map_err(map_error_to_status)?;

    Ok(Json(MapDetailResponse {
        viewer: ViewerPayload::from_map_json(record.id, &record.map),
        height_by_width: maps::height_by_width(record.height, record.width),
        id: record.id,
        name: record.name,
        width: record.width,
        height: record.height,
    }))
}

/// Map ids are numeric (`"1"`, `"1.0"`, `"1e0"`); anything else is treated as a missing page.
pub(crate) fn parse_map_id(raw: &str) -> Option<i64> {
    listing::parse_integral(raw)
}

pub(crate) fn map_error_to_status(err: maps::MapError) -> StatusCode {
    match err {
        maps::MapError::NotFound(_) => StatusCode::NOT_FOUND,
        maps::MapError::Database(e) => {
            tracing::error!(error = %e, "map query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

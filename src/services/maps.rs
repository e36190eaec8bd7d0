//! Map catalog service: listing, lookup, and viewer payloads.
//!
//! DESIGN
//! ======
//! Map records are read-only here. The listing counts matching rows first so
//! the requested page can be clamped, then fetches one page with the sort
//! expression chosen from a fixed set (see [`SortColumn::order_expr`]).
//!
//! ERROR HANDLING
//! ==============
//! A record whose `map` payload fails room validation is still returned; its
//! viewer payload degrades to [`ViewerPayload::Unavailable`] so the detail
//! page shows a message instead of failing the request.

use canvas::rooms::{BoundingBox, Room, parse_rooms};
use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, warn};

use crate::services::listing::{ColumnHeader, ListingRequest, PAGE_SIZE, PageLinks, Pagination, SortColumn, SortOrder};

#[cfg(test)]
#[path = "maps_test.rs"]
mod maps_test;

/// Message shown in place of the viewer when a map cannot be parsed.
pub const UNAVAILABLE_MESSAGE: &str = "Error occured while parsing the map.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("map not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from catalog queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MapSummaryRow {
    pub id: i64,
    pub name: String,
    pub width: i64,
    pub height: i64,
}

/// Full map record including the serialized room payload.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MapRecord {
    pub id: i64,
    pub name: String,
    pub map: String,
    pub width: i64,
    pub height: i64,
}

/// One catalog row as shown in the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSummary {
    pub id: i64,
    pub name: String,
    pub width: i64,
    pub height: i64,
    /// `height / width`, rounded to three decimals.
    pub height_by_width: f64,
}

impl From<MapSummaryRow> for MapSummary {
    fn from(row: MapSummaryRow) -> Self {
        Self {
            height_by_width: round_ratio(height_by_width(row.height, row.width)),
            id: row.id,
            name: row.name,
            width: row.width,
            height: row.height,
        }
    }
}

/// One catalog page plus the state needed to render its controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapListing {
    pub name: String,
    pub rows: Vec<MapSummary>,
    pub page: i64,
    pub number_of_pages: i64,
    pub number_of_rows: i64,
    pub column: SortColumn,
    pub order: SortOrder,
    pub links: PageLinks,
    pub headers: Vec<ColumnHeader>,
}

/// What the detail page hands to the viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ViewerPayload {
    Ready {
        rooms: Vec<Room>,
        bounds: Option<BoundingBox>,
    },
    Unavailable {
        message: String,
    },
}

impl ViewerPayload {
    /// Validate a raw `map` payload.
    #[must_use]
    pub fn from_map_json(map_id: i64, raw: &str) -> Self {
        match parse_rooms(raw) {
            Ok(rooms) => {
                let bounds = BoundingBox::of(&rooms);
                Self::Ready { rooms, bounds }
            }
            Err(e) => {
                warn!(map_id, error = %e, "map payload failed validation");
                Self::Unavailable { message: UNAVAILABLE_MESSAGE.to_owned() }
            }
        }
    }
}

// =============================================================================
// DERIVED VALUES
// =============================================================================

/// Floating-point `height / width`, matching the catalog sort order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn height_by_width(height: i64, width: i64) -> f64 {
    height as f64 / width as f64
}

/// Round to three decimals for display.
#[must_use]
pub fn round_ratio(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

// =============================================================================
// QUERIES
// =============================================================================

/// Count maps whose name contains `name`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn count_maps(pool: &SqlitePool, name: &str) -> Result<i64, MapError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM maps WHERE name LIKE '%' || ? || '%'")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Fetch one clamped, sorted page of the catalog.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn list_maps(pool: &SqlitePool, request: &ListingRequest) -> Result<MapListing, MapError> {
    let number_of_rows = count_maps(pool, &request.name).await?;
    let pagination = Pagination::new(request.page, number_of_rows);

    let mut query = QueryBuilder::<Sqlite>::new("SELECT id, name, width, height FROM maps WHERE name LIKE '%' || ");
    query.push_bind(request.name.clone());
    query.push(" || '%' ORDER BY ");
    query.push(request.column.order_expr());
    query.push(" ");
    query.push(request.order.sql());
    query.push(", id ASC LIMIT ");
    query.push_bind(PAGE_SIZE);
    query.push(" OFFSET ");
    query.push_bind(pagination.offset());

    let rows = query.build_query_as::<MapSummaryRow>().fetch_all(pool).await?;
    debug!(
        name = %request.name,
        sort = %request.sort_key(),
        page = pagination.page,
        rows = rows.len(),
        "map catalog page"
    );

    Ok(MapListing {
        name: request.name.clone(),
        rows: rows.into_iter().map(MapSummary::from).collect(),
        page: pagination.page,
        number_of_pages: pagination.number_of_pages,
        number_of_rows: pagination.number_of_rows,
        column: request.column,
        order: request.order,
        links: pagination.links(),
        headers: request.headers(),
    })
}

/// Fetch one map record by id.
///
/// # Errors
///
/// Returns `NotFound` if no map has this id, or a database error.
pub async fn get_map(pool: &SqlitePool, id: i64) -> Result<MapRecord, MapError> {
    sqlx::query_as::<_, MapRecord>("SELECT id, name, map, width, height FROM maps WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(MapError::NotFound(id))
}

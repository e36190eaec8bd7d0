//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The map catalog is read-only and lives entirely in SQLite, so the pool is
//! the only shared resource.

use sqlx::SqlitePool;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the pool is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Create a test `AppState` backed by a migrated in-memory database.
    ///
    /// A single pooled connection keeps every query on the same database.
    pub async fn test_app_state() -> AppState {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite should open");
        sqlx::migrate!("src/db/migrations")
            .run(&pool)
            .await
            .expect("migrations should apply");
        AppState::new(pool)
    }

    /// Insert a map record and return its id.
    pub async fn seed_map(state: &AppState, name: &str, width: i64, height: i64, map: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("INSERT INTO maps (name, map, width, height) VALUES (?, ?, ?, ?) RETURNING id")
            .bind(name)
            .bind(map)
            .bind(width)
            .bind(height)
            .fetch_one(&state.pool)
            .await
            .expect("seed insert should succeed")
    }

    /// A valid two-room payload.
    #[must_use]
    pub fn sample_map_json() -> String {
        serde_json::json!([
            { "x": 0, "y": 0, "width": 32, "height": 16, "tiles": "0110\n1111" },
            { "x": 32, "y": 8, "width": 16, "height": 16, "tiles": "" },
        ])
        .to_string()
    }
}

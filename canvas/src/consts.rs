//! Shared numeric constants for the canvas crate.

// ── Tile geometry ───────────────────────────────────────────────

/// Edge length of one tile cell in world units.
pub const TILE_SIZE: f64 = 8.0;

/// Extra world units added to every filled extent so neighbours overlap
/// and no hairline gaps appear after rounding.
pub const OVERSCAN: f64 = 0.5;

/// Drawn height of a tile rectangle in world units.
pub const TILE_DRAW_HEIGHT: f64 = TILE_SIZE + OVERSCAN;

// ── Zoom ────────────────────────────────────────────────────────

/// Zoom factor applied per [`WHEEL_STEP`] units of wheel delta.
pub const ZOOM_BASE: f64 = 1.1;

/// Wheel delta corresponding to one notch of zoom.
pub const WHEEL_STEP: f64 = 100.0;

// ── Viewport ────────────────────────────────────────────────────

/// Window pixels reserved for the canvas border on each axis.
pub const SURFACE_BORDER_PX: f64 = 2.0;

/// Extra screen pixels added to the map extent background.
pub const BACKGROUND_BLEED_PX: f64 = 1.0;

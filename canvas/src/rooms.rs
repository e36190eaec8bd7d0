//! Room records and tile geometry extraction.
//!
//! A map arrives as a JSON array of rooms. Each room carries its world-space
//! placement and a serialized tile grid: rows separated by `'\n'`, one
//! character per cell, `'0'` for empty and anything else for solid. The
//! extractor collapses every horizontal run of solid cells into a single
//! [`TileRectangle`] so the renderer issues one fill per run instead of one
//! per cell.
//!
//! Cells and rows always advance by [`TILE_SIZE`] world units. A room's
//! `width`/`height` are only used for its backdrop and the map bounding box.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;

/// Glyph marking an empty tile cell.
const EMPTY_CELL: char = '0';

/// Row separator within a tile grid.
const ROW_BREAK: char = '\n';

/// One room of a map, as stored in the map record's JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Left edge in world units.
    pub x: f64,
    /// Top edge in world units.
    pub y: f64,
    /// Width in world units (backdrop only).
    pub width: f64,
    /// Height in world units (backdrop only).
    pub height: f64,
    /// Serialized tile grid.
    pub tiles: String,
}

/// A horizontal run of solid tiles in world coordinates.
///
/// The height is implicit: one tile row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileRectangle {
    pub x: f64,
    pub y: f64,
    /// Run length in world units (a multiple of [`TILE_SIZE`]).
    pub length: f64,
}

/// World-space extent covering every room of a map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Smallest box containing all rooms, or `None` for an empty map.
    #[must_use]
    pub fn of(rooms: &[Room]) -> Option<Self> {
        let (first, rest) = rooms.split_first()?;
        let seed = Self {
            x_min: first.x,
            y_min: first.y,
            x_max: first.x + first.width,
            y_max: first.y + first.height,
        };
        Some(rest.iter().fold(seed, |acc, room| Self {
            x_min: acc.x_min.min(room.x),
            y_min: acc.y_min.min(room.y),
            x_max: acc.x_max.max(room.x + room.width),
            y_max: acc.y_max.max(room.y + room.height),
        }))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Everything the renderer needs for one loaded map.
///
/// Built once per load; immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub rooms: Vec<Room>,
    pub rectangles: Vec<TileRectangle>,
    /// `None` when the map has no rooms.
    pub bounds: Option<BoundingBox>,
}

impl Scene {
    #[must_use]
    pub fn new(rooms: Vec<Room>) -> Self {
        let rectangles = tile_rectangles(&rooms);
        let bounds = BoundingBox::of(&rooms);
        Self { rooms, rectangles, bounds }
    }
}

/// Errors from validating a map's room payload.
#[derive(Debug, thiserror::Error)]
pub enum RoomsError {
    #[error("map payload is not valid JSON: {0}")]
    Malformed(serde_json::Error),
    #[error("map payload does not match the room shape: {0}")]
    Shape(serde_json::Error),
}

/// Validate and decode a map's JSON payload into rooms.
///
/// The payload must be an array of objects with numeric `x`, `y`, `width`,
/// `height` and a string `tiles`. Extra fields are ignored.
///
/// # Errors
///
/// Returns [`RoomsError::Malformed`] when the text is not JSON at all and
/// [`RoomsError::Shape`] when it is JSON of the wrong shape.
pub fn parse_rooms(json: &str) -> Result<Vec<Room>, RoomsError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(RoomsError::Malformed)?;
    serde_json::from_value(value).map_err(RoomsError::Shape)
}

/// Extract the filled tile runs of every room, concatenated in room order.
#[must_use]
pub fn tile_rectangles(rooms: &[Room]) -> Vec<TileRectangle> {
    let mut out = Vec::new();
    for room in rooms {
        extract_room(room, &mut out);
    }
    out
}

/// Bounding box of all rooms. Alias of [`BoundingBox::of`].
#[must_use]
pub fn bounding_box(rooms: &[Room]) -> Option<BoundingBox> {
    BoundingBox::of(rooms)
}

fn extract_room(room: &Room, out: &mut Vec<TileRectangle>) {
    let mut cursor_x = room.x;
    let mut cursor_y = room.y;
    let mut cells = room.tiles.chars().peekable();

    while let Some(cell) = cells.next() {
        match cell {
            ROW_BREAK => {
                cursor_x = room.x;
                cursor_y += TILE_SIZE;
            }
            EMPTY_CELL => cursor_x += TILE_SIZE,
            _ => {
                let mut run = TileRectangle { x: cursor_x, y: cursor_y, length: TILE_SIZE };
                cursor_x += TILE_SIZE;
                // The terminator stays in the iterator for the outer match.
                while cells.next_if(|&next| next != EMPTY_CELL && next != ROW_BREAK).is_some() {
                    run.length += TILE_SIZE;
                    cursor_x += TILE_SIZE;
                }
                out.push(run);
            }
        }
    }
}

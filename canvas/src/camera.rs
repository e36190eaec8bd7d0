#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{WHEEL_STEP, ZOOM_BASE};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen-space center of the surface.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Camera state for pan/zoom over the map.
///
/// `position` is the world point shown at the viewport center.
/// `zoom` is screen pixels per world unit (1.0 = no zoom). It is never
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { position: Point::new(0.0, 0.0), zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a world-space point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point, viewport: Viewport) -> Point {
        let center = viewport.center();
        Point {
            x: center.x + self.zoom * (world.x - self.position.x),
            y: center.y + self.zoom * (world.y - self.position.y),
        }
    }

    /// Convert a screen-space point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, viewport: Viewport) -> Point {
        let center = viewport.center();
        Point {
            x: self.position.x + (screen.x - center.x) / self.zoom,
            y: self.position.y + (screen.y - center.y) / self.zoom,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Place the camera so content follows a drag from `start_screen` to
    /// `current_screen` that began with the camera at `initial_position`.
    pub fn drag_from(&mut self, initial_position: Point, start_screen: Point, current_screen: Point) {
        self.position = Point {
            x: initial_position.x + self.screen_dist_to_world(start_screen.x - current_screen.x),
            y: initial_position.y + self.screen_dist_to_world(start_screen.y - current_screen.y),
        };
    }

    /// Apply one wheel event, keeping the world point under `pointer` fixed.
    ///
    /// Every [`WHEEL_STEP`] units of positive delta divides the zoom by
    /// [`ZOOM_BASE`]; negative delta zooms in by the same ratio.
    pub fn zoom_at(&mut self, pointer: Point, wheel_delta_y: f64, viewport: Viewport) {
        let new_zoom = self.zoom / ZOOM_BASE.powf(wheel_delta_y / WHEEL_STEP);
        let center = viewport.center();
        let shift = 1.0 / self.zoom - 1.0 / new_zoom;
        self.position = Point {
            x: self.position.x + (pointer.x - center.x) * shift,
            y: self.position.y + (pointer.y - center.y) * shift,
        };
        self.zoom = new_zoom;
    }
}

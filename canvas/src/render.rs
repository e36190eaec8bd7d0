//! Rendering: draws the map scene onto a 2D surface.
//!
//! Drawing goes through the [`Surface`] trait so the layer order and the
//! world-to-screen math can be tested without a browser. [`CanvasSurface`]
//! is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Rendering receives read-only views of the scene and camera and never
//! mutates application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, Viewport};
use crate::consts::{BACKGROUND_BLEED_PX, OVERSCAN, TILE_DRAW_HEIGHT};
use crate::rooms::Scene;

/// Fill styles used by the map layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Map extent behind all rooms.
    Background,
    /// Room backdrop.
    Room,
    /// Solid tile run.
    Tile,
}

impl Fill {
    /// CSS color string for this fill.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Background => "rgb(230, 230, 230)",
            Self::Room => "rgb(200, 200, 200)",
            Self::Tile => "black",
        }
    }
}

/// A raster target the viewer can draw on. Coordinates are screen pixels.
pub trait Surface {
    /// Resize the backing raster to `viewport`.
    fn resize(&mut self, viewport: Viewport);
    /// Erase everything inside `viewport`.
    fn clear(&mut self, viewport: Viewport);
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, fill: Fill, x: f64, y: f64, width: f64, height: f64);
}

/// Draw the full scene: background extent, room backdrops, then tiles.
///
/// Later layers paint over earlier ones, so tiles are never hidden by room
/// backdrops.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, scene: &Scene, camera: &Camera, viewport: Viewport) {
    let zoom = camera.zoom;

    // Layer 1: clear.
    surface.clear(viewport);

    // Layer 2: map extent.
    if let Some(bounds) = scene.bounds {
        let origin = camera.world_to_screen(Point::new(bounds.x_min, bounds.y_min), viewport);
        surface.fill_rect(
            Fill::Background,
            origin.x,
            origin.y,
            (bounds.width() + OVERSCAN) * zoom + BACKGROUND_BLEED_PX,
            (bounds.height() + OVERSCAN) * zoom + BACKGROUND_BLEED_PX,
        );
    }

    // Layer 3: room backdrops.
    for room in &scene.rooms {
        let origin = camera.world_to_screen(Point::new(room.x, room.y), viewport);
        surface.fill_rect(
            Fill::Room,
            origin.x,
            origin.y,
            (room.width + OVERSCAN) * zoom,
            (room.height + OVERSCAN) * zoom,
        );
    }

    // Layer 4: tile runs.
    for rect in &scene.rectangles {
        let origin = camera.world_to_screen(Point::new(rect.x, rect.y), viewport);
        surface.fill_rect(
            Fill::Tile,
            origin.x,
            origin.y,
            (rect.length + OVERSCAN) * zoom,
            TILE_DRAW_HEIGHT * zoom,
        );
    }
}

/// Browser canvas element plus its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser refuses to hand out a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width.max(0.0) as u32);
        self.canvas.set_height(viewport.height.max(0.0) as u32);
    }

    fn clear(&mut self, viewport: Viewport) {
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_rect(&mut self, fill: Fill, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.set_fill_style_str(fill.css());
        self.ctx.fill_rect(x, y, width, height);
    }
}

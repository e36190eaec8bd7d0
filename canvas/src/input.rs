//! Input model: wheel deltas and the pan gesture state machine.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. Panning is the only gesture the viewer has; it remembers where
//! the pointer went down and where the camera was at that moment, so every
//! move recomputes the camera from the gesture origin instead of
//! accumulating per-event deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down = zoom out).
    pub dy: f64,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; pointer moves are ignored.
    #[default]
    Idle,
    /// The user is dragging the map.
    Panning {
        /// Screen-space position where the pointer went down.
        start_screen: Point,
        /// Camera position when the pointer went down.
        initial_position: Point,
    },
}

impl InputState {
    /// Begin a pan gesture at `screen` with the camera at `position`.
    #[must_use]
    pub fn begin_pan(screen: Point, position: Point) -> Self {
        Self::Panning { start_screen: screen, initial_position: position }
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}

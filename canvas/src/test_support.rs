//! Shared fixtures for unit tests.

use crate::camera::Viewport;
use crate::render::{Fill, Surface};
use crate::rooms::Room;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Resize(Viewport),
    Clear(Viewport),
    Fill { fill: Fill, x: f64, y: f64, width: f64, height: f64 },
}

/// Surface that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn fills(&self, kind: Fill) -> Vec<(f64, f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill { fill, x, y, width, height } if *fill == kind => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Clear(_))).count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.ops.push(Op::Resize(viewport));
    }

    fn clear(&mut self, viewport: Viewport) {
        self.ops.push(Op::Clear(viewport));
    }

    fn fill_rect(&mut self, fill: Fill, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::Fill { fill, x, y, width, height });
    }
}

pub fn room(x: f64, y: f64, width: f64, height: f64, tiles: &str) -> Room {
    Room { x, y, width, height, tiles: tiles.to_owned() }
}

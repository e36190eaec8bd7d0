//! Map viewer engine: tile geometry, camera, input, and rendering.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It turns
//! the serialized room list of a map into filled tile rectangles once per
//! load, then owns the viewer lifecycle: translating raw window input events
//! into camera changes and redrawing the scene onto a 2D canvas. Everything
//! except [`mount`] and [`render::CanvasSurface`] is DOM-free and tested
//! natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`rooms`] | Room records, run-length tile extraction, bounding box |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the pan gesture state machine |
//! | [`render`] | Scene drawing onto an abstract [`render::Surface`] |
//! | [`engine`] | Testable [`engine::ViewerCore`] and the [`engine::Viewer`] unit |
//! | [`listeners`] | Scoped event-listener subscriptions |
//! | [`mount`] | `wasm-bindgen` entry point wiring window events to a viewer |
//! | [`consts`] | Shared numeric constants (tile size, zoom base, etc.) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod input;
pub mod listeners;
pub mod mount;
pub mod render;
pub mod rooms;

#[cfg(test)]
mod test_support;

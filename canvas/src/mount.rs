//! Browser entry point: mounts a [`Viewer`] on a canvas element.
//!
//! The host page calls [`MapViewer::mount`] when the user opens the viewer
//! and [`MapViewer::close`] when they dismiss it. Window listeners hold only
//! weak references to the viewer, so the handle returned to JS is the single
//! owner; closing or dropping it detaches every listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use crate::camera::Point;
use crate::engine::Viewer;
use crate::input::WheelDelta;
use crate::listeners::listen;
use crate::render::CanvasSurface;
use crate::rooms::parse_rooms;

type SharedViewer = Rc<RefCell<Viewer<CanvasSurface>>>;

/// JS handle for one open map viewer.
#[wasm_bindgen]
pub struct MapViewer {
    viewer: SharedViewer,
}

#[wasm_bindgen]
impl MapViewer {
    /// Parse `rooms_json`, attach window listeners, and draw the first frame.
    ///
    /// `on_close` is invoked once, after the listeners are detached.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the room payload is invalid, there is no window, or
    /// the canvas has no 2D context.
    pub fn mount(canvas: HtmlCanvasElement, rooms_json: &str, on_close: js_sys::Function) -> Result<MapViewer, JsValue> {
        let rooms = parse_rooms(rooms_json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let surface = CanvasSurface::new(canvas)?;

        let viewer = Rc::new(RefCell::new(Viewer::new(surface, rooms, move || {
            if let Err(err) = on_close.call0(&JsValue::NULL) {
                log::warn!("map viewer close callback failed: {err:?}");
            }
        })));
        attach_listeners(&window, &viewer)?;

        let (width, height) = window_size(&window)?;
        viewer.borrow_mut().resize(width, height);
        log::debug!("map viewer mounted at {width}x{height}");

        Ok(MapViewer { viewer })
    }

    /// Detach all listeners and notify the host. Safe to call twice.
    pub fn close(&self) {
        match self.viewer.try_borrow_mut() {
            Ok(mut viewer) => viewer.close(),
            Err(_) => log::warn!("map viewer busy; close ignored"),
        }
    }
}

fn attach_listeners(window: &Window, viewer: &SharedViewer) -> Result<(), JsValue> {
    let target: &web_sys::EventTarget = window.as_ref();

    let resize = {
        let weak = Rc::downgrade(viewer);
        let window = window.clone();
        listen(target, "resize", move |_: Event| match window_size(&window) {
            Ok((width, height)) => with_viewer(&weak, |v| v.resize(width, height)),
            Err(err) => log::warn!("window size unavailable: {err:?}"),
        })?
    };
    let down = {
        let weak = Rc::downgrade(viewer);
        listen(target, "mousedown", move |e: MouseEvent| {
            with_viewer(&weak, |v| v.on_pointer_down(page_point(&e)));
        })?
    };
    let moved = {
        let weak = Rc::downgrade(viewer);
        listen(target, "mousemove", move |e: MouseEvent| {
            with_viewer(&weak, |v| v.on_pointer_move(page_point(&e)));
        })?
    };
    let up = {
        let weak = Rc::downgrade(viewer);
        listen(target, "mouseup", move |e: MouseEvent| {
            with_viewer(&weak, |v| v.on_pointer_up(page_point(&e)));
        })?
    };
    let wheel = {
        let weak = Rc::downgrade(viewer);
        listen(target, "wheel", move |e: WheelEvent| {
            let delta = WheelDelta { dx: e.delta_x(), dy: e.delta_y() };
            with_viewer(&weak, |v| v.on_wheel(page_point(&e), delta));
        })?
    };

    let mut shared = viewer.borrow_mut();
    for subscription in [resize, down, moved, up, wheel] {
        shared.hold(subscription);
    }
    Ok(())
}

fn with_viewer(weak: &Weak<RefCell<Viewer<CanvasSurface>>>, f: impl FnOnce(&mut Viewer<CanvasSurface>)) {
    let Some(viewer) = weak.upgrade() else {
        return;
    };
    if let Ok(mut viewer) = viewer.try_borrow_mut() {
        f(&mut *viewer);
    }
}

fn page_point(e: &MouseEvent) -> Point {
    Point::new(f64::from(e.page_x()), f64::from(e.page_y()))
}

fn window_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

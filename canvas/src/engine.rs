use crate::camera::{Camera, Point, Viewport};
use crate::consts::SURFACE_BORDER_PX;
use crate::input::{InputState, WheelDelta};
use crate::listeners::{Subscription, Subscriptions};
use crate::render::{self, Surface};
use crate::rooms::{Room, Scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    RenderNeeded,
}

/// Core viewer state: all logic that doesn't depend on a drawing surface.
///
/// Separated from [`Viewer`] so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct ViewerCore {
    pub scene: Scene,
    pub camera: Camera,
    pub input: InputState,
    pub viewport: Viewport,
}

impl ViewerCore {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self { scene, ..Self::default() }
    }

    // --- Viewport ---

    /// Update the surface size.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Action {
        self.viewport = viewport;
        Action::RenderNeeded
    }

    // --- Input events ---

    /// Start a pan. Any button starts one; the camera does not move yet.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Action {
        self.input = InputState::begin_pan(screen_pt, self.camera.position);
        Action::None
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Action {
        match self.input {
            InputState::Idle => Action::None,
            InputState::Panning { start_screen, initial_position } => {
                self.camera.drag_from(initial_position, start_screen, screen_pt);
                Action::RenderNeeded
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point) -> Action {
        self.input = InputState::Idle;
        Action::None
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Action {
        self.camera.zoom_at(screen_pt, delta.dy, self.viewport);
        Action::RenderNeeded
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.input.is_panning()
    }
}

/// The map viewer unit: core state plus the surface it draws on, the window
/// listeners it holds, and the callback to run when it closes.
///
/// Every handler that changes what is visible redraws before returning.
pub struct Viewer<S: Surface> {
    pub core: ViewerCore,
    surface: S,
    subscriptions: Subscriptions,
    on_close: Option<Box<dyn FnOnce()>>,
}

impl<S: Surface> Viewer<S> {
    /// Build the scene for `rooms` and bind it to `surface`.
    pub fn new(surface: S, rooms: Vec<Room>, on_close: impl FnOnce() + 'static) -> Self {
        let scene = Scene::new(rooms);
        log::debug!(
            "viewer scene: {} rooms, {} tile rectangles",
            scene.rooms.len(),
            scene.rectangles.len()
        );
        Self {
            core: ViewerCore::new(scene),
            surface,
            subscriptions: Subscriptions::new(),
            on_close: Some(Box::new(on_close)),
        }
    }

    /// Keep `subscription` alive until the viewer closes.
    pub fn hold(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Number of listeners currently held.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// `false` once [`Viewer::close`] has run.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.on_close.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // --- Viewport ---

    /// Fit the surface to a window of the given size, minus the border.
    pub fn resize(&mut self, window_width: f64, window_height: f64) {
        let viewport = Viewport::new(window_width - SURFACE_BORDER_PX, window_height - SURFACE_BORDER_PX);
        self.surface.resize(viewport);
        let action = self.core.set_viewport(viewport);
        self.apply(action);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point) {
        let action = self.core.on_pointer_down(screen_pt);
        self.apply(action);
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) {
        let action = self.core.on_pointer_move(screen_pt);
        self.apply(action);
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point) {
        let action = self.core.on_pointer_up(screen_pt);
        self.apply(action);
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) {
        let action = self.core.on_wheel(screen_pt, delta);
        self.apply(action);
    }

    // --- Render ---

    /// Draw the current state to the surface.
    pub fn render(&mut self) {
        render::draw(&mut self.surface, &self.core.scene, &self.core.camera, self.core.viewport);
    }

    /// Detach every listener, then run the close callback. Idempotent.
    pub fn close(&mut self) {
        self.subscriptions.release_all();
        if let Some(on_close) = self.on_close.take() {
            log::debug!("viewer closed");
            on_close();
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::RenderNeeded => self.render(),
        }
    }
}

use crate::gravity::{GravityField, GravityOptions, TOGGLE_HIT_RADIUS};
use crate::history::UndoStack;
use crate::session::{SessionId, SessionManager};
use crate::surface::Surface;
use crate::transform::CanvasTransform;
use kurbo::Point;

/// the whole drawing state in one owned context: gravity field, undo
/// history, live input sessions and the coordinate transform. the host hands
/// raw pointer positions in and gets enable/disable state back; it never
/// touches the pieces directly.
#[derive(Default)]
pub struct Board {
    field: GravityField,
    history: UndoStack,
    sessions: SessionManager,
    transform: CanvasTransform,
    hide_cursor: bool,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// called once per frame before any events: where the canvas sits on
    /// screen and how many device px one logical point is.
    pub fn set_viewport(&mut self, origin: Point, pixels_per_point: f64) {
        self.transform.set_viewport(origin, pixels_per_point);
    }

    /// poll the option values. radii arrive in logical px and are scaled
    /// here; the force radius is clamped to stay >= the hole radius.
    pub fn apply_options(&mut self, hole_radius: f64, force_radius: f64, hide_cursor: bool) {
        let scale = self.transform.pixels_per_point();
        self.field
            .set_options(GravityOptions::new(hole_radius * scale, force_radius * scale));
        self.hide_cursor = hide_cursor;
    }

    pub fn hide_cursor(&self) -> bool {
        self.hide_cursor
    }

    /// full pipeline for one raw movement sample: canvas px, then the
    /// gravity warp.
    pub fn warp(&self, raw: Point) -> Point {
        self.field.attract(self.transform.to_canvas(raw))
    }

    // --- pointer entry points -------------------------------------------

    pub fn pointer_pressed(&mut self, id: SessionId, raw: Point) {
        self.sessions.start(id, self.warp(raw));
    }

    pub fn pointer_moved(&mut self, id: SessionId, raw: Point, surface: &mut dyn Surface) {
        let p = self.warp(raw);
        self.sessions.moved(id, p, surface);
    }

    pub fn pointer_released(&mut self, id: SessionId) {
        self.sessions.finish(id, &mut self.history);
    }

    /// secondary-click gesture: add or remove an attractor. the hit test
    /// uses the unwarped canvas position, otherwise an existing well would
    /// swallow the click meant to remove it.
    pub fn toggle_gravity_at(&mut self, raw: Point) {
        let p = self.transform.to_canvas(raw);
        let hit_radius = TOGGLE_HIT_RADIUS * self.transform.pixels_per_point();
        self.field.toggle(p, hit_radius);
    }

    // --- command surface ------------------------------------------------

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// clear the visible drawing. implemented as undo-all, so the strokes
    /// stay redoable.
    pub fn clear_all(&mut self) {
        self.history.undo_all();
    }

    /// draw the whole frame: committed strokes, in-progress strokes, then
    /// the gravity hud on top.
    pub fn paint(&self, surface: &mut dyn Surface) {
        self.history.replay(surface);
        self.sessions.replay_active(surface);
        self.field.paint_hud(surface);
    }
}

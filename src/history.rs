use crate::stroke::Action;
use crate::surface::Surface;
use log::debug;

/// undo/redo history over whole strokes.
///
/// `head` is the non-inclusive boundary between committed actions and undone
/// ones. actions at index >= head are only kept around until the next push,
/// which discards that redo branch entirely.
#[derive(Default)]
pub struct UndoStack {
    actions: Vec<Action>,
    head: usize,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        self.head > 0
    }

    pub fn can_redo(&self) -> bool {
        self.head < self.actions.len()
    }

    /// commit a finished action. anything previously undone is dropped first,
    /// so redo is no longer possible afterwards.
    pub fn push(&mut self, action: Action) {
        self.actions.truncate(self.head);
        debug_assert_eq!(
            self.actions.len(),
            self.head,
            "head index out of sync with the action list"
        );

        self.actions.push(action);
        self.head += 1;
        debug!("pushed action, history now {}/{}", self.head, self.actions.len());
    }

    /// step the head back one action. returns false (and changes nothing)
    /// when there is nothing to undo, so stale ui state fails safely.
    pub fn undo(&mut self) -> bool {
        if self.head == 0 {
            return false;
        }
        self.head -= 1;
        debug!("undo, history now {}/{}", self.head, self.actions.len());
        true
    }

    /// step the head forward again. returns false when nothing was undone.
    pub fn redo(&mut self) -> bool {
        if self.head >= self.actions.len() {
            return false;
        }
        self.head += 1;
        debug!("redo, history now {}/{}", self.head, self.actions.len());
        true
    }

    /// reset the head to zero: clears the visible drawing but keeps every
    /// action redoable.
    pub fn undo_all(&mut self) {
        self.head = 0;
        debug!("undo all, history now 0/{}", self.actions.len());
    }

    /// wipe the surface and redraw every committed action in order. called
    /// once per frame by the host; stroke counts stay small enough over an
    /// interactive session that the full redraw is the simple tradeoff.
    pub fn replay(&self, surface: &mut dyn Surface) {
        surface.clear();
        for action in &self.actions[..self.head] {
            action.replay(surface);
        }
    }
}

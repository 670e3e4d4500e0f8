use crate::history::UndoStack;
use crate::stroke::{Action, Segment};
use crate::surface::Surface;
use kurbo::Point;
use log::{debug, trace};
use std::collections::HashMap;

/// which pointer a drawing session belongs to. the mouse (or pen) only ever
/// owns one session at a time; every touch contact gets its own id, so
/// multi-touch drawing runs concurrent sessions side by side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionId {
    Mouse,
    Touch(u64),
}

/// per-pointer in-progress state: the stroke being built plus the last
/// warped position, kept explicitly here instead of in event closures.
struct InputSession {
    action: Action,
    last: Point,
}

/// owns all live drawing sessions and routes movement/finish events to them.
///
/// unknown ids on move/finish are ignored on purpose: hover movement without
/// a press, or an end event whose start never hit the canvas, arrive
/// naturally from host event ordering and are not errors.
#[derive(Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, InputSession>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_active(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// begin a stroke at `start`, already in canvas coordinates.
    pub fn start(&mut self, id: SessionId, start: Point) {
        debug!("session {:?} started at ({:.0}, {:.0})", id, start.x, start.y);
        self.sessions.insert(
            id,
            InputSession {
                action: Action::new(),
                last: start,
            },
        );
    }

    /// extend the session's stroke to `p`: the new segment is stroked onto
    /// the surface right away and appended to the in-progress action.
    pub fn moved(&mut self, id: SessionId, p: Point, surface: &mut dyn Surface) {
        let Some(session) = self.sessions.get_mut(&id) else {
            trace!("movement for unknown session {:?} ignored", id);
            return;
        };

        let segment = Segment::new(session.last, p);
        segment.stroke(surface);
        session.action.push(segment);
        session.last = p;
    }

    /// seal the session's stroke and commit it to the history. a press with
    /// no movement still commits an empty action, matching how a bare click
    /// occupies an undo step.
    pub fn finish(&mut self, id: SessionId, history: &mut UndoStack) {
        let Some(session) = self.sessions.remove(&id) else {
            trace!("finish for unknown session {:?} ignored", id);
            return;
        };

        debug!(
            "session {:?} finished with {} segments",
            id,
            session.action.segments().len()
        );
        history.push(session.action);
    }

    /// redraw every in-progress stroke. committed actions are replayed by
    /// the history; this covers what is still being drawn.
    pub fn replay_active(&self, surface: &mut dyn Surface) {
        for session in self.sessions.values() {
            session.action.replay(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn moved_strokes_immediately_and_accumulates() {
        let mut sessions = SessionManager::new();
        let mut surface = RecordingSurface::new();

        sessions.start(SessionId::Mouse, Point::new(0.0, 0.0));
        sessions.moved(SessionId::Mouse, Point::new(5.0, 0.0), &mut surface);
        sessions.moved(SessionId::Mouse, Point::new(5.0, 5.0), &mut surface);

        // progressive rendering: each movement stroked as it arrived
        assert_eq!(
            surface.lines(),
            vec![
                (Point::new(0.0, 0.0), Point::new(5.0, 0.0)),
                (Point::new(5.0, 0.0), Point::new(5.0, 5.0)),
            ]
        );
    }

    #[test]
    fn finish_commits_the_stroke_to_history() {
        let mut sessions = SessionManager::new();
        let mut history = UndoStack::new();
        let mut surface = RecordingSurface::new();

        sessions.start(SessionId::Mouse, Point::new(0.0, 0.0));
        sessions.moved(SessionId::Mouse, Point::new(3.0, 4.0), &mut surface);
        sessions.finish(SessionId::Mouse, &mut history);

        assert!(!sessions.has_active());
        assert!(history.can_undo());

        let mut replayed = RecordingSurface::new();
        history.replay(&mut replayed);
        assert_eq!(
            replayed.lines(),
            vec![(Point::new(0.0, 0.0), Point::new(3.0, 4.0))]
        );
    }

    #[test]
    fn unknown_ids_are_ignored_without_side_effects() {
        let mut sessions = SessionManager::new();
        let mut history = UndoStack::new();
        let mut surface = RecordingSurface::new();

        sessions.moved(SessionId::Touch(7), Point::new(1.0, 1.0), &mut surface);
        sessions.finish(SessionId::Touch(7), &mut history);

        assert!(surface.ops.is_empty());
        assert!(!history.can_undo());
        assert!(!sessions.has_active());
    }

    #[test]
    fn touch_sessions_run_concurrently_and_independently() {
        let mut sessions = SessionManager::new();
        let mut history = UndoStack::new();
        let mut surface = RecordingSurface::new();

        sessions.start(SessionId::Touch(1), Point::new(0.0, 0.0));
        sessions.start(SessionId::Touch(2), Point::new(100.0, 0.0));
        sessions.moved(SessionId::Touch(1), Point::new(0.0, 10.0), &mut surface);
        sessions.moved(SessionId::Touch(2), Point::new(100.0, 10.0), &mut surface);

        sessions.finish(SessionId::Touch(1), &mut history);
        assert!(sessions.has_active());
        sessions.finish(SessionId::Touch(2), &mut history);

        // one committed action per contact
        assert!(history.undo());
        assert!(history.undo());
        assert!(!history.undo());
    }

    #[test]
    fn click_without_movement_still_commits_an_action() {
        let mut sessions = SessionManager::new();
        let mut history = UndoStack::new();

        sessions.start(SessionId::Mouse, Point::new(0.0, 0.0));
        sessions.finish(SessionId::Mouse, &mut history);

        assert!(history.can_undo());
    }
}

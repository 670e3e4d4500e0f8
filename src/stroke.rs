use crate::surface::Surface;
use kurbo::Point;

/// one drawn line between two canvas points. immutable once built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Segment { a, b }
    }

    pub fn stroke(&self, surface: &mut dyn Surface) {
        surface.line_segment(self.a, self.b);
    }
}

/// one continuous stroke: the ordered segments collected between press and
/// release. append-only while the stroke is live, then sealed into the undo
/// stack as a whole.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Action {
    segments: Vec<Segment>,
}

impl Action {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn replay(&self, surface: &mut dyn Surface) {
        for segment in &self.segments {
            segment.stroke(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn replay_draws_segments_in_append_order() {
        let mut action = Action::new();
        action.push(Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)));
        action.push(Segment::new(Point::new(1.0, 0.0), Point::new(1.0, 2.0)));

        let mut surface = RecordingSurface::new();
        action.replay(&mut surface);

        assert_eq!(
            surface.lines(),
            vec![
                (Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
                (Point::new(1.0, 0.0), Point::new(1.0, 2.0)),
            ]
        );
    }
}

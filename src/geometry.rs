use kurbo::Point;

/// small geometry helpers shared by the gravity field and hit-testing.

/// round a point to whole device pixels, the way raw cursor samples are
/// snapped before any warping happens.
pub fn round_to_pixel(p: Point) -> Point {
    Point::new(p.x.round(), p.y.round())
}

/// index of the point in `points` nearest to `target`, restricted to
/// `max_dist`. ties resolve to the first match in iteration order, so the
/// result is stable for a given point list.
pub fn nearest_within(points: &[Point], target: Point, max_dist: f64) -> Option<usize> {
    let max_sq = max_dist * max_dist;
    let mut best: Option<(usize, f64)> = None;

    for (i, p) in points.iter().enumerate() {
        let d_sq = p.distance_squared(target);
        if d_sq > max_sq {
            continue;
        }
        match best {
            Some((_, best_sq)) if best_sq <= d_sq => {}
            _ => best = Some((i, d_sq)),
        }
    }

    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_picks_closest_point() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(3.0, 0.0),
        ];
        assert_eq!(nearest_within(&points, Point::new(4.0, 0.0), 100.0), Some(2));
    }

    #[test]
    fn nearest_respects_max_dist() {
        let points = [Point::new(0.0, 0.0)];
        assert_eq!(nearest_within(&points, Point::new(11.0, 0.0), 10.0), None);
        // boundary is inclusive
        assert_eq!(nearest_within(&points, Point::new(10.0, 0.0), 10.0), Some(0));
    }

    #[test]
    fn nearest_ties_resolve_to_first() {
        let points = [Point::new(-5.0, 0.0), Point::new(5.0, 0.0)];
        assert_eq!(nearest_within(&points, Point::new(0.0, 0.0), 10.0), Some(0));
    }

    #[test]
    fn nearest_on_empty_slice() {
        assert_eq!(nearest_within(&[], Point::new(0.0, 0.0), 10.0), None);
    }

    #[test]
    fn rounding_snaps_to_whole_pixels() {
        let p = round_to_pixel(Point::new(3.4, 7.6));
        assert_eq!((p.x, p.y), (3.0, 8.0));
    }
}

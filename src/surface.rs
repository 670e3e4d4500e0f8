use kurbo::Point;

/// the drawing surface the core renders onto. the eframe host implements it
/// on top of an `egui::Painter`; tests use a recording double. all
/// coordinates are canvas device px.
pub trait Surface {
    /// wipe the whole surface.
    fn clear(&mut self);

    /// stroke one straight line between two canvas points.
    fn line_segment(&mut self, a: Point, b: Point);

    /// stroke a circle outline, used for the gravity hud.
    fn circle(&mut self, center: Point, radius: f64);

    /// stroke a small + shaped marker.
    fn crosshair(&mut self, center: Point, radius: f64) {
        self.line_segment(
            Point::new(center.x, center.y - radius),
            Point::new(center.x, center.y + radius),
        );
        self.line_segment(
            Point::new(center.x - radius, center.y),
            Point::new(center.x + radius, center.y),
        );
    }
}

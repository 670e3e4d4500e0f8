use crate::geometry::round_to_pixel;
use kurbo::Point;

/// maps raw pointer positions (logical screen coordinates, as the host
/// delivers them) into canvas device px: shift by the canvas origin, scale by
/// the pixel ratio, snap to whole pixels. every movement sample goes through
/// this once, in arrival order.
#[derive(Copy, Clone, Debug)]
pub struct CanvasTransform {
    origin: Point,
    pixels_per_point: f64,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        CanvasTransform {
            origin: Point::ZERO,
            pixels_per_point: 1.0,
        }
    }
}

impl CanvasTransform {
    pub fn set_viewport(&mut self, origin: Point, pixels_per_point: f64) {
        debug_assert!(
            pixels_per_point > 0.0,
            "pixel ratio must be positive, got {}",
            pixels_per_point
        );
        self.origin = origin;
        self.pixels_per_point = pixels_per_point;
    }

    pub fn pixels_per_point(&self) -> f64 {
        self.pixels_per_point
    }

    pub fn to_canvas(&self, raw: Point) -> Point {
        round_to_pixel(((raw - self.origin) * self.pixels_per_point).to_point())
    }
}

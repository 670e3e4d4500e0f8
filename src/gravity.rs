use crate::geometry::nearest_within;
use crate::surface::Surface;
use kurbo::{Point, Vec2};
use log::info;

/// hit radius for toggling an attractor with a secondary click, in logical
/// px. scaled by the pixel ratio before use.
pub const TOGGLE_HIT_RADIUS: f64 = 10.0;

/// the two radii every attractor shares. they are process-wide tunables fed
/// from the options sliders, not per-point state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GravityOptions {
    pub hole_radius: f64,
    pub force_radius: f64,
}

impl GravityOptions {
    /// build options from raw slider values. the force radius is clamped to
    /// stay >= the hole radius here, at read time, so the field itself never
    /// sees an inverted pair.
    pub fn new(hole_radius: f64, force_radius: f64) -> Self {
        debug_assert!(
            hole_radius >= 0.0,
            "hole radius must be non-negative, got {}",
            hole_radius
        );
        GravityOptions {
            hole_radius,
            force_radius: force_radius.max(hole_radius),
        }
    }
}

impl Default for GravityOptions {
    fn default() -> Self {
        GravityOptions {
            hole_radius: 0.0,
            force_radius: 0.0,
        }
    }
}

/// what a `toggle` call ended up doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// an ordered set of attractor centers plus the shared radii.
///
/// every attractor warps nearby input toward its center: inside the hole
/// radius the input is fully captured, between hole and force radius it is
/// pulled along the same ray with a linear taper, beyond the force radius it
/// is untouched. when several attractors are in range their individual
/// results are combined by an unweighted arithmetic mean. that mean is a
/// deliberate choice: it blends overlapping wells smoothly instead of
/// snapping to the nearest one, and contributions are not distance-weighted.
#[derive(Default)]
pub struct GravityField {
    centers: Vec<Point>,
    options: GravityOptions,
}

impl GravityField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> GravityOptions {
        self.options
    }

    pub fn set_options(&mut self, options: GravityOptions) {
        self.options = options;
    }

    pub fn centers(&self) -> &[Point] {
        &self.centers
    }

    /// warp `p` through the field. identity when no attractor is in range.
    pub fn attract(&self, p: Point) -> Point {
        let hole = self.options.hole_radius;
        let force = self.options.force_radius;

        let mut sum = Vec2::ZERO;
        let mut contributors = 0usize;

        for &center in &self.centers {
            let v = p - center;
            let d = v.hypot();

            if d <= hole {
                // fully captured, contributes the bare center
                sum += center.to_vec2();
                contributors += 1;
            } else if d < force {
                let span = force - hole;
                if span <= 0.0 {
                    // degenerate field: equal radii normally route every
                    // in-range point through the capture branch above, so
                    // this only guards a boundary-exact sample
                    sum += center.to_vec2();
                } else {
                    let t = (d - hole) / span;
                    let pulled = center + Vec2::from_angle(v.atan2()) * (t * force);
                    sum += pulled.to_vec2();
                }
                contributors += 1;
            }
            // beyond the force radius this attractor contributes nothing
        }

        if contributors == 0 {
            p
        } else {
            let n = contributors as f64;
            Point::new(sum.x / n, sum.y / n)
        }
    }

    /// secondary-click gesture: remove the nearest attractor within
    /// `hit_radius` of `p`, or add a new one at `p` when none is close
    /// enough. `hit_radius` is already in device px.
    pub fn toggle(&mut self, p: Point, hit_radius: f64) -> Toggle {
        match nearest_within(&self.centers, p, hit_radius) {
            Some(i) => {
                let removed = self.centers.remove(i);
                info!("removed gravity point at ({:.1}, {:.1})", removed.x, removed.y);
                Toggle::Removed
            }
            None => {
                self.centers.push(p);
                info!("added gravity point at ({:.1}, {:.1})", p.x, p.y);
                Toggle::Added
            }
        }
    }

    /// draw the hud overlay: a small crosshair on every center plus the two
    /// shared radii as circles.
    pub fn paint_hud(&self, surface: &mut dyn Surface) {
        for &center in &self.centers {
            surface.crosshair(center, 2.0);
            surface.circle(center, self.options.hole_radius);
            surface.circle(center, self.options.force_radius);
        }
    }
}

use ggez::glam::Vec2;
use ggez::graphics::Color;

use crate::error::ParamError;

const FULL_TURN_DEGREES: u32 = 360;

/// Geometry of one curve: a circle of radius `inner_radius` rolling inside a
/// fixed circle of radius `outer_radius`, the pen offset by `hole_ratio` of
/// the rolling radius from its center.
///
/// Derived values are computed once at construction: `rotations` is the
/// number of outer revolutions after which the trace closes, obtained by
/// reducing the radii with their GCD; `k` is the radius ratio that drives
/// the parametric equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    outer_radius: u32,
    inner_radius: u32,
    hole_ratio: f32,
    center: Vec2,
    color: Color,
    rotations: u32,
    k: f32,
}

impl CurveParams {
    pub fn new(
        outer_radius: u32,
        inner_radius: u32,
        hole_ratio: f32,
        center: Vec2,
        color: Color,
    ) -> Result<Self, ParamError> {
        if inner_radius == 0 || inner_radius > outer_radius {
            return Err(ParamError::InvalidGeometry {
                inner: inner_radius,
                outer: outer_radius,
            });
        }
        if !(hole_ratio > 0.0 && hole_ratio <= 1.0) {
            return Err(ParamError::InvalidRatio(hole_ratio));
        }

        let rotations = inner_radius / gcd(inner_radius, outer_radius);
        let k = inner_radius as f32 / outer_radius as f32;

        Ok(Self {
            outer_radius,
            inner_radius,
            hole_ratio,
            center,
            color,
            rotations,
            k,
        })
    }

    pub fn outer_radius(&self) -> u32 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> u32 {
        self.inner_radius
    }

    pub fn hole_ratio(&self) -> f32 {
        self.hole_ratio
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Outer revolutions needed for the trace to return to its start.
    pub fn rotations(&self) -> u32 {
        self.rotations
    }

    /// Degrees of outer rotation after which the trace closes.
    pub fn total_degrees(&self) -> f32 {
        (FULL_TURN_DEGREES * self.rotations) as f32
    }

    /// Point on the curve at the given outer angle, in surface coordinates.
    pub fn point_at(&self, angle_degrees: f32) -> Vec2 {
        let a = angle_degrees.to_radians();
        let r = self.outer_radius as f32;
        let (k, l) = (self.k, self.hole_ratio);
        let x = r * ((1.0 - k) * a.cos() + l * k * ((1.0 - k) * a / k).cos());
        let y = r * ((1.0 - k) * a.sin() - l * k * ((1.0 - k) * a / k).sin());
        self.center + Vec2::new(x, y)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn params(outer: u32, inner: u32, hole: f32) -> CurveParams {
        CurveParams::new(outer, inner, hole, Vec2::ZERO, Color::BLACK).unwrap()
    }

    #[test]
    fn reduces_rotation_count_with_the_gcd() {
        assert_eq!(params(300, 200, 0.5).rotations(), 2);
        assert_eq!(params(210, 90, 0.4).rotations(), 3);
        assert_eq!(params(256, 255, 0.7).rotations(), 255);
        assert_eq!(params(300, 200, 0.5).total_degrees(), 720.0);
    }

    #[test]
    fn closes_after_the_minimal_rotation_count() {
        let p = params(300, 200, 0.5);
        let start = p.point_at(0.0);
        let closed = p.point_at(p.total_degrees());
        assert_abs_diff_eq!(start.x, closed.x, epsilon = 1e-2);
        assert_abs_diff_eq!(start.y, closed.y, epsilon = 1e-2);
        // one revolution is not enough for this geometry
        assert!((p.point_at(360.0) - start).length() > 1.0);
    }

    #[test]
    fn start_point_sits_on_the_positive_x_axis() {
        let p = params(300, 200, 0.5);
        let start = p.point_at(0.0);
        // R*(1-k) + R*l*k with k = 2/3, l = 1/2
        assert_abs_diff_eq!(start.x, 200.0, epsilon = 1e-3);
        assert_abs_diff_eq!(start.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn center_offsets_every_point() {
        let at_origin = params(120, 48, 0.8);
        let moved =
            CurveParams::new(120, 48, 0.8, Vec2::new(15.0, -40.0), Color::BLACK).unwrap();
        let delta = moved.point_at(123.0) - at_origin.point_at(123.0);
        assert_abs_diff_eq!(delta.x, 15.0, epsilon = 1e-3);
        assert_abs_diff_eq!(delta.y, -40.0, epsilon = 1e-3);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        assert!(matches!(
            CurveParams::new(300, 0, 0.5, Vec2::ZERO, Color::BLACK),
            Err(ParamError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            CurveParams::new(100, 150, 0.5, Vec2::ZERO, Color::BLACK),
            Err(ParamError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_hole_ratios() {
        for bad in [0.0, -0.3, 1.01, f32::NAN] {
            assert!(matches!(
                CurveParams::new(300, 200, bad, Vec2::ZERO, Color::BLACK),
                Err(ParamError::InvalidRatio(_))
            ));
        }
        // the rim itself is allowed
        assert!(CurveParams::new(300, 200, 1.0, Vec2::ZERO, Color::BLACK).is_ok());
    }
}

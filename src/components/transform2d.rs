//! 2D affine transform value type.
//!
//! A [`Transform2D`] is a position/rotation/scale triple describing the
//! mapping between two coordinate spaces. It is the value stored inside
//! [`StageTransform`](super::stagetransform::StageTransform) and inside the
//! camera, and all stage↔screen conversions are built from its operations.
//!
//! Rotation is kept in degrees and is deliberately *not* normalized on
//! mutation; normalization into [0,360) happens at comparison and
//! interpolation time only, so multi-revolution deltas survive while an
//! interpolation is in flight.

use glam::Vec2;

/// Below this per-axis distance, position interpolation snaps to the target.
pub const POSITION_SNAP_THRESHOLD: f32 = 1.0;
/// Below this distance, scale interpolation snaps to the target.
pub const SCALE_SNAP_THRESHOLD: f32 = 0.01;
/// Below this angular distance in degrees, rotation interpolation snaps.
pub const ROTATION_SNAP_THRESHOLD: f32 = 0.1;
/// Smallest scale any transform is allowed to carry.
pub const MIN_SCALE: f32 = 1e-4;

/// Clamp a scale value to the safe positive range.
///
/// Non-finite and non-positive inputs collapse to [`MIN_SCALE`] so that a bad
/// zoom or API value never injects NaN or a negative scale into the
/// transform chain.
pub fn clamp_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > MIN_SCALE {
        scale
    } else {
        MIN_SCALE
    }
}

/// Normalize an angle in degrees into [0, 360).
pub fn normalize_rotation(degrees: f32) -> f32 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative can round up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Linear interpolation with a snap threshold.
///
/// When `a` and `b` are already closer than `threshold`, returns `b` exactly
/// instead of asymptotically approaching it.
pub fn lerp(a: f32, b: f32, rate: f32, threshold: f32) -> f32 {
    if (a - b).abs() < threshold {
        return b;
    }
    a * (1.0 - rate) + b * rate
}

/// Rotate a 2D vector by `angle_degrees` (counter-clockwise).
fn rotate(v: Vec2, angle_degrees: f32) -> Vec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    Vec2 {
        x: v.x * cos - v.y * sin,
        y: v.x * sin + v.y * cos,
    }
}

/// Position, rotation (degrees), and uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    /// Position in the parent space's units.
    pub position: Vec2,
    /// Rotation in degrees. Raw; see module docs for normalization rules.
    pub rotation: f32,
    /// Uniform scale. Must stay positive; callers clamp via [`clamp_scale`].
    pub scale: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Transform2D = Transform2D {
        position: Vec2::ZERO,
        rotation: 0.0,
        scale: 1.0,
    };

    pub fn new(position: Vec2, rotation: f32, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale: clamp_scale(scale),
        }
    }

    pub fn from_position(x: f32, y: f32) -> Self {
        Self {
            position: Vec2 { x, y },
            ..Self::IDENTITY
        }
    }

    /// Map a point from this transform's local space into its parent space:
    /// scale, then rotate, then translate.
    pub fn apply_to_point(&self, p: Vec2) -> Vec2 {
        self.position + rotate(p * self.scale, self.rotation)
    }

    /// Exact inverse of [`apply_to_point`](Self::apply_to_point): translate
    /// by `-position`, rotate by `-rotation`, scale by `1/scale`.
    pub fn inverse_apply_to_point(&self, p: Vec2) -> Vec2 {
        rotate(p - self.position, -self.rotation) / clamp_scale(self.scale)
    }

    /// Compose: express `other` (given in this transform's local space) in
    /// this transform's parent space.
    pub fn apply(&self, other: &Transform2D) -> Transform2D {
        Transform2D {
            position: self.apply_to_point(other.position),
            rotation: self.rotation + other.rotation,
            scale: self.scale * other.scale,
        }
    }

    /// Relativize: express `other` (given in this transform's parent space)
    /// in this transform's local space. Inverse of [`apply`](Self::apply).
    pub fn inverse_apply(&self, other: &Transform2D) -> Transform2D {
        Transform2D {
            position: self.inverse_apply_to_point(other.position),
            rotation: other.rotation - self.rotation,
            scale: other.scale / clamp_scale(self.scale),
        }
    }

    /// Negate the Y position component. Stage space is Y-up, screen space is
    /// Y-down; every stage↔screen conversion crosses exactly one flip.
    pub fn flip_y(&mut self) {
        self.position.y = -self.position.y;
    }

    pub fn translate_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Scale both the scale factor and the position. Used when reparenting
    /// the transform into a differently-scaled space.
    pub fn scale_by(&mut self, factor: f32) {
        self.scale = clamp_scale(self.scale * factor);
        self.position *= factor;
    }

    /// Field-wise equality, with rotation compared modulo 360.
    pub fn equals(&self, other: &Transform2D) -> bool {
        self.position == other.position
            && normalize_rotation(self.rotation) == normalize_rotation(other.rotation)
            && self.scale == other.scale
    }

    /// Advance this transform toward `target` by `rate` (0..=1).
    ///
    /// Position and scale interpolate linearly per axis with snap
    /// thresholds. Rotation normalizes both endpoints into [0,360) and takes
    /// the shorter arc across the 0/360 wrap.
    pub fn lerp_to(&mut self, target: &Transform2D, rate: f32) {
        self.position.x = lerp(
            self.position.x,
            target.position.x,
            rate,
            POSITION_SNAP_THRESHOLD,
        );
        self.position.y = lerp(
            self.position.y,
            target.position.y,
            rate,
            POSITION_SNAP_THRESHOLD,
        );
        self.scale = clamp_scale(lerp(self.scale, target.scale, rate, SCALE_SNAP_THRESHOLD));

        let current = normalize_rotation(self.rotation);
        let mut goal = normalize_rotation(target.rotation);
        if goal - current > 180.0 {
            goal -= 360.0;
        } else if current - goal > 180.0 {
            goal += 360.0;
        }
        self.rotation = lerp(current, goal, rate, ROTATION_SNAP_THRESHOLD);
    }

    /// The point `steps` units ahead along the current heading.
    ///
    /// Headings are measured clockwise from +Y, so the rest heading of 90°
    /// walks along +X. Negative steps walk backwards.
    pub fn forward_position(&self, steps: f32) -> Vec2 {
        let (mut steps, mut angle) = (steps, self.rotation);
        if steps < 0.0 {
            steps = -steps;
            angle += 180.0;
        }
        let (sin, cos) = angle.to_radians().sin_cos();
        self.position
            + Vec2 {
                x: steps * sin,
                y: steps * cos,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    fn random_transform() -> Transform2D {
        Transform2D::new(
            Vec2 {
                x: fastrand::f32() * 400.0 - 200.0,
                y: fastrand::f32() * 400.0 - 200.0,
            },
            fastrand::f32() * 720.0 - 360.0,
            fastrand::f32() * 2.0 + 0.25,
        )
    }

    #[test]
    fn apply_scales_rotates_then_translates() {
        let t = Transform2D::new(Vec2 { x: 10.0, y: 20.0 }, 90.0, 2.0);
        // (1, 0) scaled to (2, 0), rotated 90° CCW to (0, 2), translated
        let p = t.apply_to_point(Vec2 { x: 1.0, y: 0.0 });
        assert!(vec_approx_eq(p, Vec2 { x: 10.0, y: 22.0 }));
    }

    #[test]
    fn inverse_round_trips_points() {
        fastrand::seed(7);
        for _ in 0..50 {
            let t = random_transform();
            let p = Vec2 {
                x: fastrand::f32() * 200.0 - 100.0,
                y: fastrand::f32() * 200.0 - 100.0,
            };
            let back = t.apply_to_point(t.inverse_apply_to_point(p));
            assert!(vec_approx_eq(back, p), "transform {:?} point {:?}", t, p);
        }
    }

    #[test]
    fn compose_then_decompose_is_identity() {
        fastrand::seed(11);
        for _ in 0..50 {
            let a = random_transform();
            let b = random_transform();
            let back = a.inverse_apply(&a.apply(&b));
            assert!(vec_approx_eq(back.position, b.position));
            assert!(approx_eq(back.rotation, b.rotation));
            assert!(approx_eq(back.scale, b.scale));
        }
    }

    #[test]
    fn normalize_rotation_stays_in_range() {
        for r in [-720.0, -360.0, -90.0, -0.001, 0.0, 45.0, 360.0, 719.5, 3600.0] {
            let n = normalize_rotation(r);
            assert!((0.0..360.0).contains(&n), "{} -> {}", r, n);
        }
    }

    #[test]
    fn normalize_rotation_is_periodic() {
        for k in -3i32..=3 {
            let n = normalize_rotation(123.4 + 360.0 * k as f32);
            assert!(approx_eq(n, normalize_rotation(123.4)), "k={} -> {}", k, n);
        }
    }

    #[test]
    fn lerp_snaps_below_threshold() {
        assert!(approx_eq(lerp(0.0, 0.5, 0.1, 1.0), 0.5));
        assert!(approx_eq(lerp(0.0, 10.0, 0.5, 1.0), 5.0));
    }

    #[test]
    fn rotation_lerp_takes_shortest_arc() {
        let mut t = Transform2D {
            rotation: 350.0,
            ..Transform2D::IDENTITY
        };
        let target = Transform2D {
            rotation: 10.0,
            ..Transform2D::IDENTITY
        };
        t.lerp_to(&target, 0.5);
        // halfway through the 20° arc crossing 0, not out at 180
        assert!(approx_eq(normalize_rotation(t.rotation), 0.0), "{}", t.rotation);
    }

    #[test]
    fn rotation_lerp_converges_to_target() {
        let mut t = Transform2D {
            rotation: 350.0,
            ..Transform2D::IDENTITY
        };
        let target = Transform2D {
            rotation: 10.0,
            ..Transform2D::IDENTITY
        };
        for _ in 0..200 {
            t.lerp_to(&target, 0.05);
        }
        assert!(t.equals(&target));
    }

    #[test]
    fn flip_y_negates_only_y() {
        let mut t = Transform2D::from_position(3.0, 4.0);
        t.flip_y();
        assert!(vec_approx_eq(t.position, Vec2 { x: 3.0, y: -4.0 }));
    }

    #[test]
    fn scale_by_scales_position_too() {
        let mut t = Transform2D::new(Vec2 { x: 2.0, y: -3.0 }, 0.0, 1.5);
        t.scale_by(2.0);
        assert!(approx_eq(t.scale, 3.0));
        assert!(vec_approx_eq(t.position, Vec2 { x: 4.0, y: -6.0 }));
    }

    #[test]
    fn equals_compares_rotation_modulo_360() {
        let a = Transform2D {
            rotation: 370.0,
            ..Transform2D::IDENTITY
        };
        let b = Transform2D {
            rotation: 10.0,
            ..Transform2D::IDENTITY
        };
        assert!(a.equals(&b));
    }

    #[test]
    fn clamp_scale_rejects_invalid_input() {
        assert!(approx_eq(clamp_scale(2.0), 2.0));
        assert!(clamp_scale(0.0) > 0.0);
        assert!(clamp_scale(-3.0) > 0.0);
        assert!(clamp_scale(f32::NAN) > 0.0);
        assert!(clamp_scale(f32::INFINITY).is_finite());
    }

    #[test]
    fn forward_position_follows_heading() {
        let t = Transform2D {
            rotation: 90.0,
            ..Transform2D::IDENTITY
        };
        assert!(vec_approx_eq(
            t.forward_position(10.0),
            Vec2 { x: 10.0, y: 0.0 }
        ));
        assert!(vec_approx_eq(
            t.forward_position(-10.0),
            Vec2 { x: -10.0, y: 0.0 }
        ));
        let up = Transform2D::IDENTITY;
        assert!(vec_approx_eq(up.forward_position(5.0), Vec2 { x: 0.0, y: 5.0 }));
    }
}

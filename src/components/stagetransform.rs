//! Stage-frame transform component.
//!
//! Every scene object carries a [`StageTransform`]: its position, heading,
//! and scale in the stable stage frame, independent of camera motion. All
//! script-facing mutation goes through the explicit setters here, which mark
//! the `dirty` flag; the [`stage_to_screen`](crate::systems::sync::stage_to_screen)
//! system consumes the flag exactly once per frame and writes the matching
//! [`RenderPose`](super::renderpose::RenderPose) without ever marking it
//! dirty, so a camera-driven update can never loop back into this component.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::transform2d::{Transform2D, clamp_scale, normalize_rotation};

/// An object's transform in stage coordinates, plus the sync flag.
#[derive(Component, Clone, Copy, Debug)]
pub struct StageTransform {
    /// The stage-frame transform. Rotation doubles as the heading in
    /// degrees, clockwise from +Y (rest heading is 90°).
    pub transform: Transform2D,
    /// Set by the explicit setters, consumed once per frame by the sync
    /// pass. Never set by the sync systems themselves.
    pub dirty: bool,
}

impl Default for StageTransform {
    fn default() -> Self {
        Self::new(Transform2D::IDENTITY)
    }
}

impl StageTransform {
    /// New objects start dirty so the first sync pass projects them.
    pub fn new(transform: Transform2D) -> Self {
        Self {
            transform,
            dirty: true,
        }
    }

    pub fn from_xy(x: f32, y: f32) -> Self {
        Self::new(Transform2D::from_position(x, y))
    }

    /// Move to stage coordinates `(x, y)`.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.transform.position = Vec2 { x, y };
        self.dirty = true;
    }

    /// Set the heading in degrees. The raw value is stored; reporting and
    /// interpolation normalize into [0,360).
    pub fn set_heading(&mut self, degrees: f32) {
        self.transform.rotation = degrees;
        self.dirty = true;
    }

    /// Rotate clockwise by `degrees` (negative turns counter-clockwise).
    pub fn turn(&mut self, degrees: f32) {
        self.transform.rotation += degrees;
        self.dirty = true;
    }

    /// Set the scale factor, clamped to the safe positive range.
    pub fn set_scale(&mut self, scale: f32) {
        self.transform.scale = clamp_scale(scale);
        self.dirty = true;
    }

    /// Walk `steps` stage units along the current heading.
    pub fn forward(&mut self, steps: f32) {
        self.transform.position = self.transform.forward_position(steps);
        self.dirty = true;
    }

    /// Heading in degrees, normalized into [0,360).
    pub fn heading(&self) -> f32 {
        normalize_rotation(self.transform.rotation)
    }

    pub fn x(&self) -> f32 {
        self.transform.position.x
    }

    pub fn y(&self) -> f32 {
        self.transform.position.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn new_starts_dirty() {
        assert!(StageTransform::default().dirty);
        assert!(StageTransform::from_xy(1.0, 2.0).dirty);
    }

    #[test]
    fn setters_mark_dirty() {
        let mut st = StageTransform::default();
        st.dirty = false;
        st.set_position(5.0, -5.0);
        assert!(st.dirty);

        st.dirty = false;
        st.set_heading(45.0);
        assert!(st.dirty);

        st.dirty = false;
        st.set_scale(2.0);
        assert!(st.dirty);

        st.dirty = false;
        st.forward(10.0);
        assert!(st.dirty);
    }

    #[test]
    fn heading_reports_normalized_but_stores_raw() {
        let mut st = StageTransform::default();
        st.set_heading(450.0);
        assert!(approx_eq(st.transform.rotation, 450.0));
        assert!(approx_eq(st.heading(), 90.0));
    }

    #[test]
    fn turn_accumulates() {
        let mut st = StageTransform::default();
        st.set_heading(350.0);
        st.turn(20.0);
        assert!(approx_eq(st.transform.rotation, 370.0));
        assert!(approx_eq(st.heading(), 10.0));
        st.turn(-30.0);
        assert!(approx_eq(st.heading(), 340.0));
    }

    #[test]
    fn set_scale_clamps_non_positive() {
        let mut st = StageTransform::default();
        st.set_scale(-1.0);
        assert!(st.transform.scale > 0.0);
        st.set_scale(f32::NAN);
        assert!(st.transform.scale > 0.0);
    }

    #[test]
    fn forward_moves_along_heading() {
        let mut st = StageTransform::from_xy(10.0, 0.0);
        st.set_heading(90.0);
        st.forward(15.0);
        assert!(approx_eq(st.x(), 25.0));
        assert!(approx_eq(st.y(), 0.0));
    }
}

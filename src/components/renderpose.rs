//! Screen-frame pose component.
//!
//! The [`RenderPose`] is what a renderer would consume: position in screen
//! pixels (Y-down), heading in degrees, and final scale. It is normally
//! written by [`stage_to_screen`](crate::systems::sync::stage_to_screen);
//! hosts that reposition an object directly in screen coordinates use the
//! setters here, which mark `dirty` so the next
//! [`screen_to_stage`](crate::systems::sync::screen_to_stage) pass
//! reconciles the edit back into the object's
//! [`StageTransform`](super::stagetransform::StageTransform).

use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::transform2d::clamp_scale;

/// An object's rendered pose in screen coordinates, plus the sync flag.
#[derive(Component, Clone, Copy, Debug)]
pub struct RenderPose {
    /// Position in screen pixels, Y-down.
    pub position: Vec2,
    /// Heading in degrees.
    pub heading: f32,
    /// Final on-screen scale factor.
    pub scale: f32,
    /// Set by the explicit setters (a direct host reposition), consumed
    /// once per frame by the sync pass.
    pub dirty: bool,
}

impl Default for RenderPose {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
            scale: 1.0,
            dirty: false,
        }
    }
}

impl RenderPose {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2 { x, y },
            ..Self::default()
        }
    }

    /// Reposition directly in screen pixels.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2 { x, y };
        self.dirty = true;
    }

    pub fn set_heading(&mut self, degrees: f32) {
        self.heading = degrees;
        self.dirty = true;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = clamp_scale(scale);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity_and_clean() {
        let pose = RenderPose::default();
        assert_eq!(pose.position, Vec2::ZERO);
        assert_eq!(pose.heading, 0.0);
        assert_eq!(pose.scale, 1.0);
        assert!(!pose.dirty);
    }

    #[test]
    fn setters_mark_dirty() {
        let mut pose = RenderPose::default();
        pose.set_position(100.0, 50.0);
        assert!(pose.dirty);

        pose.dirty = false;
        pose.set_heading(30.0);
        assert!(pose.dirty);

        pose.dirty = false;
        pose.set_scale(0.5);
        assert!(pose.dirty);
    }

    #[test]
    fn set_scale_clamps_non_positive() {
        let mut pose = RenderPose::default();
        pose.set_scale(0.0);
        assert!(pose.scale > 0.0);
    }
}

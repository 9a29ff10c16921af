//! Viewport metrics resource.
//!
//! The viewport maps camera-relative stage units to screen pixels: a center
//! point (where the stage origin lands when the camera rests) and a uniform
//! scale factor. The Y-flip between the Y-up stage and the Y-down screen
//! happens here, on both directions of the conversion.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::transform2d::clamp_scale;

/// Screen-mapping metrics: center point in pixels and uniform scale.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Viewport {
    /// Pixel coordinates of the stage origin under a resting camera.
    pub center: Vec2,
    /// Pixels per stage unit.
    pub scale: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Viewport {
    /// Viewport for a `width` x `height` pixel surface, centered.
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self {
            center: Vec2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            scale: clamp_scale(scale),
        }
    }

    /// Screen pixels → camera-relative stage units (Y flipped to up).
    pub fn to_stage(&self, p: Vec2) -> Vec2 {
        let rel = (p - self.center) / clamp_scale(self.scale);
        Vec2 {
            x: rel.x,
            y: -rel.y,
        }
    }

    /// Camera-relative stage units → screen pixels (Y flipped to down).
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: p.x,
            y: -p.y,
        } * self.scale
            + self.center
    }
}

//! Visual-anchor offset component.
//!
//! The offset, in screen pixels, from an object's bounding-box corner to its
//! rotation/registration point. The sync pass subtracts it when projecting a
//! stage transform to a [`RenderPose`](super::renderpose::RenderPose) so the
//! pose position refers to the object's origin, and adds it back on the
//! inverse path. Objects without this component behave as if the offset were
//! zero.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Rotation/registration point offset in screen pixels.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct AnchorOffset {
    pub offset: Vec2,
}

impl AnchorOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            offset: Vec2 { x, y },
        }
    }
}

//! Per-frame pointer state resource.
//!
//! The host samples its input device once per frame into [`PointerState`];
//! the camera system then polls this snapshot instead of reacting to
//! discrete events, so pan/zoom behavior is deterministic per frame no
//! matter how many raw input events arrived. `scroll_delta` accumulates
//! within a frame and is cleared by [`PointerState::begin_frame`].

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::resources::camera::StageCamera;
use crate::resources::viewport::Viewport;

/// Snapshot of the pointer for the current frame.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct PointerState {
    /// Pointer position in screen pixels.
    pub position: Vec2,
    /// Whether the primary button is held.
    pub primary_down: bool,
    /// Whether the primary button went down this frame.
    pub primary_just_pressed: bool,
    /// Accumulated scroll units this frame (positive = scroll up).
    pub scroll_delta: f32,
}

impl PointerState {
    /// Reset the per-frame edges; call at the top of each frame before
    /// feeding new input.
    pub fn begin_frame(&mut self) {
        self.primary_just_pressed = false;
        self.scroll_delta = 0.0;
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2 { x, y };
    }

    pub fn press_primary(&mut self) {
        if !self.primary_down {
            self.primary_just_pressed = true;
        }
        self.primary_down = true;
    }

    pub fn release_primary(&mut self) {
        self.primary_down = false;
    }

    pub fn scroll(&mut self, delta: f32) {
        if delta.is_finite() {
            self.scroll_delta += delta;
        }
    }

    /// Camera-aware pointer position in stage coordinates. Without a camera
    /// the raw point is returned unchanged.
    pub fn stage_position(&self, viewport: &Viewport, camera: Option<&StageCamera>) -> Vec2 {
        match camera {
            Some(camera) => camera.pointer_to_stage(self.position, viewport),
            None => self.position,
        }
    }
}

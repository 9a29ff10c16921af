//! Per-tick camera advance.
//!
//! Runs once per frame, after [`screen_to_stage`] and before
//! [`stage_to_screen`], so camera state is resolved before objects are
//! projected through it.
//!
//! The system polls the frame's [`PointerState`] snapshot for the
//! user-control state machine (pan begin/track/abort, scroll zoom), derives
//! the effective target transform, applies the axis locks, and advances the
//! camera's current transform toward the target at the snap-derived rate.
//!
//! [`screen_to_stage`]: crate::systems::sync::screen_to_stage
//! [`stage_to_screen`]: crate::systems::sync::stage_to_screen

use bevy_ecs::prelude::*;

use crate::components::stagetransform::StageTransform;
use crate::components::transform2d::Transform2D;
use crate::resources::camera::{CameraTarget, StageCamera};
use crate::resources::pointer::PointerState;
use crate::resources::viewport::Viewport;

/// An object's rest heading; a camera held by an object at rest heading
/// should not appear rotated.
const REST_HEADING: f32 = 90.0;

/// Advance the camera one tick. Sets `camera.moved` for the sync pass.
pub fn camera_update(
    mut camera: ResMut<StageCamera>,
    pointer: Res<PointerState>,
    viewport: Res<Viewport>,
    targets: Query<&StageTransform>,
) {
    // Pointer state machine: only the user-controlled target listens.
    if camera.is_user_controlling() {
        if pointer.scroll_delta != 0.0 {
            camera.handle_mouse_scroll(pointer.scroll_delta);
        }
        if pointer.primary_just_pressed {
            camera.handle_mouse_down(pointer.position);
        }
    }

    // Track or abort a live pan from the polled pointer.
    let current_scale = camera.current.scale;
    let viewport_scale = viewport.scale;
    if let CameraTarget::UserControlled { transform, pan } = &mut camera.target {
        if pan.panning {
            if !pointer.primary_down {
                pan.panning = false;
            } else {
                let mut offset =
                    (pan.pointer_start - pointer.position) * (current_scale / viewport_scale);
                offset.y = -offset.y;
                transform.position = pan.camera_start + offset;
            }
        }
    }

    // Effective target transform. A followed object that no longer exists
    // degrades to a no-op tick.
    let effective = match &camera.target {
        CameraTarget::Rest => Some(Transform2D::IDENTITY),
        CameraTarget::Following { entity } => targets.get(*entity).ok().map(|stage| {
            let mut t = stage.transform;
            t.rotation -= REST_HEADING;
            t
        }),
        CameraTarget::UserControlled { transform, .. } => Some(*transform),
    };
    let Some(mut effective) = effective else {
        camera.moved = false;
        return;
    };

    // Locked axes hold the camera's current value. Locks never apply in
    // user-control mode.
    if !camera.is_user_controlling() {
        if camera.lock_position {
            effective.position = camera.current.position;
        }
        if camera.lock_heading {
            effective.rotation = camera.current.rotation;
        }
        if camera.lock_zoom {
            effective.scale = camera.current.scale;
        }
    }

    if camera.current.equals(&effective) {
        camera.moved = false;
        return;
    }

    let rate = camera.catch_up_rate();
    camera.current.lerp_to(&effective, rate);
    camera.moved = true;
}

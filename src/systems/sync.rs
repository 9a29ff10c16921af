//! Bidirectional stage↔screen transform synchronization.
//!
//! Two one-directional passes per frame keep each object's
//! [`StageTransform`] and [`RenderPose`] consistent without feedback loops:
//!
//! - [`screen_to_stage`] runs first and reconciles direct host edits of the
//!   render pose (and newly screen-placed objects) back into the stage
//!   transform, consuming `RenderPose::dirty`.
//! - [`stage_to_screen`] runs after the camera advance and projects every
//!   dirty stage transform (or every object, when the camera itself moved)
//!   into its render pose, consuming `StageTransform::dirty`.
//!
//! Neither pass ever sets the opposite side's dirty flag; each flag is
//! consumed exactly once per frame, which makes a
//! write-triggered-read-triggered-write cycle structurally impossible.
//!
//! # Schedule position
//!
//! `screen_to_stage` → [`camera_update`](crate::systems::camera::camera_update)
//! → `stage_to_screen`, once per rendered frame.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::anchoroffset::AnchorOffset;
use crate::components::renderpose::RenderPose;
use crate::components::stagetransform::StageTransform;
use crate::components::transform2d::{Transform2D, clamp_scale};
use crate::resources::camera::StageCamera;
use crate::resources::viewport::Viewport;

/// Project stage transforms into render poses.
///
/// An object is recomputed when its own stage transform is dirty or when the
/// camera moved this tick. Pose fields are assigned only where the value
/// actually changed, and the pose's dirty flag is never touched.
pub fn stage_to_screen(
    camera: Res<StageCamera>,
    viewport: Res<Viewport>,
    mut objects: Query<(&mut StageTransform, &mut RenderPose, Option<&AnchorOffset>)>,
) {
    for (mut stage, mut pose, anchor) in objects.iter_mut() {
        if !camera.moved && !stage.dirty {
            continue;
        }

        let mut relative = camera.current.inverse_apply(&stage.transform);
        relative.flip_y();

        let anchor_offset = anchor.map(|a| a.offset).unwrap_or(Vec2::ZERO);
        let position = relative.position * viewport.scale + viewport.center - anchor_offset;
        let heading = relative.rotation;
        let scale = relative.scale * viewport.scale;

        if pose.position != position {
            pose.position = position;
        }
        if pose.heading != heading {
            pose.heading = heading;
        }
        if pose.scale != scale {
            pose.scale = scale;
        }
        if stage.dirty {
            stage.dirty = false;
        }
    }
}

/// Reconcile directly-edited render poses back into stage transforms.
///
/// Exact inverse of [`stage_to_screen`]: undo the anchor offset and the
/// viewport mapping, flip Y back, then map through the camera's current
/// transform. The stage transform is written without marking it dirty.
pub fn screen_to_stage(
    camera: Res<StageCamera>,
    viewport: Res<Viewport>,
    mut objects: Query<(&mut StageTransform, &mut RenderPose, Option<&AnchorOffset>)>,
) {
    for (mut stage, mut pose, anchor) in objects.iter_mut() {
        if !pose.dirty {
            continue;
        }

        let anchor_offset = anchor.map(|a| a.offset).unwrap_or(Vec2::ZERO);
        let mut relative = Transform2D {
            position: (pose.position + anchor_offset - viewport.center)
                / clamp_scale(viewport.scale),
            rotation: pose.heading,
            scale: clamp_scale(pose.scale / clamp_scale(viewport.scale)),
        };
        relative.flip_y();

        stage.transform = camera.current.apply(&relative);
        pose.dirty = false;
    }
}

//! Camera command dispatch.
//!
//! Drains the [`CameraCmd`] message queue once per frame and applies each
//! command to the [`StageCamera`]. Snap values are clamped by the setter;
//! unknown object names and axis identifiers are logged and ignored.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::events::camera::CameraCmd;
use crate::resources::camera::{CameraAxis, StageCamera};
use crate::resources::stageindex::StageIndex;

/// Apply queued camera commands.
pub fn apply_camera_cmds(
    mut reader: MessageReader<CameraCmd>,
    mut camera: ResMut<StageCamera>,
    index: Res<StageIndex>,
) {
    for cmd in reader.read() {
        debug!("camera command: {:?}", cmd);
        match cmd {
            CameraCmd::Reset => camera.set_target(None),
            CameraCmd::Hold { target } => match index.get(target) {
                Some(entity) => camera.set_target(Some(entity)),
                None => warn!("hold camera: no object named '{}'", target),
            },
            CameraCmd::UserControl => camera.start_user_control(),
            CameraCmd::SetSnap { value } => camera.set_snap(*value),
            CameraCmd::SetAxisLock { axis, locked } => match CameraAxis::parse(axis) {
                Some(axis) => camera.set_axis_locked(axis, *locked),
                None => warn!("set camera lock: unknown axis '{}'", axis),
            },
        }
    }
}

/// Advance the ECS message queue for [`CameraCmd`].
///
/// Bevy ECS' [`Messages`] API requires calling `update()` once per frame to
/// make messages written this frame visible to readers in the same frame.
/// Run this before [`apply_camera_cmds`] in your schedule.
pub fn update_camera_cmds(mut msgs: ResMut<Messages<CameraCmd>>) {
    msgs.update();
}

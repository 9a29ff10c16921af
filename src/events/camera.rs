//! Camera commands from the scripting surface.
//!
//! A scripting layer (or any host UI) writes [`CameraCmd`] messages into the
//! ECS queue; [`apply_camera_cmds`](crate::systems::commands::apply_camera_cmds)
//! drains them once per frame. Bad values are clamped and unknown names or
//! axis identifiers are ignored with a warning; nothing here raises.

use bevy_ecs::message::Message;

/// Commands a scripting layer may bind to its camera blocks.
#[derive(Message, Debug, Clone)]
pub enum CameraCmd {
    /// "reset camera": return the target to rest.
    Reset,
    /// "hold camera": follow the named object's live transform.
    Hold { target: String },
    /// "let user control camera": hand pan/zoom to the user.
    UserControl,
    /// "set camera snap to N", clamped into [0,100].
    SetSnap { value: f32 },
    /// "set lock camera {position|heading|zoom} to B".
    SetAxisLock { axis: String, locked: bool },
}

//! The stage camera resource.
//!
//! One [`StageCamera`] exists per scene, inserted at scene initialization
//! and handed to systems through `Res`/`ResMut` parameters. It owns the
//! camera's current interpolated transform, the [`CameraTarget`] it tracks,
//! the snap rate, and the per-axis lock flags. The per-tick advance lives in
//! [`camera_update`](crate::systems::camera::camera_update); the methods
//! here are the state-machine transitions and the pointer-event handlers.

use bevy_ecs::prelude::{Entity, Resource};
use glam::Vec2;

use crate::components::transform2d::{Transform2D, clamp_scale};
use crate::resources::viewport::Viewport;

/// Multiplicative zoom step per scroll unit.
pub const ZOOM_STEP_BASE: f32 = 1.1;

/// Live pan-gesture bookkeeping inside a user-controlled target.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanState {
    /// Whether a drag is in progress.
    pub panning: bool,
    /// Pointer position (screen px) when the drag started.
    pub pointer_start: Vec2,
    /// Camera position (stage units) when the drag started.
    pub camera_start: Vec2,
}

/// What the camera tracks.
#[derive(Debug, Clone)]
pub enum CameraTarget {
    /// Default pseudo-target: the camera drifts back to the identity
    /// transform (stage origin, no rotation, unit zoom).
    Rest,
    /// Track an object's live stage transform; read fresh each tick, never
    /// copied.
    Following { entity: Entity },
    /// The user drives the camera through pan and zoom input.
    UserControlled {
        transform: Transform2D,
        pan: PanState,
    },
}

/// Axis selector for the lock flags, as exposed to the scripting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAxis {
    Position,
    Heading,
    Zoom,
}

impl CameraAxis {
    /// Parse a scripting-surface axis identifier. Unknown names yield
    /// `None`; callers treat that as a no-op.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "position" => Some(Self::Position),
            "heading" | "rotation" => Some(Self::Heading),
            "zoom" | "scale" => Some(Self::Zoom),
            _ => None,
        }
    }
}

/// The scene's camera: current transform, target, snap, and locks.
#[derive(Resource, Debug, Clone)]
pub struct StageCamera {
    /// The interpolated transform that actually drives the screen mapping.
    pub current: Transform2D,
    pub target: CameraTarget,
    /// Catch-up rate control in [0,100]; 0 = slow cinematic drift, 100 =
    /// instant lock-on.
    snap: f32,
    /// Hold the current position while following. Inert under user control.
    pub lock_position: bool,
    /// Hold the current heading while following. Inert under user control.
    pub lock_heading: bool,
    /// Hold the current zoom while following. Inert under user control.
    pub lock_zoom: bool,
    /// Whether the last update changed `current`; downstream sync uses this
    /// to skip untouched objects.
    pub moved: bool,
}

impl Default for StageCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl StageCamera {
    pub fn new() -> Self {
        Self {
            current: Transform2D::IDENTITY,
            target: CameraTarget::Rest,
            snap: 100.0,
            lock_position: false,
            lock_heading: false,
            lock_zoom: false,
            moved: false,
        }
    }

    /// Track `entity`'s live transform, or return to rest with `None`.
    pub fn set_target(&mut self, entity: Option<Entity>) {
        self.target = match entity {
            Some(entity) => CameraTarget::Following { entity },
            None => CameraTarget::Rest,
        };
    }

    /// Hand the camera to the user: snapshot the current transform as the
    /// new owned target, with rotation forced to zero (no user tilt).
    pub fn start_user_control(&mut self) {
        let mut transform = self.current;
        transform.rotation = 0.0;
        self.target = CameraTarget::UserControlled {
            transform,
            pan: PanState::default(),
        };
    }

    pub fn is_user_controlling(&self) -> bool {
        matches!(self.target, CameraTarget::UserControlled { .. })
    }

    pub fn is_holding(&self, entity: Entity) -> bool {
        matches!(self.target, CameraTarget::Following { entity: held } if held == entity)
    }

    pub fn is_panning(&self) -> bool {
        matches!(
            self.target,
            CameraTarget::UserControlled {
                pan: PanState { panning: true, .. },
                ..
            }
        )
    }

    /// Begin a pan gesture. Consumed only while user-controlling.
    pub fn handle_mouse_down(&mut self, pointer: Vec2) -> bool {
        let camera_start = self.current.position;
        match &mut self.target {
            CameraTarget::UserControlled { pan, .. } => {
                pan.panning = true;
                pan.pointer_start = pointer;
                pan.camera_start = camera_start;
                true
            }
            _ => false,
        }
    }

    /// Zoom by `1.1^(-delta)` per scroll unit. Consumed only while
    /// user-controlling and not mid-pan. The result is clamped positive, so
    /// repeated zoom-out can never reach zero.
    pub fn handle_mouse_scroll(&mut self, delta: f32) -> bool {
        if !delta.is_finite() {
            return false;
        }
        match &mut self.target {
            CameraTarget::UserControlled { transform, pan } if !pan.panning => {
                transform.scale = clamp_scale(transform.scale * ZOOM_STEP_BASE.powf(-delta));
                true
            }
            _ => false,
        }
    }

    pub fn snap(&self) -> f32 {
        self.snap
    }

    /// Set the snap rate, clamped into [0,100]. Non-finite input is ignored.
    pub fn set_snap(&mut self, value: f32) {
        if value.is_finite() {
            self.snap = value.clamp(0.0, 100.0);
        }
    }

    /// Per-tick catch-up rate: `0.05 + 0.95 * (snap/100)^4`. The quartic
    /// keeps the low end cinematic and the high end effectively instant.
    pub fn catch_up_rate(&self) -> f32 {
        0.05 + 0.95 * (self.snap / 100.0).powi(4)
    }

    pub fn set_axis_locked(&mut self, axis: CameraAxis, locked: bool) {
        match axis {
            CameraAxis::Position => self.lock_position = locked,
            CameraAxis::Heading => self.lock_heading = locked,
            CameraAxis::Zoom => self.lock_zoom = locked,
        }
    }

    pub fn is_axis_locked(&self, axis: CameraAxis) -> bool {
        match axis {
            CameraAxis::Position => self.lock_position,
            CameraAxis::Heading => self.lock_heading,
            CameraAxis::Zoom => self.lock_zoom,
        }
    }

    /// Map a screen-pixel pointer position into stage coordinates under the
    /// current camera transform. Scripted pointer queries go through this so
    /// they stay camera-aware even though raw input arrives in fixed screen
    /// coordinates.
    pub fn pointer_to_stage(&self, pointer: Vec2, viewport: &Viewport) -> Vec2 {
        self.current.apply_to_point(viewport.to_stage(pointer))
    }
}

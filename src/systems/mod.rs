//! Frame-driven systems.
//!
//! Submodules overview
//! - [`camera`] – advance the camera toward its target once per tick
//! - [`commands`] – drain and apply scripting-surface camera commands
//! - [`sync`] – the stage↔screen transform synchronization passes
//!
//! Per-frame order: command dispatch, [`sync::screen_to_stage`],
//! [`camera::camera_update`], [`sync::stage_to_screen`].

pub mod camera;
pub mod commands;
pub mod sync;

//! ECS resources made available to systems.
//!
//! This module groups the long-lived data inserted into the ECS world at
//! scene initialization and threaded to systems through `Res`/`ResMut`
//! parameters; nothing here is reachable through an ambient global.
//!
//! Overview
//! - `camera` – the scene's single camera: current transform, target, snap, locks
//! - `config` – INI-backed settings with safe defaults
//! - `pointer` – polled per-frame pointer snapshot
//! - `stageindex` – name → entity registry for the command surface
//! - `viewport` – screen-mapping metrics (center point and uniform scale)

pub mod camera;
pub mod config;
pub mod pointer;
pub mod stageindex;
pub mod viewport;

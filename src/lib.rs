//! Stagecam library.
//!
//! A headless stage/camera subsystem: per-object stage-frame transforms, a
//! following/user-controlled 2D camera, and the frame-driven synchronization
//! that keeps stage transforms and render poses consistent. This module
//! exposes the ECS components, resources, systems, and messages for use in
//! integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod resources;
pub mod scene;
pub mod systems;

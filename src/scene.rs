//! Scene object lifecycle.
//!
//! Explicit spawn/despawn helpers replace any post-hoc hooking of the host's
//! object lifecycle: spawning an object creates its transform components in
//! one bundle and registers its name, and the dirty flag on the freshly
//! created side makes the first sync pass bring the other side up to date.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::anchoroffset::AnchorOffset;
use crate::components::renderpose::RenderPose;
use crate::components::stagetransform::StageTransform;
use crate::components::transform2d::Transform2D;
use crate::resources::stageindex::StageIndex;

/// Spawn an object at a stage-frame transform.
///
/// The stage side starts dirty, so the next
/// [`stage_to_screen`](crate::systems::sync::stage_to_screen) pass projects
/// the object into its render pose.
pub fn spawn_object(world: &mut World, name: &str, transform: Transform2D) -> Entity {
    let entity = world
        .spawn((
            StageTransform::new(transform),
            RenderPose::default(),
            AnchorOffset::default(),
        ))
        .id();
    world.resource_mut::<StageIndex>().register(name, entity);
    debug!("spawned '{}' as {:?}", name, entity);
    entity
}

/// Spawn an object placed directly in screen coordinates.
///
/// The pose side starts dirty, so the next
/// [`screen_to_stage`](crate::systems::sync::screen_to_stage) pass derives
/// the object's stage transform from it.
pub fn spawn_object_at_pose(world: &mut World, name: &str, pose: RenderPose) -> Entity {
    let mut pose = pose;
    pose.dirty = true;
    let stage = StageTransform {
        transform: Transform2D::IDENTITY,
        dirty: false,
    };
    let entity = world
        .spawn((stage, pose, AnchorOffset::default()))
        .id();
    world.resource_mut::<StageIndex>().register(name, entity);
    debug!("spawned '{}' at pose as {:?}", name, entity);
    entity
}

/// Despawn a named object and drop its registry entry. Returns whether the
/// object existed.
pub fn despawn_object(world: &mut World, name: &str) -> bool {
    let Some(entity) = world.resource_mut::<StageIndex>().unregister(name) else {
        return false;
    };
    world.despawn(entity)
}

/// Scatter `count` demo objects across the stage.
pub fn populate_demo(world: &mut World, count: u32) {
    for i in 0..count {
        let transform = Transform2D::new(
            glam::Vec2 {
                x: fastrand::f32() * 320.0 - 160.0,
                y: fastrand::f32() * 240.0 - 120.0,
            },
            90.0,
            1.0,
        );
        spawn_object(world, &format!("object-{}", i), transform);
    }
}

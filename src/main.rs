//! Stagecam main entry point.
//!
//! A headless stage/camera simulation using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for 2D vector math
//!
//! The binary runs a scripted session against the camera subsystem: a few
//! objects are scattered across the stage, the camera is told to follow one
//! of them while it orbits, control is handed to the user for a drag-pan and
//! a scroll-zoom, and finally the camera is reset to rest. Camera state is
//! logged as the script progresses.
//!
//! # Main Loop
//!
//! Once per simulated frame, in order:
//! 1. Feed the frame's scripted pointer input and commands
//! 2. Pump and apply queued camera commands
//! 3. Reconcile direct render-pose edits back into stage transforms
//! 4. Advance the camera toward its target
//! 5. Project stage transforms through the camera into render poses
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

mod components;
mod events;
mod resources;
mod scene;
mod systems;

use std::path::PathBuf;

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::info;

use crate::components::stagetransform::StageTransform;
use crate::events::camera::CameraCmd;
use crate::resources::camera::{CameraTarget, StageCamera};
use crate::resources::config::StageConfig;
use crate::resources::pointer::PointerState;
use crate::resources::stageindex::StageIndex;
use crate::resources::viewport::Viewport;
use crate::systems::camera::camera_update;
use crate::systems::commands::{apply_camera_cmds, update_camera_cmds};
use crate::systems::sync::{screen_to_stage, stage_to_screen};

/// Headless stage/camera simulation
#[derive(Parser)]
#[command(version, about = "Stagecam: a headless stage/camera subsystem demo")]
struct Cli {
    /// Path to the INI configuration file (default: ./stagecam.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 240)]
    ticks: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => StageConfig::with_path(path),
        None => StageConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(Viewport::new(
        config.viewport_width,
        config.viewport_height,
        config.viewport_scale,
    ));
    world.insert_resource(PointerState::default());
    world.insert_resource(StageIndex::default());
    world.init_resource::<Messages<CameraCmd>>();

    let mut camera = StageCamera::new();
    camera.set_snap(config.snap);
    world.insert_resource(camera);

    fastrand::seed(42);
    scene::populate_demo(&mut world, config.demo_objects.max(1));
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_camera_cmds,
            apply_camera_cmds,
            screen_to_stage,
            camera_update,
            stage_to_screen,
        )
            .chain(),
    );

    // --------------- Main loop ---------------
    info!("Simulating {} frames", cli.ticks);
    for tick in 0..cli.ticks {
        script_input(&mut world, tick);
        update.run(&mut world);
        world.clear_trackers();

        if tick % 30 == 0 {
            log_camera(&world, tick);
        }
    }
    log_camera(&world, cli.ticks);
}

/// Write a command into the queue, as a scripting layer would.
fn send(world: &mut World, cmd: CameraCmd) {
    world.resource_mut::<Messages<CameraCmd>>().write(cmd);
}

/// The scripted session: follow an orbiting object, hand control to the
/// user for a drag-pan and a zoom-out, then reset.
fn script_input(world: &mut World, tick: u32) {
    world.resource_mut::<PointerState>().begin_frame();

    match tick {
        20 => send(
            world,
            CameraCmd::Hold {
                target: "object-0".into(),
            },
        ),
        80 => send(
            world,
            CameraCmd::SetAxisLock {
                axis: "heading".into(),
                locked: true,
            },
        ),
        120 => send(world, CameraCmd::UserControl),
        200 => send(world, CameraCmd::SetSnap { value: 25.0 }),
        230 => send(world, CameraCmd::Reset),
        _ => {}
    }

    // Orbit the held object around the stage origin.
    if (20..120).contains(&tick) {
        if let Some(entity) = world.resource::<StageIndex>().get("object-0") {
            let angle = tick as f32 * 3.0;
            let rad = angle.to_radians();
            if let Some(mut stage) = world.get_mut::<StageTransform>(entity) {
                stage.set_position(80.0 * rad.cos(), 80.0 * rad.sin());
                stage.set_heading(90.0 - angle);
            }
        }
    }

    // Drag-pan while user-controlled.
    if (130..=170).contains(&tick) {
        let mut pointer = world.resource_mut::<PointerState>();
        if tick == 130 {
            pointer.move_to(240.0, 180.0);
            pointer.press_primary();
        } else if tick == 170 {
            pointer.release_primary();
        } else {
            let t = (tick - 130) as f32;
            pointer.move_to(240.0 - t * 2.0, 180.0 + t);
        }
    }

    // Zoom out a little.
    if (180..190).contains(&tick) {
        world.resource_mut::<PointerState>().scroll(-1.0);
    }
}

fn log_camera(world: &World, tick: u32) {
    let camera = world.resource::<StageCamera>();
    let viewport = world.resource::<Viewport>();
    let pointer = world.resource::<PointerState>();
    let target = match &camera.target {
        CameraTarget::Rest => "rest",
        CameraTarget::Following { .. } => "following",
        CameraTarget::UserControlled { .. } => "user",
    };
    let stage_pointer = pointer.stage_position(viewport, Some(camera));
    info!(
        "tick {:3}: target={} pos=({:8.2},{:8.2}) rot={:7.2} scale={:.3} pointer@({:.1},{:.1})",
        tick,
        target,
        camera.current.position.x,
        camera.current.position.y,
        camera.current.rotation,
        camera.current.scale,
        stage_pointer.x,
        stage_pointer.y,
    );
}

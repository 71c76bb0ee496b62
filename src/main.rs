//! Headless runner for the AutoGestionPro HQ scene.
//!
//! Plays the host's role without rendering: advances the scene at a fixed
//! frame rate, simulates clicks on the red box and an elevator trip, reports
//! a player position, logs the audio and announcement requests the scene
//! emits, and runs console commands at the end.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames 600 --click-at 60 --floor 3 --player 8,3,8 --command speed
//! ```

use std::path::PathBuf;

use agp_scene::components::transform::Transform3D;
use agp_scene::events::announcement::Announcement;
use agp_scene::events::audio::AudioCmd;
use agp_scene::resources::player::PlayerPosition;
use agp_scene::resources::sceneconfig::SceneConfig;
use agp_scene::resources::skycolor::SkyColor;
use agp_scene::scene::{build_schedule, click, run_frame, select_floor, setup};
use agp_scene::systems::console::execute_command;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{debug, error, info, warn};

/// AutoGestionPro HQ scene, headless.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Scene configuration file (INI). Defaults to ./scene.ini when present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Click the red box at this frame. Repeatable.
    #[arg(long = "click-at", value_name = "FRAME")]
    click_at: Vec<u64>,

    /// Console command to run after the simulation. Repeatable.
    #[arg(long = "command", value_name = "CMD")]
    commands: Vec<String>,

    /// Report a night sky from the first frame.
    #[arg(long)]
    night: bool,

    /// Click the elevator and send it to this floor on the first frame.
    #[arg(long, value_name = "INDEX")]
    floor: Option<usize>,

    /// Report the player standing at X,Y,Z.
    #[arg(long, value_name = "X,Y,Z", value_delimiter = ',', num_args = 3)]
    player: Vec<f32>,
}

fn load_config(path: Option<PathBuf>) -> Result<SceneConfig, String> {
    match path {
        Some(path) => {
            let mut config = SceneConfig::with_path(path);
            config.load_from_file().map_err(|e| e.to_string())?;
            Ok(config)
        }
        None => {
            let mut config = SceneConfig::new();
            if let Err(e) = config.load_from_file() {
                info!("Using default scene config ({})", e);
                config = SceneConfig::new();
            }
            Ok(config)
        }
    }
}

fn drain_host_messages(world: &mut World) {
    for cmd in world.resource_mut::<Messages<AudioCmd>>().drain() {
        debug!("[audio] {:?}", cmd);
    }
    for announcement in world.resource_mut::<Messages<Announcement>>().drain() {
        info!("[led] {}", announcement.text);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match load_config(cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let debug_enabled = config.debug_enabled;

    let mut world = World::new();
    let entities = match setup(&mut world, config) {
        Ok(entities) => entities,
        Err(e) => {
            error!("Invalid scene configuration: {}", e);
            std::process::exit(1);
        }
    };
    if cli.night {
        world.insert_resource(SkyColor::NIGHT);
    }
    if let [x, y, z] = cli.player[..] {
        world.insert_resource(PlayerPosition::at(x, y, z));
    }
    if let Some(floor) = cli.floor {
        click(&mut world, entities.elevator);
        select_floor(&mut world, entities.elevator, floor);
    }

    let mut update = build_schedule(debug_enabled);
    let dt = if cli.fps > 0.0 { 1.0 / cli.fps } else { 1.0 / 60.0 };

    info!("Running {} frames at {} fps", cli.frames, 1.0 / dt);
    for frame in 0..cli.frames {
        if cli.click_at.contains(&frame) {
            click(&mut world, entities.red_box);
        }
        run_frame(&mut world, &mut update, dt);
        drain_host_messages(&mut world);
    }

    if let Some(t) = world.get::<Transform3D>(entities.sphere) {
        info!(
            "Sphere at ({:.2}, {:.2}, {:.2}) after {} frames",
            t.position.x, t.position.y, t.position.z, cli.frames
        );
    }

    for line in &cli.commands {
        match execute_command(&mut world, line) {
            Ok(output) => {
                for out in output {
                    println!("{out}");
                }
            }
            Err(e) => warn!("{}", e),
        }
    }
}

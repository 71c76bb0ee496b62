//! Debug console commands and dispatcher.
//!
//! [`builtin_console`] builds a [`DebugConsole`] with the stock commands;
//! [`execute_command`] parses a line and runs the matching command against
//! the world. [`console_command_system`] drains [`PendingCommands`] once per
//! frame and logs the output.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::animator::OrbitAnimator;
use crate::components::group::Group;
use crate::components::marker::DebugMarker;
use crate::components::nightlight::Emissive;
use crate::components::speedboost::SpeedBoost;
use crate::components::transform::Transform3D;
use crate::error::ConsoleError;
use crate::events::speedboost::SpeedBoostStarted;
use crate::resources::debugconsole::{DebugConsole, DebugSettings, PendingCommands};
use crate::resources::perfmonitor::PerfMonitor;
use crate::resources::player::PlayerPosition;

/// Console with every built-in command registered.
pub fn builtin_console() -> DebugConsole {
    let mut console = DebugConsole::new();
    console.register("help", "Show this help message", "", cmd_help);
    console.register("fps", "Show current FPS", "", cmd_fps);
    console.register("entities", "List all entities with a transform", "", cmd_entities);
    console.register("count", "Show entity count", "", cmd_count);
    console.register("config", "Show debug configuration", "", cmd_config);
    console.register("toggle", "Toggle debug setting", "<setting>", cmd_toggle);
    console.register(
        "marker",
        "Create debug marker at position",
        "<x> <y> <z>",
        cmd_marker,
    );
    console.register("clearmarkers", "Remove all debug markers", "", cmd_clear_markers);
    console.register("stats", "Show performance statistics", "", cmd_stats);
    console.register("boost", "Boost every orbit animator", "", cmd_boost);
    console.register("speed", "Show orbit animator speed state", "", cmd_speed);
    console
}

/// Parse `line` and run the command it names.
pub fn execute_command(world: &mut World, line: &str) -> Result<Vec<String>, ConsoleError> {
    let mut parts = line.split_whitespace();
    let name = parts.next().ok_or(ConsoleError::Empty)?.to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    let run = world
        .get_resource::<DebugConsole>()
        .and_then(|console| console.get(&name))
        .map(|spec| spec.run)
        .ok_or_else(|| ConsoleError::UnknownCommand(name.clone()))?;

    if world
        .get_resource::<DebugSettings>()
        .is_some_and(|s| s.verbose_logging)
    {
        debug!("Running console command '{}' {:?}", name, args);
    }
    run(world, &args)
}

/// Drain queued command lines and log their output.
pub fn console_command_system(world: &mut World) {
    let lines = match world.get_resource_mut::<PendingCommands>() {
        Some(mut pending) => std::mem::take(&mut pending.lines),
        None => return,
    };
    for line in lines {
        match execute_command(world, &line) {
            Ok(output) => {
                for out in output {
                    info!("{}", out);
                }
            }
            Err(e) => warn!("{}", e),
        }
    }
}

fn transform_count(world: &mut World) -> usize {
    world.query::<&Transform3D>().iter(world).count()
}

fn cmd_help(world: &mut World, _args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    let mut out = vec!["=== Available Debug Commands ===".to_string()];
    if let Some(console) = world.get_resource::<DebugConsole>() {
        for spec in console.specs() {
            if spec.usage.is_empty() {
                out.push(format!("{} - {}", spec.name, spec.help));
            } else {
                out.push(format!("{} {} - {}", spec.name, spec.usage, spec.help));
            }
        }
    }
    out.push("================================".to_string());
    Ok(out)
}

fn cmd_fps(world: &mut World, _args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    let fps = world.get_resource::<PerfMonitor>().map_or(0, |p| p.fps());
    Ok(vec![format!("Current FPS: {fps}")])
}

fn cmd_entities(world: &mut World, _args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    let mut rows: Vec<(Entity, Transform3D, Option<String>)> = world
        .query::<(Entity, &Transform3D, Option<&Group>)>()
        .iter(world)
        .map(|(e, t, g)| (e, *t, g.map(|g| g.name().to_string())))
        .collect();
    rows.sort_by_key(|(e, _, _)| *e);

    let mut out = vec!["=== Entity List ===".to_string()];
    for (i, (entity, t, group)) in rows.iter().enumerate() {
        out.push(format!(
            "Entity {}: ID={:?} [{}] Position=({:.2}, {:.2}, {:.2})",
            i,
            entity,
            group.as_deref().unwrap_or("-"),
            t.position.x,
            t.position.y,
            t.position.z
        ));
    }
    out.push(format!("Total entities: {}", rows.len()));
    Ok(out)
}

fn cmd_count(world: &mut World, _args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    Ok(vec![format!("Total entities: {}", transform_count(world))])
}

fn cmd_config(world: &mut World, _args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    let settings = world
        .get_resource::<DebugSettings>()
        .cloned()
        .unwrap_or_default();
    let json = serde_json::to_string_pretty(&settings).map_err(|e| ConsoleError::Failed {
        command: "config".into(),
        detail: e.to_string(),
    })?;
    let mut out = vec!["=== Debug Configuration ===".to_string()];
    out.extend(json.lines().map(str::to_string));
    Ok(out)
}

fn cmd_toggle(world: &mut World, args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    let bad = |reason: &str| ConsoleError::BadArguments {
        command: "toggle".into(),
        reason: reason.into(),
        usage: "toggle <setting>".into(),
    };
    let setting = args.first().ok_or_else(|| bad("missing setting name"))?;
    let mut settings = world.get_resource_or_init::<DebugSettings>();
    let value = settings
        .toggle(&setting.to_ascii_lowercase())
        .ok_or_else(|| bad(&format!("unknown setting '{setting}'")))?;
    Ok(vec![format!("{setting} is now {value}")])
}

fn cmd_marker(world: &mut World, args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    let coord = |i: usize, default: f32| {
        args.get(i)
            .and_then(|a| a.parse::<f32>().ok())
            .filter(|v| *v != 0.0)
            .unwrap_or(default)
    };
    let (x, y, z) = (coord(0, 0.0), coord(1, 1.0), coord(2, 0.0));
    world.spawn((
        Transform3D::from_xyz(x, y, z).with_scale(0.3, 0.3, 0.3),
        DebugMarker,
        Emissive::LIT,
        Group::new("marker"),
    ));
    Ok(vec![format!("Debug marker created at ({x}, {y}, {z})")])
}

fn cmd_clear_markers(world: &mut World, _args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    let markers: Vec<Entity> = world
        .query_filtered::<Entity, With<DebugMarker>>()
        .iter(world)
        .collect();
    for marker in &markers {
        world.despawn(*marker);
    }
    Ok(vec![format!("Debug markers cleared ({})", markers.len())])
}

fn cmd_stats(world: &mut World, _args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    let stats = world
        .get_resource::<PerfMonitor>()
        .map(|p| p.stats())
        .unwrap_or_else(|| PerfMonitor::default().stats());
    let settings = world
        .get_resource::<DebugSettings>()
        .cloned()
        .unwrap_or_default();
    let mut out = vec!["=== Performance Statistics ===".to_string(), stats];
    if settings.show_entity_count {
        out.push(format!("Entities: {}", transform_count(world)));
    }
    if settings.show_player_position {
        match world.get_resource::<PlayerPosition>().and_then(|p| p.0) {
            Some(p) => out.push(format!("Player: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z)),
            None => out.push("Player: unknown".to_string()),
        }
    }
    out.push("==============================".to_string());
    Ok(out)
}

fn cmd_boost(world: &mut World, _args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    let mut started = Vec::new();
    for (entity, mut boost) in world.query::<(Entity, &mut SpeedBoost)>().iter_mut(world) {
        boost.trigger();
        started.push(SpeedBoostStarted {
            animator: entity,
            multiplier: boost.multiplier,
        });
    }
    let out = started
        .iter()
        .map(|s| format!("Animator {:?} boosted to {}x", s.animator, s.multiplier))
        .collect();
    for event in started {
        world.trigger(event);
    }
    Ok(out)
}

fn cmd_speed(world: &mut World, _args: &[&str]) -> Result<Vec<String>, ConsoleError> {
    let mut out: Vec<String> = world
        .query::<(Entity, &SpeedBoost, Option<&OrbitAnimator>)>()
        .iter(world)
        .map(|(entity, boost, animator)| {
            format!(
                "Animator {:?}: x{:.2} {:?}, {} frames left, t={:.1}",
                entity,
                boost.multiplier,
                boost.phase(),
                boost.remaining_frames(),
                animator.map_or(0.0, |a| a.time)
            )
        })
        .collect();
    if out.is_empty() {
        out.push("No orbit animators".to_string());
    }
    Ok(out)
}

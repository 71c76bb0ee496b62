//! AutoGestionPro HQ scene setup and frame driver.
//!
//! [`setup`] inserts the resources, registers the pointer observers and
//! spawns the scene; [`build_schedule`] orders the per-frame systems and
//! [`run_frame`] is the hook the host calls once per rendered frame.
//!
//! Between frames the host delivers input through [`click`],
//! [`pointer_down`] and [`select_floor`]. Each triggers the event and then
//! flushes the world, so whatever the observers queued (boost notifications,
//! elevator tweens) is applied before the call returns.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::info;

use crate::components::animator::OrbitAnimator;
use crate::components::audiozone::{AmbientSpeaker, AudioZone, BuildingBounds, TriggerBox};
use crate::components::elevator::{Elevator, Floor};
use crate::components::group::Group;
use crate::components::interactive::{BoostTrigger, Clickable, Interaction, SoundClip};
use crate::components::ledboard::LedBoard;
use crate::components::nightlight::{Emissive, NightLight};
use crate::components::spin::Spin;
use crate::components::transform::Transform3D;
use crate::error::ConfigError;
use crate::events::announcement::Announcement;
use crate::events::audio::AudioCmd;
use crate::events::elevator::FloorSelected;
use crate::events::pointer::PointerDownEvent;
use crate::resources::debugconsole::{DebugSettings, PendingCommands};
use crate::resources::perfmonitor::PerfMonitor;
use crate::resources::player::PlayerPosition;
use crate::resources::rng::SceneRng;
use crate::resources::sceneconfig::SceneConfig;
use crate::resources::skycolor::SkyColor;
use crate::resources::worldtime::WorldTime;
use crate::systems::audiozones::audio_zone_system;
use crate::systems::console::{builtin_console, console_command_system};
use crate::systems::elevator::{
    elevator_arrival_system, elevator_prompt_observer, floor_selected_observer,
};
use crate::systems::ledboard::led_board_system;
use crate::systems::messages::{update_announcements, update_audio_cmds};
use crate::systems::nightlights::night_lights_system;
use crate::systems::orbit::orbit_animation_system;
use crate::systems::perf::perf_monitor_system;
use crate::systems::pointer::{boost_on_click_observer, interaction_observer};
use crate::systems::spin::spin_system;
use crate::systems::time::update_world_time;
use crate::systems::tween::tween_translation_system;

pub const LED_MESSAGES: [&str; 5] = [
    "BIENVENIDOS A AGP",
    "AUTOGESTIÓN PROFESIONAL",
    "VISITANTES ONLINE: {visitors}",
    "OFICINAS DISPONIBLES",
    "NUEVA EXPO NFT GALLERY",
];

const LIGHT_POSITIONS: [(f32, f32, f32); 9] = [
    (5.0, 7.0, 2.0),
    (11.0, 7.0, 2.0),
    (8.0, 11.0, 2.0),
    (3.0, 15.0, 13.0),
    (13.0, 15.0, 13.0),
    (0.5, 19.0, 0.5),
    (15.5, 19.0, 0.5),
    (0.5, 19.0, 15.5),
    (15.5, 19.0, 15.5),
];

const FLOORS: [(&str, f32); 5] = [
    ("Planta Baja (Recepción)", 1.0),
    ("Piso 1 (Oficinas)", 5.0),
    ("Piso 2 (Oficinas)", 9.0),
    ("Piso 3 (Galería/Snack)", 13.0),
    ("Azotea (Drone)", 17.0),
];

/// Name, clip, volume, centre and size of each ambient zone.
const AUDIO_ZONES: [(&str, &str, f32, [f32; 3], [f32; 3]); 4] = [
    ("lobby", "sounds/lobby-music.wav", 0.4, [8.0, 3.0, 8.0], [16.0, 5.0, 16.0]),
    ("offices", "sounds/office-ambience.wav", 0.2, [8.0, 9.0, 8.0], [16.0, 8.0, 16.0]),
    ("gallery", "sounds/ambient-gallery.wav", 0.3, [8.0, 15.0, 8.0], [16.0, 5.0, 16.0]),
    ("rooftop", "sounds/rooftop-stream.mp3", 0.5, [8.0, 20.0, 8.0], [16.0, 8.0, 16.0]),
];

const BUILDING_CENTER: [f32; 3] = [8.0, 10.0, 8.0];
const BUILDING_SIZE: [f32; 3] = [22.0, 25.0, 22.0];

/// Handles to the entities the host and tests interact with.
#[derive(Debug, Clone, Copy)]
pub struct SceneEntities {
    /// The orbiting blue sphere.
    pub sphere: Entity,
    /// Controller carrying the sphere's animator, motion law and speed state.
    pub animator: Entity,
    /// Clicking it boosts the sphere.
    pub red_box: Entity,
    pub wall: Entity,
    pub drone: Entity,
    pub propellers: [Entity; 2],
    pub led_board: Entity,
    pub receptionist: Entity,
    pub elevator: Entity,
    /// Plays the ambient clip of the zone the player is in.
    pub ambient_speaker: Entity,
}

/// Validate `config`, insert resources, register observers and spawn the scene.
pub fn setup(world: &mut World, config: SceneConfig) -> Result<SceneEntities, ConfigError> {
    config.validate()?;
    info!("Setting up AutoGestionPro HQ scene...");
    insert_resources(world, config.clone());
    register_observers(world);
    let entities = spawn_scene(world, &config)?;
    world.flush();
    info!("Scene setup complete!");
    Ok(entities)
}

pub fn insert_resources(world: &mut World, config: SceneConfig) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(SkyColor::default());
    world.insert_resource(SceneRng::default());
    world.insert_resource(PlayerPosition::default());
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<Announcement>>();
    if config.debug_enabled {
        world.insert_resource(PerfMonitor::default());
        world.insert_resource(DebugSettings::default());
        world.insert_resource(builtin_console());
        world.insert_resource(PendingCommands::default());
        info!("Debug console initialized, type 'help' for available commands");
    }
    world.insert_resource(config);
}

pub fn register_observers(world: &mut World) {
    world.add_observer(boost_on_click_observer);
    world.add_observer(interaction_observer);
    world.add_observer(elevator_prompt_observer);
    world.add_observer(floor_selected_observer);
}

/// Spawn the scene entities. Resources from [`insert_resources`] must exist.
pub fn spawn_scene(world: &mut World, config: &SceneConfig) -> Result<SceneEntities, ConfigError> {
    let sphere = world
        .spawn((
            Transform3D::from_xyz(config.radius, config.base_height, 0.0).with_scale(0.8, 0.8, 0.8),
            Group::new("blue_sphere"),
        ))
        .id();
    let animator = world
        .spawn((
            OrbitAnimator::new(sphere).with_clock(config.clock),
            config.orbit_motion(),
            config.speed_boost()?,
            Group::new("sphere_animator"),
        ))
        .id();
    let red_box = world
        .spawn((
            Transform3D::from_xyz(0.0, 1.0, 0.0).with_scale(2.0, 2.0, 2.0),
            Clickable::new("Click to accelerate sphere"),
            BoostTrigger { animator },
            Group::new("red_box"),
        ))
        .id();
    let wall = world
        .spawn((
            Transform3D::from_xyz(0.0, 2.0, -5.0).with_scale(10.0, 4.0, 0.2),
            Group::new("wall"),
        ))
        .id();

    let (drone, propellers) = spawn_drone(world);

    for (x, y, z) in LIGHT_POSITIONS {
        world.spawn((
            Transform3D::from_xyz(x, y, z).with_scale(0.2, 0.2, 0.2),
            NightLight::default(),
            Emissive::OFF,
            Group::new("night_light"),
        ));
    }

    let led_board = world
        .spawn((
            Transform3D::from_xyz(8.0, 8.0, 0.1).with_scale(6.0, 2.0, 0.1),
            LedBoard::new(LED_MESSAGES).with_intervals(config.led_interval, config.visitor_interval),
            Emissive::LIT,
            Group::new("led_board"),
        ))
        .id();

    let receptionist = world
        .spawn((
            Transform3D::from_xyz(5.0, 2.0, 5.0).with_scale(0.8, 2.0, 0.8),
            Clickable::new("Hablar con recepcionista"),
            Interaction::default()
                .with_message("Bienvenidos a AutoGestionPro. ¿Puedo ayudarle en algo?")
                .with_sound(SoundClip::new("sounds/reception-voice.wav", 0.7)),
            Group::new("receptionist"),
        ))
        .id();
    let elevator = world
        .spawn((
            Transform3D::from_xyz(13.0, 1.0, 8.0).with_scale(2.0, 3.0, 2.0),
            Clickable::new("Usar ascensor"),
            Interaction::default().with_message("Ascensor activado - mostrando pisos"),
            Elevator::new(
                FLOORS.map(|(name, height)| Floor::new(name, height)),
                SoundClip::new("sounds/elevator-move.wav", 0.5),
            ),
            Group::new("elevator"),
        ))
        .id();

    let ambient_speaker = spawn_audio_zones(world);

    Ok(SceneEntities {
        sphere,
        animator,
        red_box,
        wall,
        drone,
        propellers,
        led_board,
        receptionist,
        elevator,
        ambient_speaker,
    })
}

fn spawn_audio_zones(world: &mut World) -> Entity {
    let speaker = world
        .spawn((Transform3D::default(), AmbientSpeaker, Group::new("ambient_speaker")))
        .id();
    for (name, url, volume, center, size) in AUDIO_ZONES {
        world.spawn((
            Transform3D::from_xyz(center[0], center[1], center[2]),
            TriggerBox::new(Vec3::from_array(size)),
            AudioZone::new(name, SoundClip::new(url, volume)),
            Group::new("audio_zone"),
        ));
    }
    let [x, y, z] = BUILDING_CENTER;
    world.spawn((
        Transform3D::from_xyz(x, y, z),
        TriggerBox::new(Vec3::from_array(BUILDING_SIZE)),
        BuildingBounds,
        Group::new("building_bounds"),
    ));
    info!("Ambient audio zones created");
    speaker
}

fn spawn_drone(world: &mut World) -> (Entity, [Entity; 2]) {
    let drone = world
        .spawn((
            Transform3D::from_xyz(8.0, 21.0, 8.0).with_scale(2.0, 0.5, 1.0),
            Spin::around_y(30.0),
            Group::new("drone"),
        ))
        .id();
    let propellers = [(7.0, 360.0), (9.0, -360.0)].map(|(x, speed)| {
        world
            .spawn((
                Transform3D::from_xyz(x, 21.5, 8.0).with_scale(0.1, 0.1, 1.0),
                Spin::new(Vec3::Y, speed),
                Group::new("propeller"),
            ))
            .id()
    });
    world
        .resource_mut::<Messages<AudioCmd>>()
        .write(AudioCmd::Play {
            entity: drone,
            url: "sounds/drone-helices.wav".to_string(),
            volume: 0.3,
            looped: true,
        });
    (drone, propellers)
}

/// Per-frame schedule. Time is advanced by [`run_frame`] before it runs.
pub fn build_schedule(debug_enabled: bool) -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(orbit_animation_system);
    update.add_systems(spin_system);
    update.add_systems(night_lights_system);
    update.add_systems(led_board_system);
    update.add_systems(tween_translation_system);
    update.add_systems(elevator_arrival_system.after(tween_translation_system));
    update.add_systems(audio_zone_system);
    if debug_enabled {
        update.add_systems(perf_monitor_system);
        update.add_systems(console_command_system.after(orbit_animation_system));
    }
    update.add_systems(
        (update_audio_cmds, update_announcements)
            .after(led_board_system)
            .after(orbit_animation_system)
            .after(elevator_arrival_system)
            .after(audio_zone_system),
    );
    update
}

/// Advance scene time by `dt` seconds and run one frame.
///
/// Input events are not delivered here; the host calls [`click`],
/// [`pointer_down`] or [`select_floor`] between frames.
pub fn run_frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}

/// Deliver a pointer-down from the host and apply what the observers queued.
pub fn pointer_down(world: &mut World, event: PointerDownEvent) {
    world.trigger(event);
    world.flush();
}

/// Primary-button click on `entity`.
pub fn click(world: &mut World, entity: Entity) {
    pointer_down(world, PointerDownEvent::primary(entity));
}

/// Host answer to the elevator floor prompt.
pub fn select_floor(world: &mut World, elevator: Entity, floor: usize) {
    world.trigger(FloorSelected { elevator, floor });
    world.flush();
}

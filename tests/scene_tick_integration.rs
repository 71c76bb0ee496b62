//! Scene tick integration tests: orbit loop, boosts, clicks, lights, LED board,
//! elevator trips and ambient audio zones.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;

use agp_scene::components::animator::{ClockMode, OrbitAnimator};
use agp_scene::components::audiozone::{AmbientSpeaker, AudioZone, BuildingBounds, TriggerBox};
use agp_scene::components::elevator::{Elevator, Floor};
use agp_scene::components::interactive::{BoostTrigger, Clickable, SoundClip};
use agp_scene::components::ledboard::LedBoard;
use agp_scene::components::nightlight::{Emissive, NightLight};
use agp_scene::components::orbit::OrbitMotion;
use agp_scene::components::speedboost::{SpeedBoost, SpeedPhase};
use agp_scene::components::spin::Spin;
use agp_scene::components::transform::Transform3D;
use agp_scene::components::tween::TweenTranslation;
use agp_scene::events::announcement::Announcement;
use agp_scene::events::audio::AudioCmd;
use agp_scene::events::elevator::ElevatorArrived;
use agp_scene::events::pointer::{PointerButton, PointerDownEvent};
use agp_scene::events::speedboost::{SpeedBoostEnded, SpeedBoostStarted};
use agp_scene::resources::player::PlayerPosition;
use agp_scene::resources::rng::SceneRng;
use agp_scene::resources::sceneconfig::SceneConfig;
use agp_scene::resources::skycolor::SkyColor;
use agp_scene::resources::worldtime::WorldTime;
use agp_scene::scene::{build_schedule, click, pointer_down, run_frame, select_floor, setup};
use agp_scene::systems::audiozones::audio_zone_system;
use agp_scene::systems::elevator::{elevator_arrival_system, floor_selected_observer};
use agp_scene::systems::ledboard::led_board_system;
use agp_scene::systems::nightlights::night_lights_system;
use agp_scene::systems::orbit::orbit_animation_system;
use agp_scene::systems::pointer::boost_on_click_observer;
use agp_scene::systems::spin::spin_system;
use agp_scene::systems::time::update_world_time;
use agp_scene::systems::tween::tween_translation_system;

const EPSILON: f32 = 1e-4;
const DT: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<Announcement>>();
    world
}

/// Spawn a sphere plus its animator controller with the reference constants.
fn spawn_orbit(world: &mut World) -> (Entity, Entity) {
    let sphere = world.spawn(Transform3D::from_xyz(4.0, 2.0, 0.0)).id();
    let animator = world
        .spawn((
            OrbitAnimator::new(sphere),
            OrbitMotion::new(4.0, 2.0, 1.5, 0.02),
            SpeedBoost::new(2.5, 120).unwrap(),
        ))
        .id();
    (sphere, animator)
}

fn orbit_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(orbit_animation_system);
    schedule
}

fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

fn boost_of(world: &World, animator: Entity) -> SpeedBoost {
    world.get::<SpeedBoost>(animator).unwrap().clone()
}

fn drain_audio(world: &mut World) -> Vec<AudioCmd> {
    world.resource_mut::<Messages<AudioCmd>>().drain().collect()
}

fn drain_texts(world: &mut World) -> Vec<String> {
    world
        .resource_mut::<Messages<Announcement>>()
        .drain()
        .map(|a| a.text)
        .collect()
}

#[test]
fn first_frame_moves_sphere_along_the_circle() {
    let mut world = make_world();
    let (sphere, animator) = spawn_orbit(&mut world);
    let mut schedule = orbit_schedule();

    tick(&mut world, &mut schedule, DT);

    let t = world.get::<Transform3D>(sphere).unwrap();
    assert!(approx_eq(t.position.x, 4.0 * 0.02f32.cos()));
    assert!(approx_eq(t.position.z, 4.0 * 0.02f32.sin()));
    assert!(approx_eq(t.position.y, 2.0 + 1.5 * 0.01f32.sin()));
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(world.get::<OrbitAnimator>(animator).unwrap().time, 1.0);
}

#[test]
fn sphere_keeps_moving_after_sixteen_million_frames() {
    let mut world = make_world();
    let (sphere, animator) = spawn_orbit(&mut world);
    let start = 16_777_216.0;
    world.get_mut::<OrbitAnimator>(animator).unwrap().time = start;
    let mut schedule = orbit_schedule();

    tick(&mut world, &mut schedule, DT);
    let before = world.get::<Transform3D>(sphere).unwrap().position;
    for _ in 0..600 {
        tick(&mut world, &mut schedule, DT);
    }

    assert_eq!(world.get::<OrbitAnimator>(animator).unwrap().time, start + 601.0);
    let after = world.get::<Transform3D>(sphere).unwrap().position;
    assert!(before.distance(after) > 0.1, "sphere froze at {after:?}");
    assert!(approx_eq(after.x * after.x + after.z * after.z, 16.0));
}

#[test]
fn sphere_stays_on_the_circle_while_boosted() {
    let mut world = make_world();
    let (sphere, animator) = spawn_orbit(&mut world);
    let mut schedule = orbit_schedule();

    for frame in 0..400 {
        if frame % 150 == 10 {
            world.get_mut::<SpeedBoost>(animator).unwrap().trigger();
        }
        tick(&mut world, &mut schedule, DT);
        let p = world.get::<Transform3D>(sphere).unwrap().position;
        assert!(approx_eq(p.x * p.x + p.z * p.z, 16.0));
    }
}

#[test]
fn click_boosts_and_decays_exactly_after_threshold() {
    let mut world = make_world();
    let (_sphere, animator) = spawn_orbit(&mut world);
    let red_box = world
        .spawn((
            Transform3D::default(),
            Clickable::new("Click to accelerate sphere"),
            BoostTrigger { animator },
        ))
        .id();

    let ended = Arc::new(Mutex::new(0));
    let ended_clone = ended.clone();
    world.add_observer(boost_on_click_observer);
    world.add_observer(move |_trigger: On<SpeedBoostEnded>| {
        *ended_clone.lock().unwrap() += 1;
    });
    world.flush();

    click(&mut world, red_box);
    let boost = boost_of(&world, animator);
    assert_eq!(boost.multiplier, 2.5);
    assert_eq!(boost.decay_counter, 0);

    let mut schedule = orbit_schedule();
    for frame in 1..120 {
        tick(&mut world, &mut schedule, DT);
        assert_eq!(
            boost_of(&world, animator).phase(),
            SpeedPhase::Boosted,
            "boost ended early at frame {frame}"
        );
    }
    assert_eq!(*ended.lock().unwrap(), 0);

    tick(&mut world, &mut schedule, DT);
    let boost = boost_of(&world, animator);
    assert_eq!(boost.multiplier, 1.0);
    assert_eq!(boost.decay_counter, 0);
    assert!(!boost.self_rotating);
    assert_eq!(*ended.lock().unwrap(), 1);

    // idle frames change nothing
    tick(&mut world, &mut schedule, DT);
    assert_eq!(boost_of(&world, animator), boost);
}

#[test]
fn second_click_restarts_the_countdown() {
    let mut world = make_world();
    let (_sphere, animator) = spawn_orbit(&mut world);
    let red_box = world.spawn(BoostTrigger { animator }).id();
    world.add_observer(boost_on_click_observer);
    world.flush();
    let mut schedule = orbit_schedule();

    click(&mut world, red_box);
    for _ in 0..90 {
        tick(&mut world, &mut schedule, DT);
    }
    assert_eq!(boost_of(&world, animator).decay_counter, 90);

    click(&mut world, red_box);
    assert_eq!(boost_of(&world, animator).decay_counter, 0);

    for _ in 0..119 {
        tick(&mut world, &mut schedule, DT);
    }
    assert!(boost_of(&world, animator).is_boosted());
    tick(&mut world, &mut schedule, DT);
    assert!(!boost_of(&world, animator).is_boosted());
}

#[test]
fn secondary_button_does_not_boost() {
    let mut world = make_world();
    let (_sphere, animator) = spawn_orbit(&mut world);
    let red_box = world
        .spawn((Clickable::new("Click"), BoostTrigger { animator }))
        .id();

    let started = Arc::new(Mutex::new(Vec::new()));
    let started_clone = started.clone();
    world.add_observer(boost_on_click_observer);
    world.add_observer(move |trigger: On<SpeedBoostStarted>| {
        started_clone.lock().unwrap().push(trigger.event().animator);
    });
    world.flush();

    pointer_down(
        &mut world,
        PointerDownEvent {
            entity: red_box,
            button: PointerButton::Secondary,
        },
    );
    assert!(!boost_of(&world, animator).is_boosted());
    assert!(started.lock().unwrap().is_empty());

    click(&mut world, red_box);
    assert!(boost_of(&world, animator).is_boosted());
    assert_eq!(*started.lock().unwrap(), vec![animator]);
}

#[test]
fn missing_target_skips_the_write_but_keeps_time() {
    let mut world = make_world();
    let (sphere, animator) = spawn_orbit(&mut world);
    let detached = world
        .spawn((
            OrbitAnimator::detached(),
            OrbitMotion::default(),
            SpeedBoost::new(2.0, 10).unwrap(),
        ))
        .id();
    world.despawn(sphere);
    world.get_mut::<SpeedBoost>(animator).unwrap().trigger();
    let mut schedule = orbit_schedule();

    for _ in 0..5 {
        tick(&mut world, &mut schedule, DT);
    }

    assert_eq!(world.get::<OrbitAnimator>(animator).unwrap().time, 5.0);
    assert_eq!(boost_of(&world, animator).decay_counter, 5);
    assert_eq!(world.get::<OrbitAnimator>(detached).unwrap().time, 5.0);
}

#[test]
fn animators_are_independent() {
    let mut world = make_world();
    let (sphere_a, animator_a) = spawn_orbit(&mut world);
    let (sphere_b, _animator_b) = spawn_orbit(&mut world);
    world.get_mut::<SpeedBoost>(animator_a).unwrap().trigger();
    let mut schedule = orbit_schedule();

    for _ in 0..30 {
        tick(&mut world, &mut schedule, DT);
    }

    let a = world.get::<Transform3D>(sphere_a).unwrap().position;
    let b = world.get::<Transform3D>(sphere_b).unwrap().position;
    assert!(approx_eq(b.x, 4.0 * (30.0f32 * 0.02).cos()));
    assert!(approx_eq(a.x, 4.0 * (30.0f32 * 0.02 * 2.5).cos()));
}

#[test]
fn seconds_clock_follows_frame_delta() {
    let mut world = make_world();
    let (_sphere, animator) = spawn_orbit(&mut world);
    world.get_mut::<OrbitAnimator>(animator).unwrap().clock = ClockMode::Seconds;
    let mut schedule = orbit_schedule();

    tick(&mut world, &mut schedule, 0.25);
    tick(&mut world, &mut schedule, 0.25);

    assert_eq!(world.get::<OrbitAnimator>(animator).unwrap().time, 0.5);
    // decay still counts frames
    world.get_mut::<SpeedBoost>(animator).unwrap().trigger();
    tick(&mut world, &mut schedule, 0.25);
    assert_eq!(boost_of(&world, animator).decay_counter, 1);
}

#[test]
fn spin_accumulates_angle_from_delta() {
    let mut world = make_world();
    let drone = world
        .spawn((Transform3D::default(), Spin::around_y(30.0)))
        .id();
    let propeller = world
        .spawn((Transform3D::default(), Spin::around_y(-360.0)))
        .id();
    let mut schedule = Schedule::default();
    schedule.add_systems(spin_system);

    tick(&mut world, &mut schedule, 0.5);
    tick(&mut world, &mut schedule, 0.5);

    let spin = world.get::<Spin>(drone).unwrap();
    assert!(approx_eq(spin.angle, 30.0));
    let rotated = world.get::<Transform3D>(drone).unwrap().rotation * Vec3::Z;
    assert!(approx_eq(rotated.x, 30.0f32.to_radians().sin()));

    let spin = world.get::<Spin>(propeller).unwrap();
    assert!((0.0..360.0).contains(&spin.angle));
}

#[test]
fn night_lights_follow_the_sky_on_poll_interval() {
    let mut world = make_world();
    let mut config = SceneConfig::new();
    config.light_check_interval = 5.0;
    world.insert_resource(config);
    world.insert_resource(SkyColor::NIGHT);
    let lights: Vec<Entity> = (0..3)
        .map(|_| world.spawn((NightLight::default(), Emissive::OFF)).id())
        .collect();
    let mut schedule = Schedule::default();
    schedule.add_systems(night_lights_system);

    tick(&mut world, &mut schedule, 1.0);
    for &light in &lights {
        assert!(world.get::<NightLight>(light).unwrap().is_on);
        assert_eq!(*world.get::<Emissive>(light).unwrap(), Emissive::LIT);
    }

    world.insert_resource(SkyColor::DAY);
    for _ in 0..4 {
        tick(&mut world, &mut schedule, 1.0);
    }
    assert!(world.get::<NightLight>(lights[0]).unwrap().is_on);

    tick(&mut world, &mut schedule, 1.0);
    for &light in &lights {
        assert!(!world.get::<NightLight>(light).unwrap().is_on);
        assert_eq!(*world.get::<Emissive>(light).unwrap(), Emissive::OFF);
    }
}

#[test]
fn night_poll_interval_counts_scaled_time() {
    let mut world = make_world();
    world.insert_resource(WorldTime::default().with_time_scale(2.0));
    world.insert_resource(SceneConfig::new());
    world.insert_resource(SkyColor::NIGHT);
    let light = world.spawn((NightLight::default(), Emissive::OFF)).id();
    let mut schedule = Schedule::default();
    schedule.add_systems(night_lights_system);

    tick(&mut world, &mut schedule, 1.0);
    assert!(world.get::<NightLight>(light).unwrap().is_on);

    world.insert_resource(SkyColor::DAY);
    tick(&mut world, &mut schedule, 1.0);
    tick(&mut world, &mut schedule, 1.0);
    assert!(world.get::<NightLight>(light).unwrap().is_on);
    // 6 scaled seconds since the first poll
    tick(&mut world, &mut schedule, 1.0);
    assert!(!world.get::<NightLight>(light).unwrap().is_on);

    // a paused clock never reaches the next poll
    world.resource_mut::<WorldTime>().time_scale = 0.0;
    world.insert_resource(SkyColor::NIGHT);
    for _ in 0..20 {
        tick(&mut world, &mut schedule, 1.0);
    }
    assert!(!world.get::<NightLight>(light).unwrap().is_on);
}

#[test]
fn led_board_announces_next_message_each_interval() {
    let mut world = make_world();
    world.insert_resource(SceneRng::with_seed(7));
    let board = world
        .spawn(LedBoard::new(["A", "B: {visitors}"]).with_intervals(2.0, 3.0))
        .id();
    let mut schedule = Schedule::default();
    schedule.add_systems(led_board_system);

    tick(&mut world, &mut schedule, 1.0);
    assert_eq!(world.resource_mut::<Messages<Announcement>>().drain().count(), 0);

    tick(&mut world, &mut schedule, 1.0);
    assert_eq!(drain_texts(&mut world), vec!["B: 0".to_string()]);
    let audio = drain_audio(&mut world);
    assert!(matches!(&audio[..], [AudioCmd::Play { entity, .. }] if *entity == board));

    // visitors re-rolled at t=3, shown again at t=6
    for _ in 0..4 {
        tick(&mut world, &mut schedule, 1.0);
    }
    let visitors = world.get::<LedBoard>(board).unwrap().visitors;
    assert!((10..60).contains(&visitors));
    assert_eq!(
        drain_texts(&mut world),
        vec!["A".to_string(), format!("B: {visitors}")]
    );
}

fn spawn_elevator(world: &mut World) -> Entity {
    world
        .spawn((
            Transform3D::from_xyz(13.0, 1.0, 8.0),
            Elevator::new(
                [
                    Floor::new("Planta Baja", 1.0),
                    Floor::new("Piso 1", 5.0),
                    Floor::new("Piso 2", 9.0),
                ],
                SoundClip::new("sounds/elevator-move.wav", 0.5),
            ),
        ))
        .id()
}

#[test]
fn elevator_eases_to_the_selected_floor_and_stops_its_clip() {
    let mut world = make_world();
    let elevator = spawn_elevator(&mut world);
    let arrived = Arc::new(Mutex::new(Vec::new()));
    let arrived_clone = arrived.clone();
    world.add_observer(floor_selected_observer);
    world.add_observer(move |trigger: On<ElevatorArrived>| {
        arrived_clone.lock().unwrap().push(trigger.event().floor);
    });
    world.flush();
    let mut schedule = Schedule::default();
    schedule.add_systems((
        tween_translation_system,
        elevator_arrival_system.after(tween_translation_system),
    ));

    select_floor(&mut world, elevator, 2);
    assert!(world.get::<TweenTranslation>(elevator).is_some());
    assert!(world.get::<Elevator>(elevator).unwrap().is_moving());
    assert_eq!(drain_texts(&mut world), vec!["Subiendo a Piso 2...".to_string()]);
    assert!(matches!(
        &drain_audio(&mut world)[..],
        [AudioCmd::Play { entity, looped: false, .. }] if *entity == elevator
    ));

    tick(&mut world, &mut schedule, 0.5);
    tick(&mut world, &mut schedule, 0.5);
    let y = world.get::<Transform3D>(elevator).unwrap().position.y;
    // eased out: past the linear midpoint halfway through the trip
    assert!(y > 5.0 && y < 9.0, "y = {y}");
    assert!(drain_audio(&mut world).is_empty());
    assert!(arrived.lock().unwrap().is_empty());

    tick(&mut world, &mut schedule, 0.5);
    tick(&mut world, &mut schedule, 0.5);
    let position = world.get::<Transform3D>(elevator).unwrap().position;
    assert_eq!(position, Vec3::new(13.0, 9.0, 8.0));
    let state = world.get::<Elevator>(elevator).unwrap();
    assert_eq!(state.current, 2);
    assert!(!state.is_moving());
    assert_eq!(drain_audio(&mut world), vec![AudioCmd::Stop { entity: elevator }]);
    assert_eq!(*arrived.lock().unwrap(), vec![2]);

    // settled elevators stay quiet
    tick(&mut world, &mut schedule, 0.5);
    assert!(drain_audio(&mut world).is_empty());
}

#[test]
fn unknown_floor_leaves_the_elevator_in_place() {
    let mut world = make_world();
    let elevator = spawn_elevator(&mut world);
    world.add_observer(floor_selected_observer);
    world.flush();

    select_floor(&mut world, elevator, 7);

    assert!(world.get::<TweenTranslation>(elevator).is_none());
    assert!(!world.get::<Elevator>(elevator).unwrap().is_moving());
    assert!(drain_audio(&mut world).is_empty());
}

#[test]
fn audio_zones_switch_the_ambient_clip_and_stop_outside() {
    let mut world = make_world();
    world.insert_resource(PlayerPosition::default());
    let speaker = world.spawn((Transform3D::default(), AmbientSpeaker)).id();
    for (name, url, y, height) in [
        ("lobby", "sounds/lobby-music.wav", 3.0, 5.0),
        ("offices", "sounds/office-ambience.wav", 9.0, 8.0),
    ] {
        world.spawn((
            Transform3D::from_xyz(8.0, y, 8.0),
            TriggerBox::new(Vec3::new(16.0, height, 16.0)),
            AudioZone::new(name, SoundClip::new(url, 0.4)),
        ));
    }
    world.spawn((
        Transform3D::from_xyz(8.0, 10.0, 8.0),
        TriggerBox::new(Vec3::new(22.0, 25.0, 22.0)),
        BuildingBounds,
    ));
    let mut schedule = Schedule::default();
    schedule.add_systems(audio_zone_system);

    // nothing until the host reports a position
    tick(&mut world, &mut schedule, DT);
    assert!(drain_audio(&mut world).is_empty());

    world.insert_resource(PlayerPosition::at(8.0, 3.0, 8.0));
    tick(&mut world, &mut schedule, DT);
    assert!(matches!(
        &drain_audio(&mut world)[..],
        [AudioCmd::Play { entity, url, looped: true, .. }]
            if *entity == speaker && url == "sounds/lobby-music.wav"
    ));
    assert_eq!(
        world.get::<Transform3D>(speaker).unwrap().position,
        Vec3::new(8.0, 3.0, 8.0)
    );

    tick(&mut world, &mut schedule, DT);
    assert!(drain_audio(&mut world).is_empty());

    world.insert_resource(PlayerPosition::at(8.0, 9.0, 8.0));
    tick(&mut world, &mut schedule, DT);
    assert!(matches!(
        &drain_audio(&mut world)[..],
        [AudioCmd::Play { url, .. }] if url == "sounds/office-ambience.wav"
    ));

    world.insert_resource(PlayerPosition::at(40.0, 3.0, 40.0));
    tick(&mut world, &mut schedule, DT);
    assert_eq!(drain_audio(&mut world), vec![AudioCmd::Stop { entity: speaker }]);
}

#[test]
fn full_scene_runs_and_reacts_to_clicks() {
    let mut world = World::new();
    let entities = setup(&mut world, SceneConfig::new()).unwrap();
    let mut update = build_schedule(true);

    click(&mut world, entities.red_box);
    assert!(world.get::<SpeedBoost>(entities.animator).unwrap().is_boosted());
    click(&mut world, entities.elevator);
    assert!(drain_texts(&mut world)
        .iter()
        .any(|t| t.starts_with("Selecciona un piso: 0) Planta Baja")));
    let audio = drain_audio(&mut world);
    assert!(audio.iter().any(|cmd| matches!(
        cmd,
        AudioCmd::Play { entity, looped: true, .. } if *entity == entities.drone
    )));
    select_floor(&mut world, entities.elevator, 4);
    world.insert_resource(PlayerPosition::at(8.0, 3.0, 8.0));

    let mut audio = Vec::new();
    for _ in 0..130 {
        run_frame(&mut world, &mut update, DT);
        audio.extend(drain_audio(&mut world));
    }

    let boost = world.get::<SpeedBoost>(entities.animator).unwrap();
    assert_eq!(boost.phase(), SpeedPhase::Idle);
    let p = world.get::<Transform3D>(entities.sphere).unwrap().position;
    assert!(approx_eq(p.x * p.x + p.z * p.z, 16.0));
    assert_eq!(world.resource::<WorldTime>().frame_count, 130);
    let drone = world.get::<Spin>(entities.drone).unwrap();
    assert!((drone.angle - 65.0).abs() < 0.01);

    let elevator = world.get::<Transform3D>(entities.elevator).unwrap();
    assert!(approx_eq(elevator.position.y, 17.0));
    assert_eq!(world.get::<Elevator>(entities.elevator).unwrap().current, 4);
    assert!(audio.contains(&AudioCmd::Stop {
        entity: entities.elevator
    }));
    assert!(audio.iter().any(|cmd| matches!(
        cmd,
        AudioCmd::Play { entity, url, .. }
            if *entity == entities.ambient_speaker && url == "sounds/lobby-music.wav"
    )));
}

//! Elevator flow.
//!
//! 1. a click on the elevator asks the host to show the floor prompt
//!    ([`elevator_prompt_observer`])
//! 2. the host answers with [`FloorSelected`]; the cabin starts an eased
//!    translation to the floor height and its clip plays
//!    ([`floor_selected_observer`])
//! 3. once the translation finishes the clip stops and [`ElevatorArrived`]
//!    is triggered ([`elevator_arrival_system`])

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{info, warn};

use crate::components::elevator::Elevator;
use crate::components::interactive::Clickable;
use crate::components::transform::Transform3D;
use crate::components::tween::{Easing, TweenTranslation};
use crate::events::announcement::Announcement;
use crate::events::audio::AudioCmd;
use crate::events::elevator::{ElevatorArrived, FloorSelected};
use crate::events::pointer::PointerDownEvent;
use crate::systems::pointer::accepts;

const PROMPT_DURATION_MS: u32 = 10_000;
const DEPARTURE_DURATION_MS: u32 = 3_000;

pub fn elevator_prompt_observer(
    trigger: On<PointerDownEvent>,
    elevators: Query<(&Elevator, Option<&Clickable>)>,
    mut announcements: MessageWriter<Announcement>,
) {
    let event = trigger.event();
    let Ok((elevator, clickable)) = elevators.get(event.entity) else {
        return;
    };
    if !accepts(clickable, event.button) {
        return;
    }
    announcements.write(Announcement {
        text: elevator.prompt(),
        duration_ms: PROMPT_DURATION_MS,
    });
}

pub fn floor_selected_observer(
    trigger: On<FloorSelected>,
    mut elevators: Query<(&mut Elevator, &Transform3D)>,
    mut commands: Commands,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut announcements: MessageWriter<Announcement>,
) {
    let event = *trigger.event();
    let Ok((mut elevator, transform)) = elevators.get_mut(event.elevator) else {
        warn!("Floor selected for {:?}, which is not an elevator", event.elevator);
        return;
    };
    let Some(floor) = elevator.floor(event.floor).cloned() else {
        warn!(
            "Elevator {:?} has no floor {} ({} floors)",
            event.elevator,
            event.floor,
            elevator.floors.len()
        );
        return;
    };

    let from = transform.position;
    let to = Vec3::new(from.x, floor.height, from.z);
    commands.entity(event.elevator).insert(
        TweenTranslation::new(from, to, elevator.travel_time).with_easing(Easing::QuadOut),
    );
    elevator.travelling_to = Some(event.floor);

    audio_cmds.write(AudioCmd::Play {
        entity: event.elevator,
        url: elevator.sound.url.clone(),
        volume: elevator.sound.volume,
        looped: false,
    });
    announcements.write(Announcement {
        text: format!("Subiendo a {}...", floor.name),
        duration_ms: DEPARTURE_DURATION_MS,
    });
    info!("Elevator {:?} heading to {}", event.elevator, floor.name);
}

/// Settle elevators whose translation has finished.
pub fn elevator_arrival_system(
    mut elevators: Query<(Entity, &mut Elevator, &TweenTranslation)>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    for (entity, mut elevator, tween) in elevators.iter_mut() {
        if !tween.is_finished() {
            continue;
        }
        let Some(floor) = elevator.travelling_to.take() else {
            continue;
        };
        elevator.current = floor;
        audio_cmds.write(AudioCmd::Stop { entity });
        info!("Ascensor llegó al piso con altura: {}", tween.to.y);
        commands.trigger(ElevatorArrived {
            elevator: entity,
            floor,
        });
    }
}

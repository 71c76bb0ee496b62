//! Ambient audio zone switching.
//!
//! Compares the host-reported [`PlayerPosition`] against every
//! [`TriggerBox`] once per frame. Entering an [`AudioZone`] moves the
//! [`AmbientSpeaker`] to the zone centre and plays the zone's clip in a loop;
//! leaving the [`BuildingBounds`] stops it. Nothing happens until the host
//! reports a position.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::audiozone::{AmbientSpeaker, AudioZone, BuildingBounds, TriggerBox};
use crate::components::transform::Transform3D;
use crate::events::audio::AudioCmd;
use crate::resources::player::PlayerPosition;

pub fn audio_zone_system(
    player: Res<PlayerPosition>,
    mut zones: Query<
        (&Transform3D, &mut TriggerBox, Option<&AudioZone>, Has<BuildingBounds>),
        Without<AmbientSpeaker>,
    >,
    mut speakers: Query<(Entity, &mut Transform3D), With<AmbientSpeaker>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let Some(position) = player.0 else {
        return;
    };
    let Ok((speaker, mut speaker_transform)) = speakers.single_mut() else {
        return;
    };

    for (transform, mut trigger_box, zone, is_bounds) in zones.iter_mut() {
        let inside = trigger_box.contains(transform.position, position);
        if inside == trigger_box.player_inside {
            continue;
        }
        trigger_box.player_inside = inside;

        if inside {
            if let Some(zone) = zone {
                info!("Entrando en la zona de audio: {}", zone.name);
                speaker_transform.position = transform.position;
                audio_cmds.write(AudioCmd::Play {
                    entity: speaker,
                    url: zone.clip.url.clone(),
                    volume: zone.clip.volume,
                    looped: true,
                });
            }
        } else if is_bounds {
            info!("Saliendo del edificio, deteniendo música.");
            audio_cmds.write(AudioCmd::Stop { entity: speaker });
        }
    }
}

//! Day/night light poll.
//!
//! At most once every `light_check_interval` seconds of scene time, compare
//! the host's [`SkyColor`] against the night threshold and switch every
//! [`NightLight`] whose state disagrees. The first frame always polls.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::nightlight::{Emissive, NightLight};
use crate::resources::sceneconfig::SceneConfig;
use crate::resources::skycolor::SkyColor;
use crate::resources::worldtime::WorldTime;

pub fn night_lights_system(
    time: Res<WorldTime>,
    config: Res<SceneConfig>,
    sky: Option<Res<SkyColor>>,
    mut last_check: Local<Option<f32>>,
    mut lights: Query<(&mut NightLight, &mut Emissive)>,
) {
    if last_check.is_some_and(|last| time.elapsed - last < config.light_check_interval) {
        return;
    }
    *last_check = Some(time.elapsed);

    let Some(sky) = sky else {
        return;
    };
    let is_night = sky.is_night(config.night_threshold);

    let mut switched = 0;
    for (mut light, mut emissive) in lights.iter_mut() {
        if light.is_on != is_night {
            light.is_on = is_night;
            *emissive = if is_night { Emissive::LIT } else { Emissive::OFF };
            switched += 1;
        }
    }
    if switched > 0 {
        info!(
            "Night lights turned {} ({} switched)",
            if is_night { "on" } else { "off" },
            switched
        );
    }
}

//! Tween update system.
//!
//! [`tween_translation_system`] advances every playing
//! [`TweenTranslation`] by the frame delta from
//! [`WorldTime`](crate::resources::worldtime::WorldTime) and writes the eased
//! position into the entity's [`Transform3D`].

use bevy_ecs::prelude::*;

use crate::components::transform::Transform3D;
use crate::components::tween::{Easing, TweenTranslation};
use crate::resources::worldtime::WorldTime;

/// Apply an easing curve to `t`, clamped to [0.0, 1.0].
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
    }
}

pub fn tween_translation_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut TweenTranslation, &mut Transform3D)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut tw, mut transform) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration.max(f32::EPSILON);
        tw.time = (tw.time + dt).min(duration);
        if tw.time >= duration {
            tw.playing = false;
        }
        let t = ease(tw.easing, tw.time / duration);
        transform.position = tw.from.lerp(tw.to, t);
    }
}

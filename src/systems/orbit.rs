//! Orbit update loop.
//!
//! Runs once per frame for every animator controller:
//! 1. advance the animator's time accumulator
//! 2. tick its [`SpeedBoost`], possibly ending a boost
//! 3. evaluate the [`OrbitMotion`] law at the new time and multiplier
//! 4. write position and rotation into the target's [`Transform3D`]
//!
//! Steps 1–3 always run. Step 4 is skipped for the frame when the target is
//! unset or no longer has a transform.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::animator::OrbitAnimator;
use crate::components::orbit::OrbitMotion;
use crate::components::speedboost::SpeedBoost;
use crate::components::transform::Transform3D;
use crate::events::speedboost::SpeedBoostEnded;
use crate::resources::worldtime::WorldTime;

pub fn orbit_animation_system(
    time: Res<WorldTime>,
    mut animators: Query<(Entity, &mut OrbitAnimator, &mut SpeedBoost, &OrbitMotion)>,
    mut transforms: Query<&mut Transform3D>,
    mut commands: Commands,
) {
    for (entity, mut animator, mut boost, motion) in animators.iter_mut() {
        animator.time += animator.clock.step(time.delta);

        if boost.tick() {
            info!("Animator {:?} back to normal speed", entity);
            commands.trigger(SpeedBoostEnded { animator: entity });
        }

        let sample = motion.sample(animator.time, boost.multiplier, boost.self_rotating);

        let Some(target) = animator.target else {
            continue;
        };
        let Ok(mut transform) = transforms.get_mut(target) else {
            debug!("Animator {:?}: target {:?} has no transform", entity, target);
            continue;
        };
        transform.position = sample.position;
        transform.rotation = sample.rotation;
    }
}

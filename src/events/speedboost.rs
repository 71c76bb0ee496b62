//! Speed boost transitions.
//!
//! [`SpeedBoostStarted`] is triggered when a click boosts an animator and
//! [`SpeedBoostEnded`] when the orbit loop's decay returns it to idle. Both
//! carry the animator controller entity.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpeedBoostStarted {
    pub animator: Entity,
    pub multiplier: f32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedBoostEnded {
    pub animator: Entity,
}

//! Audio requests handed to the host.
//!
//! The scene never plays sound itself; systems and observers write
//! [`AudioCmd`] messages and the host drains them once per frame.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    /// Play (or replace) the clip attached to `entity`.
    Play {
        entity: Entity,
        url: String,
        volume: f32,
        looped: bool,
    },
    /// Stop whatever `entity` is playing.
    Stop { entity: Entity },
}

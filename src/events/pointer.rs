//! Pointer events delivered by the host.
//!
//! The host delivers a [`PointerDownEvent`] between frames when the user
//! clicks an entity, through [`crate::scene::pointer_down`] (or
//! [`crate::scene::click`]), which flushes the world after triggering so the
//! observers' queued commands land before the next frame. Observers in
//! [`crate::systems::pointer`] and [`crate::systems::elevator`] react to it.

use bevy_ecs::prelude::*;

/// Mouse/controller button reported with a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
}

/// Event emitted when the user presses a pointer button over an entity.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDownEvent {
    /// The entity under the pointer.
    pub entity: Entity,
    pub button: PointerButton,
}

impl PointerDownEvent {
    pub fn primary(entity: Entity) -> Self {
        Self {
            entity,
            button: PointerButton::Primary,
        }
    }
}

//! Elevator events.
//!
//! The host answers the floor prompt with [`FloorSelected`]; the scene
//! triggers [`ElevatorArrived`] when the cabin reaches the floor.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorSelected {
    pub elevator: Entity,
    /// Index into the elevator's floor table.
    pub floor: usize,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorArrived {
    pub elevator: Entity,
    pub floor: usize,
}

//! Elevator with a fixed floor table.
//!
//! The host shows [`Elevator::prompt`] when the elevator is clicked and
//! answers with a [`FloorSelected`](crate::events::elevator::FloorSelected)
//! event; the elevator then eases to the floor height.

use bevy_ecs::prelude::Component;

use crate::components::interactive::SoundClip;

#[derive(Clone, Debug, PartialEq)]
pub struct Floor {
    pub name: String,
    /// Cabin height at this floor.
    pub height: f32,
}

impl Floor {
    pub fn new(name: impl Into<String>, height: f32) -> Self {
        Self {
            name: name.into(),
            height,
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct Elevator {
    pub floors: Vec<Floor>,
    /// Index of the floor the cabin last arrived at.
    pub current: usize,
    /// Floor being travelled to, if moving.
    pub travelling_to: Option<usize>,
    /// Seconds a trip takes, whatever the distance.
    pub travel_time: f32,
    /// Clip played while moving.
    pub sound: SoundClip,
}

impl Elevator {
    pub fn new(floors: impl IntoIterator<Item = Floor>, sound: SoundClip) -> Self {
        Self {
            floors: floors.into_iter().collect(),
            current: 0,
            travelling_to: None,
            travel_time: 2.0,
            sound,
        }
    }
    pub fn with_travel_time(mut self, seconds: f32) -> Self {
        self.travel_time = seconds;
        self
    }
    pub fn floor(&self, index: usize) -> Option<&Floor> {
        self.floors.get(index)
    }
    pub fn is_moving(&self) -> bool {
        self.travelling_to.is_some()
    }

    /// Floor menu as one line: `Selecciona un piso: 0) Lobby | 1) ...`.
    pub fn prompt(&self) -> String {
        let options: Vec<String> = self
            .floors
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{i}) {}", f.name))
            .collect();
        format!("Selecciona un piso: {}", options.join(" | "))
    }
}

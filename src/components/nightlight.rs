use bevy_ecs::prelude::Component;

/// Building light switched by the day/night poll.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NightLight {
    pub is_on: bool,
}

/// Emissive intensity of an entity's material, mirrored to the host.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Emissive {
    pub intensity: f32,
}

impl Emissive {
    pub const OFF: Emissive = Emissive { intensity: 0.0 };
    pub const LIT: Emissive = Emissive { intensity: 2.0 };
}

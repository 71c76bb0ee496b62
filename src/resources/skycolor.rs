//! Sky colour reported by the host environment.
//!
//! The host updates this resource whenever its environment query resolves;
//! [`night_lights_system`](crate::systems::nightlights::night_lights_system)
//! reads it to decide whether it is night.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SkyColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for SkyColor {
    fn default() -> Self {
        SkyColor::DAY
    }
}

impl SkyColor {
    pub const DAY: SkyColor = SkyColor {
        r: 0.5,
        g: 0.7,
        b: 1.0,
    };
    pub const NIGHT: SkyColor = SkyColor {
        r: 0.02,
        g: 0.02,
        b: 0.05,
    };

    /// Night when every channel is below `threshold`.
    pub fn is_night(&self, threshold: f32) -> bool {
        self.r < threshold && self.g < threshold && self.b < threshold
    }
}

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Perpetual rotation about a fixed axis.
///
/// Used for the drone body and its propellers. Negative speeds spin the
/// other way.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub axis: Vec3,
    pub degrees_per_second: f32,
    /// Accumulated angle in degrees, wrapped to `[0, 360)`.
    pub angle: f32,
}

impl Spin {
    pub fn new(axis: Vec3, degrees_per_second: f32) -> Self {
        Self {
            axis: axis.try_normalize().unwrap_or(Vec3::Y),
            degrees_per_second,
            angle: 0.0,
        }
    }
    pub fn around_y(degrees_per_second: f32) -> Self {
        Self::new(Vec3::Y, degrees_per_second)
    }
}

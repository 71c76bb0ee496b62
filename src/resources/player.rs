use bevy_ecs::prelude::Resource;
use glam::Vec3;

/// Player avatar position reported by the host each frame. `None` until the
/// host has reported one.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerPosition(pub Option<Vec3>);

impl PlayerPosition {
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self(Some(Vec3::new(x, y, z)))
    }
}

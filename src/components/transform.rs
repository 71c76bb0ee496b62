//! 3D transform written by the scene systems and read by the host renderer.
//!
//! The host owns the entity; systems only overwrite the fields they animate
//! (the orbit loop never touches `scale`, spin never touches `position`).

use bevy_ecs::prelude::Component;
use glam::{EulerRot, Quat, Vec3};

/// Position, rotation and scale of a renderable entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform3D {
    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            ..Self::default()
        }
    }
    pub fn with_scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }
}

/// Build a rotation from Euler angles in degrees (pitch about X, yaw about Y,
/// roll about Z), applied yaw first.
pub fn quat_from_euler_degrees(pitch: f32, yaw: f32, roll: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw.to_radians(),
        pitch.to_radians(),
        roll.to_radians(),
    )
}

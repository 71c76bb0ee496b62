use bevy_ecs::prelude::*;
use glam::Quat;

use crate::components::spin::Spin;
use crate::components::transform::Transform3D;
use crate::resources::worldtime::WorldTime;

/// Advance every [`Spin`] by the frame delta and write the rotation.
pub fn spin_system(time: Res<WorldTime>, mut query: Query<(&mut Spin, &mut Transform3D)>) {
    for (mut spin, mut transform) in query.iter_mut() {
        spin.angle = (spin.angle + spin.degrees_per_second * time.delta).rem_euclid(360.0);
        transform.rotation = Quat::from_axis_angle(spin.axis, spin.angle.to_radians());
    }
}

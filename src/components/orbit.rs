//! Orbit motion law.
//!
//! [`OrbitMotion`] holds the constants of a circular path in the XZ plane
//! with a sine-wave bob in Y. Its methods are pure functions of the
//! accumulated time and the current speed multiplier; the
//! [`orbit_animation_system`](crate::systems::orbit::orbit_animation_system)
//! feeds them from the animator's clock and
//! [`SpeedBoost`](super::speedboost::SpeedBoost).

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};

use crate::components::transform::quat_from_euler_degrees;

/// Constants of the orbit motion law.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitMotion {
    /// Radius of the circular path around the origin.
    pub radius: f32,
    /// Centre of the vertical oscillation.
    pub base_height: f32,
    /// Maximum vertical deviation from `base_height`.
    pub amplitude: f32,
    /// Angular speed in radians per unit of time at multiplier 1.
    pub base_speed: f32,
    /// Yaw in degrees per unit of time at multiplier 1.
    pub yaw_rate: f32,
    /// Self-roll in degrees per unit of time while self-rotating.
    pub self_rotation_speed: f32,
    /// Peak of the oscillating tilt, in degrees.
    pub tilt_degrees: f32,
    /// Frequency of the oscillating tilt.
    pub tilt_frequency: f32,
}

/// Output of the motion law for one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for OrbitMotion {
    fn default() -> Self {
        Self::new(4.0, 2.0, 1.5, 0.02)
    }
}

impl OrbitMotion {
    pub fn new(radius: f32, base_height: f32, amplitude: f32, base_speed: f32) -> Self {
        Self {
            radius,
            base_height,
            amplitude,
            base_speed,
            yaw_rate: 0.05,
            self_rotation_speed: 3.0,
            tilt_degrees: 10.0,
            tilt_frequency: 0.01,
        }
    }
    pub fn with_self_rotation_speed(mut self, degrees: f32) -> Self {
        self.self_rotation_speed = degrees;
        self
    }
    pub fn with_yaw_rate(mut self, degrees: f32) -> Self {
        self.yaw_rate = degrees;
        self
    }

    /// Orbit angle in radians, evaluated in `f64`.
    fn angle(&self, time: f64, multiplier: f32) -> f64 {
        time * f64::from(self.base_speed) * f64::from(multiplier)
    }

    /// Point on the XZ circle as `(x, z)`.
    pub fn circular_position(&self, time: f64, multiplier: f32) -> (f32, f32) {
        let angle = self.angle(time, multiplier);
        (
            (angle.cos() as f32) * self.radius,
            (angle.sin() as f32) * self.radius,
        )
    }

    /// Height of the sine-wave bob, at half the angular frequency.
    pub fn height(&self, time: f64, multiplier: f32) -> f32 {
        let phase = self.angle(time, multiplier) * 0.5;
        self.base_height + (phase.sin() as f32) * self.amplitude
    }

    /// Yaw plus tilt, with the self-roll added only while `self_rotating`.
    pub fn rotation(&self, time: f64, multiplier: f32, self_rotating: bool) -> Quat {
        let yaw = (f64::from(self.yaw_rate) * f64::from(multiplier) * time).rem_euclid(360.0);
        let tilt = (time * f64::from(self.tilt_frequency)).sin() * f64::from(self.tilt_degrees);
        let roll = if self_rotating {
            (time * f64::from(self.self_rotation_speed)).rem_euclid(360.0)
        } else {
            0.0
        };
        quat_from_euler_degrees(0.0, yaw as f32, (tilt + roll) as f32)
    }

    pub fn sample(&self, time: f64, multiplier: f32, self_rotating: bool) -> MotionSample {
        let (x, z) = self.circular_position(time, multiplier);
        MotionSample {
            position: Vec3::new(x, self.height(time, multiplier), z),
            rotation: self.rotation(time, multiplier, self_rotating),
        }
    }
}

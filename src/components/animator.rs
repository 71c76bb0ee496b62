//! Orbit animator controller.
//!
//! An [`OrbitAnimator`] owns the time accumulator of one orbit animation and a
//! non-owning handle to the entity it moves. It lives on a controller entity
//! together with an [`OrbitMotion`](super::orbit::OrbitMotion) and a
//! [`SpeedBoost`](super::speedboost::SpeedBoost); the animated entity only
//! carries its [`Transform3D`](super::transform::Transform3D).

use bevy_ecs::prelude::{Component, Entity};

/// How the time accumulator advances each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClockMode {
    /// One unit per frame, independent of frame duration.
    #[default]
    Frames,
    /// Scaled frame delta in seconds.
    Seconds,
}

impl ClockMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frames" | "frame" => Some(ClockMode::Frames),
            "seconds" | "secs" | "s" => Some(ClockMode::Seconds),
            _ => None,
        }
    }
    /// Amount the clock advances for a frame of `delta` seconds.
    pub fn step(self, delta: f32) -> f64 {
        match self {
            ClockMode::Frames => 1.0,
            ClockMode::Seconds => f64::from(delta),
        }
    }
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct OrbitAnimator {
    /// Entity whose transform is written. `None` skips the write.
    pub target: Option<Entity>,
    /// Monotonic time accumulator fed to the motion law. Kept in `f64` so a
    /// frame step still registers after days of uptime.
    pub time: f64,
    pub clock: ClockMode,
}

impl OrbitAnimator {
    pub fn new(target: Entity) -> Self {
        Self {
            target: Some(target),
            time: 0.0,
            clock: ClockMode::Frames,
        }
    }
    pub fn detached() -> Self {
        Self {
            target: None,
            time: 0.0,
            clock: ClockMode::Frames,
        }
    }
    pub fn with_clock(mut self, clock: ClockMode) -> Self {
        self.clock = clock;
        self
    }
}

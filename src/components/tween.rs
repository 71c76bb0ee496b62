//! Eased translation over time.
//!
//! [`TweenTranslation`] moves an entity's
//! [`Transform3D`](super::transform::Transform3D) position from `from` to
//! `to` over `duration` seconds, once. See [`crate::systems::tween`] for the
//! update system.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Easing curves applied to the normalized tween time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct TweenTranslation {
    pub from: Vec3,
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    pub easing: Easing,
    /// Cleared when the tween reaches `to`.
    pub playing: bool,
    /// Seconds played so far.
    pub time: f32,
}

impl TweenTranslation {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    pub fn is_finished(&self) -> bool {
        !self.playing
    }
}

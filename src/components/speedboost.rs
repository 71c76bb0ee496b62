//! Temporary speed boost with frame-counted decay.
//!
//! A [`SpeedBoost`] sits on an animator entity next to its
//! [`OrbitMotion`](super::orbit::OrbitMotion). A click on the linked
//! trigger entity calls [`SpeedBoost::trigger`]; the orbit update loop calls
//! [`SpeedBoost::tick`] once per frame. After `decay_threshold` ticks without
//! a new trigger the multiplier drops back to `base_multiplier`.
//!
//! # States
//!
//! - [`SpeedPhase::Idle`] – multiplier at baseline, ticks do nothing
//! - [`SpeedPhase::Boosted`] – multiplier elevated, counter advancing
//!
//! Re-triggering while boosted restarts the countdown; boosts never stack.

use bevy_ecs::prelude::Component;

use crate::error::ConfigError;

/// Which side of the boost state machine a [`SpeedBoost`] is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedPhase {
    Idle,
    Boosted,
}

/// Speed multiplier state for one animator.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct SpeedBoost {
    /// Current multiplier applied to the motion law.
    pub multiplier: f32,
    /// Frames elapsed since the last trigger.
    pub decay_counter: u32,
    /// Frames until the boost expires.
    pub decay_threshold: u32,
    /// Idle multiplier.
    pub base_multiplier: f32,
    /// Multiplier applied by [`SpeedBoost::trigger`].
    pub boosted_multiplier: f32,
    /// Whether the self-roll term of the motion law is active.
    pub self_rotating: bool,
    /// When set, a trigger also starts self-rotation until the boost ends.
    pub couple_self_rotation: bool,
}

impl SpeedBoost {
    /// Create an idle speed state.
    ///
    /// Rejects a zero `decay_threshold` and a `boosted_multiplier` that is
    /// not above the baseline of 1.0.
    pub fn new(boosted_multiplier: f32, decay_threshold: u32) -> Result<Self, ConfigError> {
        if decay_threshold == 0 {
            return Err(ConfigError::invalid(
                "boost.decay_frames",
                "must be greater than zero",
            ));
        }
        if !boosted_multiplier.is_finite() || boosted_multiplier <= 1.0 {
            return Err(ConfigError::invalid(
                "boost.multiplier",
                format!("{boosted_multiplier} must be finite and greater than 1.0"),
            ));
        }
        Ok(Self {
            multiplier: 1.0,
            decay_counter: 0,
            decay_threshold,
            base_multiplier: 1.0,
            boosted_multiplier,
            self_rotating: false,
            couple_self_rotation: true,
        })
    }

    pub fn with_coupled_self_rotation(mut self, coupled: bool) -> Self {
        self.couple_self_rotation = coupled;
        self
    }

    pub fn phase(&self) -> SpeedPhase {
        if self.multiplier > self.base_multiplier {
            SpeedPhase::Boosted
        } else {
            SpeedPhase::Idle
        }
    }

    pub fn is_boosted(&self) -> bool {
        self.phase() == SpeedPhase::Boosted
    }

    /// Jump to the boosted multiplier and restart the countdown.
    pub fn trigger(&mut self) {
        self.multiplier = self.boosted_multiplier;
        self.decay_counter = 0;
        if self.couple_self_rotation {
            self.self_rotating = true;
        }
    }

    /// Advance the countdown by one frame.
    ///
    /// Returns `true` on the tick that ends a boost.
    pub fn tick(&mut self) -> bool {
        if self.multiplier <= self.base_multiplier {
            return false;
        }
        self.decay_counter += 1;
        if self.decay_counter >= self.decay_threshold {
            self.multiplier = self.base_multiplier;
            self.decay_counter = 0;
            self.self_rotating = false;
            return true;
        }
        false
    }

    /// Frames left before the boost expires, zero when idle.
    pub fn remaining_frames(&self) -> u32 {
        match self.phase() {
            SpeedPhase::Idle => 0,
            SpeedPhase::Boosted => self.decay_threshold.saturating_sub(self.decay_counter),
        }
    }
}

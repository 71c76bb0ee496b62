//! Components reacting to host pointer events.
//!
//! - [`Clickable`] – hover text shown by the host and the button it listens to
//! - [`BoostTrigger`] – clicking this entity boosts an orbit animator
//! - [`Interaction`] – clicking logs a message and asks the host to play a clip
//!
//! See [`crate::systems::pointer`] for the observers.

use bevy_ecs::prelude::{Component, Entity};

use crate::events::pointer::PointerButton;

#[derive(Component, Clone, Debug)]
pub struct Clickable {
    pub hover_text: String,
    pub button: PointerButton,
}

impl Clickable {
    pub fn new(hover_text: impl Into<String>) -> Self {
        Self {
            hover_text: hover_text.into(),
            button: PointerButton::Primary,
        }
    }
}

/// Links a clickable entity to the animator controller it boosts.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoostTrigger {
    pub animator: Entity,
}

/// Audio clip reference handed to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct SoundClip {
    pub url: String,
    pub volume: f32,
}

impl SoundClip {
    pub fn new(url: impl Into<String>, volume: f32) -> Self {
        Self {
            url: url.into(),
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

#[derive(Component, Clone, Debug, Default)]
pub struct Interaction {
    pub message: Option<String>,
    pub sound: Option<SoundClip>,
}

impl Interaction {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
    pub fn with_sound(mut self, sound: SoundClip) -> Self {
        self.sound = Some(sound);
        self
    }
}

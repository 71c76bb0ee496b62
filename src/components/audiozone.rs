//! Ambient audio zones.
//!
//! A [`TriggerBox`] is an axis-aligned box centred on its entity's
//! [`Transform3D`](super::transform::Transform3D) position. Boxes with an
//! [`AudioZone`] switch the ambient clip when the player walks in; the box
//! marked [`BuildingBounds`] stops it when the player walks out. The clip is
//! played on the single [`AmbientSpeaker`] entity.

use bevy_ecs::prelude::Component;
use glam::Vec3;

use crate::components::interactive::SoundClip;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct TriggerBox {
    /// Full extent along each axis.
    pub size: Vec3,
    /// Whether the player was inside at the last check.
    pub player_inside: bool,
}

impl TriggerBox {
    pub fn new(size: Vec3) -> Self {
        Self {
            size,
            player_inside: false,
        }
    }

    /// Whether `point` lies inside the box centred at `center`, faces included.
    pub fn contains(&self, center: Vec3, point: Vec3) -> bool {
        (point - center).abs().cmple(self.size * 0.5).all()
    }
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct AudioZone {
    pub name: String,
    pub clip: SoundClip,
}

impl AudioZone {
    pub fn new(name: impl Into<String>, clip: SoundClip) -> Self {
        Self {
            name: name.into(),
            clip,
        }
    }
}

/// Leaving this box stops the ambient clip.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct BuildingBounds;

/// Entity the ambient clips play on.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct AmbientSpeaker;

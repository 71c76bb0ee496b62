//! ECS components for scene entities.
//!
//! Submodules overview:
//! - [`animator`] – orbit animator controller: clock and target handle
//! - [`audiozone`] – trigger boxes that switch the ambient clip
//! - [`elevator`] – elevator floor table and travel state
//! - [`group`] – label used to find and list entities
//! - [`interactive`] – clickable entities, boost triggers, interactions
//! - [`ledboard`] – rotating LED message board
//! - [`marker`] – debug markers spawned from the console
//! - [`nightlight`] – lights switched by the day/night poll
//! - [`orbit`] – circular orbit with vertical bob (the motion law)
//! - [`speedboost`] – temporary speed multiplier with frame-counted decay
//! - [`spin`] – perpetual rotation about an axis
//! - [`transform`] – 3D position, rotation and scale
//! - [`tween`] – eased translation

pub mod animator;
pub mod audiozone;
pub mod elevator;
pub mod group;
pub mod interactive;
pub mod ledboard;
pub mod marker;
pub mod nightlight;
pub mod orbit;
pub mod speedboost;
pub mod spin;
pub mod transform;
pub mod tween;

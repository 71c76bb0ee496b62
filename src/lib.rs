//! AutoGestionPro HQ scene library.
//!
//! The host runtime owns a `bevy_ecs` [`World`](bevy_ecs::world::World):
//! it stores entities and their transforms, calls
//! [`scene::run_frame`] once per rendered frame and delivers clicks and floor
//! choices through [`scene::click`] and [`scene::select_floor`]. This crate
//! animates the scene and hands audio and announcement requests back to the
//! host as messages.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod scene;
pub mod systems;

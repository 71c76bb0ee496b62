//! Scene systems and observers.
//!
//! Submodules overview
//! - [`audiozones`] – switch the ambient clip as the player moves between zones
//! - [`console`] – debug console commands, dispatcher and queue drain
//! - [`elevator`] – floor prompt, floor selection and arrival
//! - [`ledboard`] – rotate LED board messages and visitor counts
//! - [`messages`] – advance the outbound message queues
//! - [`nightlights`] – poll the sky colour and switch building lights
//! - [`orbit`] – the orbit update loop with speed boost decay
//! - [`perf`] – feed the frame rate monitor
//! - [`pointer`] – react to host clicks: boosts and interactions
//! - [`spin`] – perpetual rotations (drone, propellers)
//! - [`time`] – update scene time and delta
//! - [`tween`] – eased translations

pub mod audiozones;
pub mod console;
pub mod elevator;
pub mod ledboard;
pub mod messages;
pub mod nightlights;
pub mod orbit;
pub mod perf;
pub mod pointer;
pub mod spin;
pub mod time;
pub mod tween;

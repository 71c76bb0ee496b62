//! ECS resources shared by the scene systems.
//!
//! Overview
//! - `debugconsole` – console command registry, pending lines and debug toggles
//! - `perfmonitor` – frame rate bookkeeping
//! - `player` – player position reported by the host
//! - `rng` – seedable random source for simulated data
//! - `sceneconfig` – animation, boost, light and LED constants loaded from INI
//! - `skycolor` – sky colour reported by the host, used for night detection
//! - `worldtime` – scene time, delta and frame count
pub mod debugconsole;
pub mod perfmonitor;
pub mod player;
pub mod rng;
pub mod sceneconfig;
pub mod skycolor;
pub mod worldtime;

//! Event and message types exchanged with the host and between systems.
//!
//! Submodules:
//! - [`announcement`] – on-screen text requests for the host UI
//! - [`audio`] – clip playback requests for the host
//! - [`elevator`] – floor selection and arrival
//! - [`pointer`] – pointer-down events triggered by the host
//! - [`speedboost`] – boost start/end notifications
pub mod announcement;
pub mod audio;
pub mod elevator;
pub mod pointer;
pub mod speedboost;

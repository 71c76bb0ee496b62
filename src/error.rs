//! Error types for scene configuration and the debug console.
//!
//! The per-frame systems never fail; errors only surface while building the
//! scene from constants or while running console commands.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected scene constants or an unreadable configuration file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("failed to load config file {path:?}: {detail}")]
    Load { path: PathBuf, detail: String },
    #[error("failed to save config file {path:?}: {detail}")]
    Save { path: PathBuf, detail: String },
    #[error("invalid value for {key}: {detail}")]
    Invalid { key: &'static str, detail: String },
}

impl ConfigError {
    pub fn invalid(key: &'static str, detail: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            detail: detail.into(),
        }
    }
}

/// Failure while parsing or running a debug console command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("empty command line")]
    Empty,
    #[error("unknown command: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),
    #[error("bad arguments for '{command}': {reason} (usage: {usage})")]
    BadArguments {
        command: String,
        reason: String,
        usage: String,
    },
    #[error("command '{command}' failed: {detail}")]
    Failed { command: String, detail: String },
}

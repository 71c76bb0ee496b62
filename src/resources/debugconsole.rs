//! Debug console registry and settings.
//!
//! Commands are plain functions over the whole [`World`], registered under a
//! case-insensitive name. The built-in set and the dispatcher live in
//! [`crate::systems::console`]; this module only stores them.

use bevy_ecs::prelude::*;
use log::debug;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::ConsoleError;

/// Signature of a console command: world access plus the arguments after the
/// command name. Returns the lines to print.
pub type CommandFn = fn(&mut World, &[&str]) -> Result<Vec<String>, ConsoleError>;

#[derive(Clone)]
pub struct CommandSpec {
    pub name: String,
    pub help: String,
    pub usage: String,
    pub run: CommandFn,
}

/// Toggles exposed through the `config` and `toggle` commands.
///
/// - `enabled` – the performance monitor only samples while set
/// - `show_fps` – log frame stats each time the monitor refreshes
/// - `show_entity_count` – `stats` includes the entity count
/// - `show_player_position` – `stats` includes the host-reported player position
/// - `verbose_logging` – log every console command before it runs
#[derive(Resource, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DebugSettings {
    pub enabled: bool,
    pub show_fps: bool,
    pub show_entity_count: bool,
    pub show_player_position: bool,
    pub verbose_logging: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_fps: true,
            show_entity_count: true,
            show_player_position: false,
            verbose_logging: true,
        }
    }
}

impl DebugSettings {
    /// Flip a setting by its field name. Returns the new value, or `None` for
    /// an unknown name.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let field = match name {
            "enabled" => &mut self.enabled,
            "show_fps" | "showfps" => &mut self.show_fps,
            "show_entity_count" | "showentitycount" => &mut self.show_entity_count,
            "show_player_position" | "showplayerposition" => &mut self.show_player_position,
            "verbose_logging" | "verboselogging" => &mut self.verbose_logging,
            _ => return None,
        };
        *field = !*field;
        Some(*field)
    }
}

/// Registry of console commands.
#[derive(Resource, Clone, Default)]
pub struct DebugConsole {
    commands: FxHashMap<String, CommandSpec>,
}

impl DebugConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a command. Names are stored lowercase.
    pub fn register(
        &mut self,
        name: &str,
        help: impl Into<String>,
        usage: impl Into<String>,
        run: CommandFn,
    ) {
        let key = name.to_ascii_lowercase();
        debug!("Debug command registered: {}", key);
        self.commands.insert(
            key.clone(),
            CommandSpec {
                name: key,
                help: help.into(),
                usage: usage.into(),
                run,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(&name.to_ascii_lowercase())
    }

    /// All commands sorted by name.
    pub fn specs(&self) -> Vec<&CommandSpec> {
        let mut specs: Vec<_> = self.commands.values().collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        specs
    }
}

/// Command lines queued by the host, drained once per frame by
/// [`console_command_system`](crate::systems::console::console_command_system).
#[derive(Resource, Debug, Clone, Default)]
pub struct PendingCommands {
    pub lines: Vec<String>,
}

impl PendingCommands {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

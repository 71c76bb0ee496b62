//! Rotating LED message board.
//!
//! The board cycles through `messages` every `interval` seconds. A message
//! may contain the `{visitors}` placeholder, replaced by the simulated
//! visitor count which is re-rolled every `visitor_interval` seconds.

use bevy_ecs::prelude::Component;

pub const VISITORS_PLACEHOLDER: &str = "{visitors}";

#[derive(Component, Clone, Debug)]
pub struct LedBoard {
    pub messages: Vec<String>,
    pub index: usize,
    pub visitors: u32,
    /// Seconds between message changes.
    pub interval: f32,
    /// Seconds between visitor count updates.
    pub visitor_interval: f32,
    pub message_elapsed: f32,
    pub visitor_elapsed: f32,
}

impl LedBoard {
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
            index: 0,
            visitors: 0,
            interval: 5.0,
            visitor_interval: 30.0,
            message_elapsed: 0.0,
            visitor_elapsed: 0.0,
        }
    }
    pub fn with_intervals(mut self, interval: f32, visitor_interval: f32) -> Self {
        self.interval = interval;
        self.visitor_interval = visitor_interval;
        self
    }

    /// Step to the next message, wrapping around. Returns the rendered text.
    pub fn advance(&mut self) -> Option<String> {
        if self.messages.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.messages.len();
        Some(self.current_text())
    }

    /// Current message with the visitor placeholder filled in.
    pub fn current_text(&self) -> String {
        self.messages
            .get(self.index)
            .map(|m| m.replace(VISITORS_PLACEHOLDER, &self.visitors.to_string()))
            .unwrap_or_default()
    }
}

use bevy_ecs::prelude::Component;

/// Scene-level label used by console listings and lookups ("drone", "light").
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }
    pub fn name(&self) -> &str {
        &self.0
    }
}

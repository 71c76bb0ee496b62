use bevy_ecs::prelude::Component;

/// Tag for debug markers spawned from the console; `clearmarkers` despawns them.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct DebugMarker;

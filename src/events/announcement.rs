use bevy_ecs::message::Message;

/// Text the host should flash on screen for `duration_ms` milliseconds.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub duration_ms: u32,
}

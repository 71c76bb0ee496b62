//! Message queue maintenance.
//!
//! Bevy ECS' [`Messages`] needs `update()` once per frame so old messages
//! are dropped if the host did not drain them. Run these last.

use bevy_ecs::prelude::{Messages, ResMut};

use crate::events::announcement::Announcement;
use crate::events::audio::AudioCmd;

pub fn update_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

pub fn update_announcements(mut msgs: ResMut<Messages<Announcement>>) {
    msgs.update();
}

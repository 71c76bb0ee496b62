//! LED board rotation.
//!
//! Advances each [`LedBoard`] on its own timers: the message every
//! `interval` seconds (announced to the host with a short chime) and the
//! simulated visitor count every `visitor_interval` seconds.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::ledboard::LedBoard;
use crate::events::announcement::Announcement;
use crate::events::audio::AudioCmd;
use crate::resources::rng::SceneRng;
use crate::resources::worldtime::WorldTime;

pub const ANNOUNCEMENT_MS: u32 = 3000;
pub const LED_UPDATE_SOUND: &str = "sounds/led-update.wav";
pub const MIN_VISITORS: u32 = 10;
pub const MAX_VISITORS: u32 = 60;

pub fn led_board_system(
    time: Res<WorldTime>,
    mut rng: ResMut<SceneRng>,
    mut boards: Query<(Entity, &mut LedBoard)>,
    mut announcements: MessageWriter<Announcement>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    for (entity, mut board) in boards.iter_mut() {
        board.visitor_elapsed += time.delta;
        if board.visitor_elapsed >= board.visitor_interval {
            board.visitor_elapsed -= board.visitor_interval;
            board.visitors = rng.0.u32(MIN_VISITORS..MAX_VISITORS);
            debug!("LED board {:?}: {} visitors online", entity, board.visitors);
        }

        board.message_elapsed += time.delta;
        if board.message_elapsed < board.interval {
            continue;
        }
        board.message_elapsed -= board.interval;
        let Some(text) = board.advance() else {
            continue;
        };
        announcements.write(Announcement {
            text,
            duration_ms: ANNOUNCEMENT_MS,
        });
        audio_cmds.write(AudioCmd::Play {
            entity,
            url: LED_UPDATE_SOUND.to_string(),
            volume: 0.2,
            looped: false,
        });
    }
}

//! Observers for host pointer events.
//!
//! - [`boost_on_click_observer`] – a click on a [`BoostTrigger`] boosts the
//!   linked animator's [`SpeedBoost`]
//! - [`interaction_observer`] – a click on an [`Interaction`] logs its message
//!   and asks the host to play its clip
//!
//! Both ignore clicks with a button other than the one the entity's
//! [`Clickable`] listens to (primary when there is none).

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::interactive::{BoostTrigger, Clickable, Interaction};
use crate::components::speedboost::SpeedBoost;
use crate::events::audio::AudioCmd;
use crate::events::pointer::{PointerButton, PointerDownEvent};
use crate::events::speedboost::SpeedBoostStarted;

pub(crate) fn accepts(clickable: Option<&Clickable>, button: PointerButton) -> bool {
    clickable.map_or(PointerButton::Primary, |c| c.button) == button
}

pub fn boost_on_click_observer(
    trigger: On<PointerDownEvent>,
    triggers: Query<(&BoostTrigger, Option<&Clickable>)>,
    mut boosts: Query<&mut SpeedBoost>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok((boost_trigger, clickable)) = triggers.get(event.entity) else {
        return;
    };
    if !accepts(clickable, event.button) {
        return;
    }
    let Ok(mut boost) = boosts.get_mut(boost_trigger.animator) else {
        warn!(
            "Boost trigger {:?} points at {:?}, which has no SpeedBoost",
            event.entity, boost_trigger.animator
        );
        return;
    };
    boost.trigger();
    info!(
        "Boost trigger {:?} clicked - accelerating animator {:?} to {}x",
        event.entity, boost_trigger.animator, boost.multiplier
    );
    commands.trigger(SpeedBoostStarted {
        animator: boost_trigger.animator,
        multiplier: boost.multiplier,
    });
}

pub fn interaction_observer(
    trigger: On<PointerDownEvent>,
    interactions: Query<(&Interaction, Option<&Clickable>)>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    let Ok((interaction, clickable)) = interactions.get(event.entity) else {
        return;
    };
    if !accepts(clickable, event.button) {
        return;
    }
    if let Some(message) = &interaction.message {
        info!("{}", message);
    }
    if let Some(sound) = &interaction.sound {
        audio_cmds.write(AudioCmd::Play {
            entity: event.entity,
            url: sound.url.clone(),
            volume: sound.volume,
            looped: false,
        });
    }
}

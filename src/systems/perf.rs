use bevy_ecs::prelude::*;
use log::info;

use crate::resources::debugconsole::DebugSettings;
use crate::resources::perfmonitor::PerfMonitor;
use crate::resources::worldtime::WorldTime;

/// Feed the frame delta to the [`PerfMonitor`] while debugging is enabled,
/// logging the refreshed stats when `show_fps` is set.
pub fn perf_monitor_system(
    time: Res<WorldTime>,
    mut perf: ResMut<PerfMonitor>,
    settings: Option<Res<DebugSettings>>,
) {
    let settings = settings.as_deref().cloned().unwrap_or_default();
    if !settings.enabled {
        return;
    }
    if perf.update(time.delta) && settings.show_fps {
        info!("{}", perf.stats());
    }
}

//! Frame rate bookkeeping for the debug console.

use bevy_ecs::prelude::Resource;

/// Counts frames and refreshes FPS once per accumulated second.
#[derive(Resource, Clone, Debug, Default)]
pub struct PerfMonitor {
    frames: u32,
    window: f32,
    fps: u32,
    frame_time_ms: f32,
}

impl PerfMonitor {
    /// Record one frame of `delta` seconds. Returns `true` when the FPS
    /// figures were refreshed.
    pub fn update(&mut self, delta: f32) -> bool {
        self.frames += 1;
        self.window += delta;
        if self.window >= 1.0 {
            self.fps = (self.frames as f32 / self.window).round() as u32;
            self.frame_time_ms = self.window * 1000.0 / self.frames as f32;
            self.frames = 0;
            self.window = 0.0;
            return true;
        }
        false
    }
    pub fn fps(&self) -> u32 {
        self.fps
    }
    pub fn frame_time_ms(&self) -> f32 {
        self.frame_time_ms
    }
    pub fn stats(&self) -> String {
        format!(
            "FPS: {} | Frame Time: {:.2}ms",
            self.fps, self.frame_time_ms
        )
    }
}

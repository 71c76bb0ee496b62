//! Scene configuration resource.
//!
//! Holds the constants of the orbit animation, the speed boost, the night
//! light poll and the LED board. Values are fixed once the scene is spawned;
//! there is no runtime reconfiguration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [orbit]
//! radius = 4
//! base_height = 2
//! amplitude = 1.5
//! base_speed = 0.02
//! self_rotation_speed = 3
//! yaw_rate = 0.05
//! clock = frames
//!
//! [boost]
//! multiplier = 2.5
//! decay_frames = 120
//! couple_self_rotation = true
//!
//! [lights]
//! check_interval = 5
//! night_threshold = 0.1
//!
//! [led]
//! interval = 5
//! visitor_interval = 30
//!
//! [debug]
//! enabled = true
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::animator::ClockMode;
use crate::components::orbit::OrbitMotion;
use crate::components::speedboost::SpeedBoost;
use crate::error::ConfigError;

const DEFAULT_RADIUS: f32 = 4.0;
const DEFAULT_BASE_HEIGHT: f32 = 2.0;
const DEFAULT_AMPLITUDE: f32 = 1.5;
const DEFAULT_BASE_SPEED: f32 = 0.02;
const DEFAULT_SELF_ROTATION_SPEED: f32 = 3.0;
const DEFAULT_YAW_RATE: f32 = 0.05;
const DEFAULT_BOOST_MULTIPLIER: f32 = 2.5;
const DEFAULT_DECAY_FRAMES: u32 = 120;
const DEFAULT_CHECK_INTERVAL: f32 = 5.0;
const DEFAULT_NIGHT_THRESHOLD: f32 = 0.1;
const DEFAULT_LED_INTERVAL: f32 = 5.0;
const DEFAULT_VISITOR_INTERVAL: f32 = 30.0;
const DEFAULT_CONFIG_PATH: &str = "./scene.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Orbit radius in the XZ plane.
    pub radius: f32,
    /// Centre height of the vertical bob.
    pub base_height: f32,
    /// Vertical bob amplitude.
    pub amplitude: f32,
    /// Angular speed per unit of time at multiplier 1.
    pub base_speed: f32,
    /// Self-roll speed in degrees per unit of time.
    pub self_rotation_speed: f32,
    /// Yaw in degrees per unit of time at multiplier 1.
    pub yaw_rate: f32,
    pub clock: ClockMode,
    /// Multiplier applied by a click on the boost trigger.
    pub boost_multiplier: f32,
    /// Frames until a boost decays back to 1.0.
    pub decay_frames: u32,
    /// Whether a boost also starts self-rotation.
    pub couple_self_rotation: bool,
    /// Seconds between night light polls.
    pub light_check_interval: f32,
    /// Sky channels below this value count as night.
    pub night_threshold: f32,
    /// Seconds between LED board messages.
    pub led_interval: f32,
    /// Seconds between visitor count updates.
    pub visitor_interval: f32,
    /// Enables the debug console and performance monitor.
    pub debug_enabled: bool,
    pub config_path: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            base_height: DEFAULT_BASE_HEIGHT,
            amplitude: DEFAULT_AMPLITUDE,
            base_speed: DEFAULT_BASE_SPEED,
            self_rotation_speed: DEFAULT_SELF_ROTATION_SPEED,
            yaw_rate: DEFAULT_YAW_RATE,
            clock: ClockMode::Frames,
            boost_multiplier: DEFAULT_BOOST_MULTIPLIER,
            decay_frames: DEFAULT_DECAY_FRAMES,
            couple_self_rotation: true,
            light_check_interval: DEFAULT_CHECK_INTERVAL,
            night_threshold: DEFAULT_NIGHT_THRESHOLD,
            led_interval: DEFAULT_LED_INTERVAL,
            visitor_interval: DEFAULT_VISITOR_INTERVAL,
            debug_enabled: true,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load values from the INI file. Missing keys keep their current values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.load(&self.config_path).map_err(|e| ConfigError::Load {
            path: self.config_path.clone(),
            detail: e,
        })?;
        self.apply_ini(&ini)?;
        info!(
            "Loaded scene config from {:?}: radius={}, base_speed={}, boost={}x for {} frames",
            self.config_path, self.radius, self.base_speed, self.boost_multiplier, self.decay_frames
        );
        self.validate()
    }

    /// Parse values from an INI string, as `load_from_file` does for files.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.read(text.to_string()).map_err(|e| ConfigError::Load {
            path: self.config_path.clone(),
            detail: e,
        })?;
        self.apply_ini(&ini)?;
        self.validate()
    }

    fn apply_ini(&mut self, ini: &Ini) -> Result<(), ConfigError> {
        let float = |section: &str, key: &'static str| -> Result<Option<f32>, ConfigError> {
            ini.getfloat(section, key)
                .map(|v| v.map(|f| f as f32))
                .map_err(|e| ConfigError::invalid(key, e))
        };

        // [orbit]
        if let Some(v) = float("orbit", "radius")? {
            self.radius = v;
        }
        if let Some(v) = float("orbit", "base_height")? {
            self.base_height = v;
        }
        if let Some(v) = float("orbit", "amplitude")? {
            self.amplitude = v;
        }
        if let Some(v) = float("orbit", "base_speed")? {
            self.base_speed = v;
        }
        if let Some(v) = float("orbit", "self_rotation_speed")? {
            self.self_rotation_speed = v;
        }
        if let Some(v) = float("orbit", "yaw_rate")? {
            self.yaw_rate = v;
        }
        if let Some(clock) = ini.get("orbit", "clock") {
            self.clock = ClockMode::parse(&clock)
                .ok_or_else(|| ConfigError::invalid("orbit.clock", clock.clone()))?;
        }

        // [boost]
        if let Some(v) = float("boost", "multiplier")? {
            self.boost_multiplier = v;
        }
        if let Some(v) = ini
            .getuint("boost", "decay_frames")
            .map_err(|e| ConfigError::invalid("boost.decay_frames", e))?
        {
            self.decay_frames = u32::try_from(v)
                .map_err(|_| ConfigError::invalid("boost.decay_frames", v.to_string()))?;
        }
        if let Some(v) = ini
            .getbool("boost", "couple_self_rotation")
            .map_err(|e| ConfigError::invalid("boost.couple_self_rotation", e))?
        {
            self.couple_self_rotation = v;
        }

        // [lights]
        if let Some(v) = float("lights", "check_interval")? {
            self.light_check_interval = v;
        }
        if let Some(v) = float("lights", "night_threshold")? {
            self.night_threshold = v;
        }

        // [led]
        if let Some(v) = float("led", "interval")? {
            self.led_interval = v;
        }
        if let Some(v) = float("led", "visitor_interval")? {
            self.visitor_interval = v;
        }

        // [debug]
        if let Some(v) = ini
            .getbool("debug", "enabled")
            .map_err(|e| ConfigError::invalid("debug.enabled", e))?
        {
            self.debug_enabled = v;
        }
        Ok(())
    }

    /// Check the constants the animation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::invalid(
                "orbit.radius",
                format!("{} must be positive", self.radius),
            ));
        }
        if !(self.base_speed.is_finite() && self.base_speed > 0.0) {
            return Err(ConfigError::invalid(
                "orbit.base_speed",
                format!("{} must be positive", self.base_speed),
            ));
        }
        if !(self.amplitude.is_finite() && self.amplitude >= 0.0) {
            return Err(ConfigError::invalid(
                "orbit.amplitude",
                format!("{} must not be negative", self.amplitude),
            ));
        }
        for (key, value) in [
            ("orbit.self_rotation_speed", self.self_rotation_speed),
            ("orbit.yaw_rate", self.yaw_rate),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(key, format!("{value} must be finite")));
            }
        }
        for (key, value) in [
            ("lights.check_interval", self.light_check_interval),
            ("led.interval", self.led_interval),
            ("led.visitor_interval", self.visitor_interval),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(key, format!("{value} must be positive")));
            }
        }
        self.speed_boost().map(|_| ())
    }

    pub fn orbit_motion(&self) -> OrbitMotion {
        OrbitMotion::new(self.radius, self.base_height, self.amplitude, self.base_speed)
            .with_self_rotation_speed(self.self_rotation_speed)
            .with_yaw_rate(self.yaw_rate)
    }

    pub fn speed_boost(&self) -> Result<SpeedBoost, ConfigError> {
        Ok(SpeedBoost::new(self.boost_multiplier, self.decay_frames)?
            .with_coupled_self_rotation(self.couple_self_rotation))
    }

    /// Write the current values to the INI file.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.set("orbit", "radius", Some(self.radius.to_string()));
        ini.set("orbit", "base_height", Some(self.base_height.to_string()));
        ini.set("orbit", "amplitude", Some(self.amplitude.to_string()));
        ini.set("orbit", "base_speed", Some(self.base_speed.to_string()));
        ini.set(
            "orbit",
            "self_rotation_speed",
            Some(self.self_rotation_speed.to_string()),
        );
        ini.set("orbit", "yaw_rate", Some(self.yaw_rate.to_string()));
        let clock = match self.clock {
            ClockMode::Frames => "frames",
            ClockMode::Seconds => "seconds",
        };
        ini.set("orbit", "clock", Some(clock.to_string()));
        ini.set("boost", "multiplier", Some(self.boost_multiplier.to_string()));
        ini.set("boost", "decay_frames", Some(self.decay_frames.to_string()));
        ini.set(
            "boost",
            "couple_self_rotation",
            Some(self.couple_self_rotation.to_string()),
        );
        ini.set(
            "lights",
            "check_interval",
            Some(self.light_check_interval.to_string()),
        );
        ini.set(
            "lights",
            "night_threshold",
            Some(self.night_threshold.to_string()),
        );
        ini.set("led", "interval", Some(self.led_interval.to_string()));
        ini.set(
            "led",
            "visitor_interval",
            Some(self.visitor_interval.to_string()),
        );
        ini.set("debug", "enabled", Some(self.debug_enabled.to_string()));

        ini.write(&self.config_path).map_err(|e| ConfigError::Save {
            path: self.config_path.clone(),
            detail: e.to_string(),
        })?;
        info!("Saved scene config to {:?}", self.config_path);
        Ok(())
    }
}

//! Timing configuration for adb operations

use lazy_static::lazy_static;
use std::env;
use std::time::Duration;

fn env_seconds(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| Duration::try_from_secs_f64(*v).is_ok())
        .unwrap_or(default)
}

/// Timeouts applied to adb invocations, in seconds
#[derive(Debug, Clone)]
pub struct CommandTimingConfig {
    pub command_timeout: f64,
    pub dump_timeout: f64,
    pub screenshot_timeout: f64,
}

impl Default for CommandTimingConfig {
    fn default() -> Self {
        Self {
            command_timeout: env_seconds("UI_PROBE_COMMAND_TIMEOUT", 10.0),
            dump_timeout: env_seconds("UI_PROBE_DUMP_TIMEOUT", 20.0),
            screenshot_timeout: env_seconds("UI_PROBE_SCREENSHOT_TIMEOUT", 10.0),
        }
    }
}

/// Settle delays after input operations, in seconds
#[derive(Debug, Clone)]
pub struct InputTimingConfig {
    pub tap_delay: f64,
    pub key_delay: f64,
    pub launch_delay: f64,
}

impl Default for InputTimingConfig {
    fn default() -> Self {
        Self {
            tap_delay: env_seconds("UI_PROBE_TAP_DELAY", 0.0),
            key_delay: env_seconds("UI_PROBE_KEY_DELAY", 0.0),
            launch_delay: env_seconds("UI_PROBE_LAUNCH_DELAY", 0.0),
        }
    }
}

/// Master timing configuration
#[derive(Debug, Clone, Default)]
pub struct TimingConfig {
    pub command: CommandTimingConfig,
    pub input: InputTimingConfig,
}

lazy_static! {
    /// Global timing configuration instance
    pub static ref TIMING_CONFIG: TimingConfig = TimingConfig::default();
}

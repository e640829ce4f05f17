//! Configuration module for ui_probe
//!
//! This module contains:
//! - `keys`: Key name to key code mapping
//! - `timing`: Timeouts and settle delays for adb operations

mod keys;
mod timing;

pub use keys::{key_code, KEY_CODES};
pub use timing::{CommandTimingConfig, InputTimingConfig, TimingConfig, TIMING_CONFIG};

/// Resource id prefix of system chrome (status bar, navigation bar)
pub const SYSTEM_UI_PREFIX: &str = "com.android.systemui";

/// Where `uiautomator dump` writes on the device
pub const DEVICE_DUMP_PATH: &str = "/sdcard/window_dump.xml";

/// Intent category used to launch an app's main activity
pub const LAUNCHER_CATEGORY: &str = "android.intent.category.LAUNCHER";

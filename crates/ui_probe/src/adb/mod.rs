//! ADB (Android Debug Bridge) module for Android device control
//!
//! This module provides:
//! - `device`: the `AdbDevice` handle and control operations (tap, key, shell, apps)
//! - `input`: Text input handling
//! - `hierarchy`: UI hierarchy dumps
//! - `screenshot`: Screenshot capture

mod device;
#[cfg(all(test, unix))]
mod fake_adb;
mod hierarchy;
mod input;
mod screenshot;

pub use device::{parse_package_list, AdbDevice};
pub use input::escape_input_text;
pub use screenshot::Screenshot;

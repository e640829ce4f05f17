//! ui_probe: Android UI probing over adb
//!
//! This library provides:
//! - ADB (Android Debug Bridge) device control: tap, text input, key events,
//!   shell passthrough, app listing and launch, screenshots
//! - UI hierarchy dumps and their flattening into tap-targetable elements
//! - Persistence of extraction results and screenshots
//!
//! # Example
//!
//! ```no_run
//! use ui_probe::{AdbDevice, ArtifactSaver};
//!
//! #[tokio::main]
//! async fn main() -> ui_probe::Result<()> {
//!     let device = AdbDevice::new();
//!     let elements = device.dump_elements().await?;
//!
//!     if let Some(first) = elements.first() {
//!         device.tap(first.coordinates.x, first.coordinates.y).await?;
//!     }
//!
//!     let saver = ArtifactSaver::new("out").await?;
//!     saver.save_elements(&elements, "ui_elements.json").await?;
//!     Ok(())
//! }
//! ```

pub mod error;

pub mod config;

pub mod adb;
pub mod artifacts;
pub mod hierarchy;

pub use error::{AdbError, HierarchyError, Result};

pub use config::{
    key_code, CommandTimingConfig, InputTimingConfig, TimingConfig, DEVICE_DUMP_PATH,
    KEY_CODES, LAUNCHER_CATEGORY, SYSTEM_UI_PREFIX, TIMING_CONFIG,
};

pub use adb::{escape_input_text, parse_package_list, AdbDevice, Screenshot};

pub use artifacts::ArtifactSaver;

pub use hierarchy::{
    elements_json, extract_elements, flatten, Bounds, Coordinates, UiElement, UiNode,
};

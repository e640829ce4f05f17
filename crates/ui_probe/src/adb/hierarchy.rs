//! UI hierarchy dumps via `uiautomator`

use super::device::AdbDevice;
use crate::config::{DEVICE_DUMP_PATH, TIMING_CONFIG};
use crate::error::{AdbError, Result};
use crate::hierarchy::{extract_elements, UiElement};
use tempfile::tempdir;
use tokio::fs;
use tracing::debug;

impl AdbDevice {
    /// Dump the on-screen UI hierarchy and return the XML document
    pub async fn dump_hierarchy(&self) -> Result<String> {
        let timeout = TIMING_CONFIG.command.dump_timeout;
        let dumped = self
            .run_with_timeout(&["shell", "uiautomator", "dump", DEVICE_DUMP_PATH], timeout)
            .await?;
        debug!("uiautomator: {}", dumped);

        // The temp directory lives until the end of this call
        let temp_dir = tempdir().map_err(AdbError::Io)?;
        let local_path = temp_dir.path().join("window_dump.xml");
        let local = local_path.to_string_lossy();
        self.run_with_timeout(&["pull", DEVICE_DUMP_PATH, &*local], timeout)
            .await?;

        let bytes = fs::read(&local_path).await?;
        debug!("Pulled hierarchy dump: {} bytes", bytes.len());
        Ok(String::from_utf8(bytes)?)
    }

    /// Dump the hierarchy and flatten it into tap-targetable elements
    pub async fn dump_elements(&self) -> Result<Vec<UiElement>> {
        let xml = self.dump_hierarchy().await?;
        Ok(extract_elements(&xml)?)
    }
}

//! Persisting extraction results and screenshots to disk

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::adb::Screenshot;
use crate::error::Result;
use crate::hierarchy::UiElement;

/// Writes element lists and screenshots under one output directory
#[derive(Debug, Clone)]
pub struct ArtifactSaver {
    base_dir: PathBuf,
}

impl ArtifactSaver {
    /// Create a saver, creating `base_dir` if needed
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).await?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Write elements as a pretty-printed JSON array
    ///
    /// Non-ASCII text is written as UTF-8, not escaped.
    pub async fn save_elements(&self, elements: &[UiElement], file_name: &str) -> Result<PathBuf> {
        let path = self.base_dir.join(file_name);
        let json = serde_json::to_string_pretty(elements)?;
        fs::write(&path, json.as_bytes()).await?;

        info!("Saved {} elements to {}", elements.len(), path.display());
        Ok(path)
    }

    /// Write a screenshot as `screenshot_yyyy-mm-dd_HH-MM-SS-mmm.png`
    pub async fn save_screenshot(&self, screenshot: &Screenshot) -> Result<PathBuf> {
        let now: DateTime<Local> = Local::now();
        let file_name = format!("screenshot_{}.png", now.format("%Y-%m-%d_%H-%M-%S-%3f"));
        let path = self.base_dir.join(file_name);
        fs::write(&path, &screenshot.png).await?;

        debug!(
            "Saved screenshot: {} ({} bytes, {}x{})",
            path.display(),
            screenshot.png.len(),
            screenshot.width,
            screenshot.height
        );
        Ok(path)
    }
}

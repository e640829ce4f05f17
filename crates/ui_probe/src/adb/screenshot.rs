//! Screenshot utilities for capturing Android device screen

use super::device::AdbDevice;
use crate::config::TIMING_CONFIG;
use crate::error::{AdbError, Result};
use base64::{engine::general_purpose, Engine as _};
use tempfile::tempdir;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

/// Represents a captured screenshot
#[derive(Debug, Clone)]
pub struct Screenshot {
    /// PNG-encoded image data as produced by `screencap -p`
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Screenshot {
    /// Decode PNG bytes, validating them and reading the dimensions
    pub fn from_png(png: Vec<u8>) -> Result<Self> {
        let img = image::load_from_memory_with_format(&png, image::ImageFormat::Png)?;
        Ok(Self {
            width: img.width(),
            height: img.height(),
            png,
        })
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.png)
    }
}

impl AdbDevice {
    /// Capture the screen, pull it and remove the copy left on the device
    pub async fn screenshot(&self) -> Result<Screenshot> {
        let timeout = TIMING_CONFIG.command.screenshot_timeout;
        let remote = format!("/sdcard/ui_probe_{}.png", Uuid::new_v4().simple());

        self.run_with_timeout(&["shell", "screencap", "-p", remote.as_str()], timeout)
            .await?;

        // Use a temp directory so the file doesn't exist until adb pull creates it
        let temp_dir = tempdir().map_err(AdbError::Io)?;
        let local_path = temp_dir.path().join("screenshot.png");
        let local = local_path.to_string_lossy();
        let pulled = self
            .run_with_timeout(&["pull", remote.as_str(), &*local], timeout)
            .await;

        if let Err(e) = self.run(&["shell", "rm", "-f", remote.as_str()]).await {
            warn!("Failed to remove {} from device: {}", remote, e);
        }
        pulled?;

        let png = fs::read(&local_path).await?;
        debug!("Screenshot file size: {} bytes", png.len());

        let screenshot = Screenshot::from_png(png)?;
        debug!(
            "Screenshot dimensions: {}x{}",
            screenshot.width, screenshot.height
        );
        Ok(screenshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(width, height, Rgb([10, 20, 30]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_from_png_reads_dimensions() {
        let shot = Screenshot::from_png(png_bytes(4, 3)).unwrap();
        assert_eq!((shot.width, shot.height), (4, 3));
    }

    #[test]
    fn test_from_png_rejects_garbage() {
        assert!(matches!(
            Screenshot::from_png(b"not a png".to_vec()),
            Err(AdbError::Image(_))
        ));
    }

    #[test]
    fn test_base64_round_trip() {
        let bytes = png_bytes(1, 1);
        let shot = Screenshot::from_png(bytes.clone()).unwrap();
        let decoded = general_purpose::STANDARD.decode(shot.to_base64()).unwrap();
        assert_eq!(decoded, bytes);
    }

    #[cfg(unix)]
    mod scripted {
        use super::*;
        use crate::adb::fake_adb::FakeAdb;

        #[tokio::test]
        async fn test_screenshot_pulls_and_cleans_up() {
            let adb = FakeAdb::new(r#"pull*) cp "$(dirname "$0")/fixture.png" "$3" ;;"#);
            adb.fixture("fixture.png", &png_bytes(6, 2));

            let shot = adb.device().screenshot().await.unwrap();
            assert_eq!((shot.width, shot.height), (6, 2));

            let calls = adb.calls();
            assert!(calls[1].starts_with("shell screencap -p /sdcard/ui_probe_"));
            assert!(calls[2].starts_with("pull /sdcard/ui_probe_"));
            assert!(calls[3].starts_with("shell rm -f /sdcard/ui_probe_"));
        }

        #[tokio::test]
        async fn test_screenshot_removes_remote_when_pull_fails() {
            let adb = FakeAdb::new(
                r#"pull*) echo "adb: error: remote object does not exist" >&2; exit 1 ;;"#,
            );
            let err = adb.device().screenshot().await.unwrap_err();
            assert!(matches!(err, AdbError::CommandFailed(ref m) if m.contains("does not exist")));

            let calls = adb.calls();
            let remote = calls[1].trim_start_matches("shell screencap -p ");
            assert_eq!(calls.last().unwrap(), &format!("shell rm -f {}", remote));
        }

        #[tokio::test]
        async fn test_screenshot_rejects_non_png() {
            let adb = FakeAdb::new(r#"pull*) cp "$(dirname "$0")/fixture.png" "$3" ;;"#);
            adb.fixture("fixture.png", b"not a png");
            assert!(matches!(
                adb.device().screenshot().await,
                Err(AdbError::Image(_))
            ));
        }
    }
}

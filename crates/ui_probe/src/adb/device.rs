//! Device control utilities for Android automation

use crate::config::{key_code, LAUNCHER_CATEGORY, TIMING_CONFIG};
use crate::error::{AdbError, Result};
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Handle on one adb-reachable device
///
/// Every operation shells out to the `adb` binary. Availability of the binary
/// is checked on first use and remembered for the lifetime of the handle.
#[derive(Debug)]
pub struct AdbDevice {
    adb_path: String,
    device_id: Option<String>,
    available: OnceCell<bool>,
}

impl AdbDevice {
    /// Create a handle using `adb` from PATH and the default device
    pub fn new() -> Self {
        Self::with_path("adb")
    }

    /// Create a handle with a custom adb binary
    pub fn with_path(adb_path: impl Into<String>) -> Self {
        Self {
            adb_path: adb_path.into(),
            device_id: None,
            available: OnceCell::new(),
        }
    }

    /// Target a specific device serial (`adb -s <id>`)
    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn adb_path(&self) -> &str {
        &self.adb_path
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    /// Build an adb command with the device specifier applied
    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.adb_path);
        if let Some(id) = &self.device_id {
            cmd.arg("-s").arg(id);
        }
        cmd.kill_on_drop(true);
        cmd
    }

    /// Check that the adb binary runs, only once per handle
    pub async fn ensure_adb_available(&self) -> Result<()> {
        let available = *self
            .available
            .get_or_init(|| async {
                let version = tokio::time::timeout(
                    Duration::from_secs_f64(TIMING_CONFIG.command.command_timeout),
                    Command::new(&self.adb_path).arg("version").output(),
                )
                .await;
                match version {
                    Ok(Ok(output)) => output.status.success(),
                    _ => false,
                }
            })
            .await;

        if available {
            Ok(())
        } else {
            Err(AdbError::AdbNotAvailable)
        }
    }

    /// Run `adb [-s id] <args>` and return its trimmed stdout
    pub async fn run(&self, args: &[&str]) -> Result<String> {
        self.run_with_timeout(args, TIMING_CONFIG.command.command_timeout)
            .await
    }

    pub(crate) async fn run_with_timeout(&self, args: &[&str], timeout: f64) -> Result<String> {
        self.ensure_adb_available().await?;

        let mut cmd = self.command();
        cmd.args(args);
        debug!("Running adb {:?} (device_id: {:?})", args, self.device_id);

        let output = tokio::time::timeout(Duration::from_secs_f64(timeout), cmd.output())
            .await
            .map_err(|_| {
                AdbError::Timeout(format!("adb {} timed out after {}s", args.join(" "), timeout))
            })?
            .map_err(AdbError::Io)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            return Err(AdbError::CommandFailed(reason.to_string()));
        }

        Ok(stdout.trim().to_string())
    }

    /// Tap at the specified coordinates
    pub async fn tap(&self, x: i32, y: i32) -> Result<()> {
        let (x, y) = (x.to_string(), y.to_string());
        self.run(&["shell", "input", "tap", x.as_str(), y.as_str()]).await?;
        settle(TIMING_CONFIG.input.tap_delay).await;
        Ok(())
    }

    /// Press a key by name (`back`, `home`, `recent`, `enter` or any
    /// `KEYCODE_` suffix)
    pub async fn press(&self, key: &str) -> Result<()> {
        let code = key_code(key);
        self.run(&["shell", "input", "keyevent", code.as_str()]).await?;
        settle(TIMING_CONFIG.input.key_delay).await;
        Ok(())
    }

    /// Run a shell command on the device and return its output
    pub async fn shell(&self, command: &str) -> Result<String> {
        self.run(&["shell", command]).await
    }

    /// List third-party packages installed on the device
    pub async fn app_list(&self) -> Result<Vec<String>> {
        let output = self.run(&["shell", "pm", "list", "packages", "-3"]).await?;
        Ok(parse_package_list(&output))
    }

    /// Launch an app through its launcher activity, falling back to
    /// `am start -n` when monkey fails
    pub async fn app_start(&self, package: &str) -> Result<()> {
        let launched = self
            .run(&[
                "shell",
                "monkey",
                "-p",
                package,
                "-c",
                LAUNCHER_CATEGORY,
                "1",
            ])
            .await;

        if let Err(e) = launched {
            warn!("monkey launch of {} failed ({}), trying am start", package, e);
            self.run(&["shell", "am", "start", "-n", package]).await?;
        }

        settle(TIMING_CONFIG.input.launch_delay).await;
        Ok(())
    }
}

impl Default for AdbDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// Sleep for an optional post-action delay in seconds
pub(crate) async fn settle(delay: f64) {
    if delay > 0.0 {
        tokio::time::sleep(Duration::from_secs_f64(delay)).await;
    }
}

/// Extract package names from `pm list packages` output
pub fn parse_package_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("package:"))
        .map(|package| package.trim().to_string())
        .collect()
}

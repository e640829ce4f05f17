//! Scripted stand-in for the adb binary, for exercising `AdbDevice` without a device

use super::device::AdbDevice;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// A shell script that logs each invocation's arguments, answers `version`
/// and then applies caller-supplied `case` arms matched against `"$*"`.
/// Anything unmatched exits 0 with no output.
pub(crate) struct FakeAdb {
    dir: TempDir,
    script: PathBuf,
    log: PathBuf,
}

impl FakeAdb {
    pub(crate) fn new(cases: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("adb");
        let log = dir.path().join("calls.log");

        let body = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$*\" >> '{log}'\n\
             case \"$*\" in\n\
             version) echo 'Android Debug Bridge version 1.0.41'; exit 0 ;;\n\
             {cases}\n\
             esac\n\
             exit 0\n",
            log = log.display(),
            cases = cases,
        );
        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir, script, log }
    }

    pub(crate) fn device(&self) -> AdbDevice {
        AdbDevice::with_path(self.script.to_string_lossy())
    }

    /// Write a file next to the script; arms reach it as `"$(dirname "$0")/<name>"`
    pub(crate) fn fixture(&self, name: &str, contents: &[u8]) {
        fs::write(self.dir.path().join(name), contents).unwrap();
    }

    /// Argument lines of every invocation so far, `version` included
    pub(crate) fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

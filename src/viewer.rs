//! Opening the rendered chart in the platform image viewer

use std::env;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Whether a graphical session is available to show the chart in
///
/// On Linux and the BSDs this requires `DISPLAY` or `WAYLAND_DISPLAY`; macOS and
/// Windows always have one.
pub fn display_available() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }

    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|name| env::var_os(name).is_some_and(|value| !value.is_empty()))
}

fn opener_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

/// Opens `path` in the default viewer without waiting for it to close
///
/// Returns whether a viewer was launched. Failing to launch one never aborts the
/// run; it is only logged.
pub fn show_chart(path: &Path) -> bool {
    if !display_available() {
        debug!("No display available, not opening the chart");
        return false;
    }

    match opener_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(_) => {
            debug!(path = %path.display(), "Opened chart in the default viewer");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not open the chart viewer");
            false
        }
    }
}

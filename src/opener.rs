//! Cross-platform launching of resource links in an external viewer

use crate::error::{AppError, Result};
use std::env::consts::OS;
use std::process::{Command, Stdio};
use tracing::debug;

/// Something that can open a stored URL
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens links with the platform's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    /// Opener command for `os`; the URL is always passed as a single argument
    fn command_for(os: &str, url: &str) -> Command {
        match os {
            "macos" => {
                let mut cmd = Command::new("open");
                cmd.arg(url);
                cmd
            }
            // rundll32 takes the URL verbatim, no shell parsing of `&` or `^`
            "windows" => {
                let mut cmd = Command::new("rundll32");
                cmd.args(["url.dll,FileProtocolHandler", url]);
                cmd
            }
            _ => {
                let mut cmd = Command::new("xdg-open");
                cmd.arg(url);
                cmd
            }
        }
    }
}

/// Start `cmd` detached; only a failure to spawn is reported
fn launch(mut cmd: Command, url: &str) -> Result<()> {
    let child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| AppError::ExternalOpen(format!("{}: {}", url, e)))?;
    debug!(pid = child.id(), url, "spawned link opener");
    Ok(())
}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(AppError::ExternalOpen("resource has no URL".to_string()));
        }
        launch(Self::command_for(OS, url), url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::time::{Duration, Instant};

    fn args(cmd: &Command) -> Vec<&OsStr> {
        cmd.get_args().collect()
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = SystemOpener.open("  ").unwrap_err();
        assert_eq!(err.code(), "external_open");
    }

    #[test]
    fn test_windows_url_is_one_argument() {
        let url = "https://example.com/search?a=1&b=2^3";
        let cmd = SystemOpener::command_for("windows", url);

        assert_eq!(cmd.get_program(), "rundll32");
        assert_eq!(args(&cmd), [OsStr::new("url.dll,FileProtocolHandler"), OsStr::new(url)]);
    }

    #[test]
    fn test_unix_commands() {
        let url = "https://docs.rs/?q=a&b";
        let mac = SystemOpener::command_for("macos", url);
        assert_eq!(mac.get_program(), "open");
        assert_eq!(args(&mac), [OsStr::new(url)]);

        let linux = SystemOpener::command_for("linux", url);
        assert_eq!(linux.get_program(), "xdg-open");
        assert_eq!(args(&linux), [OsStr::new(url)]);
    }

    #[test]
    fn test_missing_program_is_external_open_error() {
        let cmd = Command::new("pomodesk-no-such-opener");
        let err = launch(cmd, "https://x").unwrap_err();
        assert_eq!(err.code(), "external_open");
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_does_not_wait_for_viewer() {
        let mut cmd = Command::new("sleep");
        cmd.arg("5");

        let started = Instant::now();
        launch(cmd, "https://x").unwrap();
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}

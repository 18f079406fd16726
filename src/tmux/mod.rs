// ABOUTME: Tmux scripting for interactive Claude Code sessions
//
// All tmux access goes through the `Multiplexer` trait so the session
// controller can be driven by a fake in tests. `TmuxClient` is the real
// implementation and always talks to a dedicated server socket (`tmux -S`).

pub mod capture;
pub mod session;

#[cfg(test)]
pub(crate) mod fake;

pub use capture::{wait_for_text, CaptureOptions, WaitOptions};
pub use session::TmuxSession;

use crate::error::LaunchError;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// A single `send-keys` step
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keystroke {
    /// Named key such as `Enter` or `C-c`, or a single character
    Key(String),
    /// Text typed verbatim (`send-keys -l`)
    Literal(String),
}

impl Keystroke {
    pub fn enter() -> Self {
        Self::Key("Enter".to_string())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }
}

/// Operations ccrun needs from a terminal multiplexer
#[allow(async_fn_in_trait)]
pub trait Multiplexer {
    /// Kill a session by name
    async fn kill_session(&self, session: &str) -> Result<(), LaunchError>;

    /// Create a detached session with a named first window
    async fn new_session(&self, session: &str, window: &str) -> Result<(), LaunchError>;

    /// Send one keystroke step to a pane
    async fn send_keys(&self, target: &str, keys: &Keystroke) -> Result<(), LaunchError>;

    /// Read the rendered contents of a pane
    async fn capture_pane(&self, target: &str, options: &CaptureOptions) -> Result<String, LaunchError>;

    /// Type `text` literally, then press Enter
    async fn send_line(&self, target: &str, text: &str) -> Result<(), LaunchError> {
        self.send_keys(target, &Keystroke::literal(text)).await?;
        self.send_keys(target, &Keystroke::enter()).await
    }
}

/// Tmux CLI bound to one server socket
#[derive(Debug, Clone)]
pub struct TmuxClient {
    tmux_bin: PathBuf,
    socket_path: PathBuf,
}

impl TmuxClient {
    pub fn new(tmux_bin: impl Into<PathBuf>, socket_path: impl Into<PathBuf>) -> Self {
        Self {
            tmux_bin: tmux_bin.into(),
            socket_path: socket_path.into(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.tmux_bin);
        cmd.arg("-S").arg(&self.socket_path);
        cmd
    }

    /// Run a tmux subcommand, failing on a non-zero exit
    async fn run(&self, args: &[&str]) -> Result<Output, LaunchError> {
        let action = args.first().copied().unwrap_or("command");
        debug!("tmux -S {} {:?}", self.socket_path.display(), args);

        let output = self.command().args(args).output().await?;
        if !output.status.success() {
            return Err(LaunchError::Tmux {
                action: action.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

impl Multiplexer for TmuxClient {
    async fn kill_session(&self, session: &str) -> Result<(), LaunchError> {
        self.run(&["kill-session", "-t", session]).await.map(|_| ())
    }

    async fn new_session(&self, session: &str, window: &str) -> Result<(), LaunchError> {
        self.run(&["new-session", "-d", "-s", session, "-n", window])
            .await
            .map(|_| ())
    }

    async fn send_keys(&self, target: &str, keys: &Keystroke) -> Result<(), LaunchError> {
        let sent = match keys {
            Keystroke::Key(key) => self.run(&["send-keys", "-t", target, key.as_str()]).await,
            Keystroke::Literal(text) => {
                self.run(&["send-keys", "-t", target, "-l", "--", text.as_str()]).await
            }
        };
        sent.map(|_| ())
    }

    async fn capture_pane(&self, target: &str, options: &CaptureOptions) -> Result<String, LaunchError> {
        let flags = options.flags();
        let mut args = vec!["capture-pane", "-p", "-t", target];
        args.extend(flags.iter().map(String::as_str));

        let output = self.run(&args).await?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

// ABOUTME: Handle for the named tmux session that hosts Claude Code
//
// A session is addressed by (socket path, session name). Keystrokes always go
// to window 0, pane 0 of that session.

use super::capture::CaptureOptions;
use super::Multiplexer;
use crate::claude::command::shell_quote;
use crate::error::LaunchError;
use std::path::PathBuf;
use tracing::{debug, info};

/// Named tmux session on a dedicated socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxSession {
    socket_path: PathBuf,
    name: String,
    target: String,
}

impl TmuxSession {
    /// Create a handle; the name is sanitized so the pane target stays valid
    pub fn new(socket_path: impl Into<PathBuf>, name: &str) -> Self {
        let name = Self::sanitize_name(name);
        let target = format!("{name}:0.0");
        Self {
            socket_path: socket_path.into(),
            name,
            target,
        }
    }

    /// Replace characters tmux treats as target separators
    fn sanitize_name(name: &str) -> String {
        let cleaned = name.replace([' ', '.', ':'], "_");
        if cleaned.is_empty() {
            "cc".to_string()
        } else {
            cleaned
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pane target for send-keys and capture-pane
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Command a human can paste to attach to this session
    pub fn attach_command(&self) -> String {
        format!(
            "tmux -S {} attach -t {}",
            shell_quote(&self.socket_path.to_string_lossy()),
            shell_quote(&self.name)
        )
    }

    /// Kill any previous session with this name; absence is fine
    pub async fn reset<M: Multiplexer>(&self, mux: &M) {
        match mux.kill_session(&self.name).await {
            Ok(()) => info!("Killed previous tmux session: {}", self.name),
            Err(e) => debug!("No previous tmux session {} to kill: {}", self.name, e),
        }
    }

    /// Create the detached session
    pub async fn create<M: Multiplexer>(&self, mux: &M, window: &str) -> Result<(), LaunchError> {
        mux.new_session(&self.name, window).await?;
        info!("Started tmux session: {}", self.name);
        Ok(())
    }

    /// Type a line into the pane and press Enter
    pub async fn send_line<M: Multiplexer>(&self, mux: &M, text: &str) -> Result<(), LaunchError> {
        mux.send_line(&self.target, text).await
    }

    /// Capture the pane with the given options
    pub async fn capture<M: Multiplexer>(&self, mux: &M, options: &CaptureOptions) -> Result<String, LaunchError> {
        mux.capture_pane(&self.target, options).await
    }
}

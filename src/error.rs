// ABOUTME: Error taxonomy for ccrun launches
//
// Preflight failures (missing binaries, bad config) map to exit code 2.
// Failures of mandatory tmux steps and I/O map to exit code 1.

use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for preflight failures
pub const EXIT_PREFLIGHT: u8 = 2;

/// Exit code for hard failures during a run
pub const EXIT_FAILURE: u8 = 1;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("claude binary not found: {}", .0.display())]
    ClaudeBinaryNotFound(PathBuf),

    #[error("tmux not found in PATH; cannot run interactive mode.")]
    TmuxNotFound,

    #[error("tmux {action} failed: {stderr}")]
    Tmux { action: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0:#}")]
    Config(#[from] anyhow::Error),
}

impl LaunchError {
    /// Process exit code for this failure
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ClaudeBinaryNotFound(_) | Self::TmuxNotFound | Self::Config(_) => EXIT_PREFLIGHT,
            Self::Tmux { .. } | Self::Io(_) => EXIT_FAILURE,
        }
    }

    /// Extra line printed after the error message, if any
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ClaudeBinaryNotFound(_) => Some("Tip: set CLAUDE_CODE_BIN=/path/to/claude"),
            Self::TmuxNotFound => Some("Tip: install tmux or use --mode headless"),
            _ => None,
        }
    }

    /// Write the user-facing diagnostic: the message, then the hint if any
    ///
    /// Preflight messages are printed as-is; other failures get an `error: ` prefix.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.exit_code() == EXIT_PREFLIGHT {
            writeln!(out, "{self}")?;
        } else {
            writeln!(out, "error: {self}")?;
        }
        if let Some(hint) = self.hint() {
            writeln!(out, "{hint}")?;
        }
        Ok(())
    }
}

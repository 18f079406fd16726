// ABOUTME: Optional TOML config file for ccrun
//
// Every field is optional; anything missing falls back to the built-in
// defaults. Command-line flags and environment variables still win over
// values from the file.

use crate::tmux::capture::{WaitOptions, DEFAULT_CAPTURE_LINES};
use crate::tmux::Keystroke;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the claude binary
    pub claude_bin: Option<PathBuf>,

    /// Tmux session settings
    pub tmux: TmuxFileConfig,

    /// Typing and settle delays
    pub timing: TimingFileConfig,

    /// Folder trust confirmation handling
    pub trust_prompt: TrustPromptConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TmuxFileConfig {
    #[serde(default)]
    pub session: Option<String>,

    #[serde(default)]
    pub socket_dir: Option<PathBuf>,

    #[serde(default)]
    pub socket_name: Option<String>,

    /// Name of the first window (default: "shell")
    #[serde(default = "default_window_name")]
    pub window_name: String,

    /// Scrollback lines included in captures (default: 200)
    #[serde(default = "default_capture_lines")]
    pub capture_lines: u32,
}

impl Default for TmuxFileConfig {
    fn default() -> Self {
        Self {
            session: None,
            socket_dir: None,
            socket_name: None,
            window_name: default_window_name(),
            capture_lines: default_capture_lines(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimingFileConfig {
    /// Delay after each prompt line in milliseconds
    #[serde(default)]
    pub send_delay_ms: Option<u64>,

    /// Pause after the agent teams export in milliseconds (default: 300)
    #[serde(default = "default_env_settle_ms")]
    pub env_settle_ms: u64,
}

impl Default for TimingFileConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: None,
            env_settle_ms: default_env_settle_ms(),
        }
    }
}

/// How to detect and dismiss Claude Code's "trust this folder" dialog
///
/// After the marker shows up, `confirm` is sent. If the marker is still on
/// screen after `settle_ms`, the dialog wants an explicit menu choice and
/// `fallback` is sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrustPromptConfig {
    pub enabled: bool,
    pub marker: String,
    pub timeout_s: u64,
    pub recheck_timeout_s: u64,
    pub poll_ms: u64,
    pub settle_ms: u64,
    pub confirm: Vec<Keystroke>,
    pub fallback: Vec<Keystroke>,
}

impl Default for TrustPromptConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            marker: "Yes, I trust this folder".to_string(),
            timeout_s: 20,
            recheck_timeout_s: 2,
            poll_ms: 500,
            settle_ms: 800,
            confirm: vec![Keystroke::enter()],
            fallback: vec![Keystroke::Key("1".to_string()), Keystroke::enter()],
        }
    }
}

impl TrustPromptConfig {
    /// Wait used to spot the dialog after launch
    pub const fn initial_wait(&self) -> WaitOptions {
        WaitOptions::new(
            Duration::from_secs(self.timeout_s),
            Duration::from_millis(self.poll_ms),
        )
    }

    /// Wait used to check whether the dialog survived `confirm`
    pub const fn recheck_wait(&self) -> WaitOptions {
        WaitOptions::new(
            Duration::from_secs(self.recheck_timeout_s),
            Duration::from_millis(self.poll_ms),
        )
    }

    pub const fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

fn default_window_name() -> String {
    "shell".to_string()
}

const fn default_capture_lines() -> u32 {
    DEFAULT_CAPTURE_LINES
}

const fn default_env_settle_ms() -> u64 {
    300
}

impl FileConfig {
    /// Load the config file
    ///
    /// An explicit path must exist. Without one, the user config file is read
    /// if present and built-in defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read and parse one config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// `<config dir>/ccrun/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ccrun").join("config.toml"))
    }
}

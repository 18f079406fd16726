// ABOUTME: Resolved invocation configuration for ccrun
//
// Combines command-line flags, environment variables, the optional TOML file
// and built-in defaults into one immutable `RunConfig`. Precedence is
// flag > environment > file > default.

pub mod file;

pub use file::{FileConfig, TrustPromptConfig};

use crate::claude::ClaudeOptions;
use crate::cli::Cli;
use crate::mode::LaunchMode;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Default tmux session name
pub const DEFAULT_SESSION: &str = "cc";

/// Default tmux socket filename
pub const DEFAULT_SOCKET_NAME: &str = "claude-code.sock";

/// Default delay between prompt lines in milliseconds
pub const DEFAULT_SEND_DELAY_MS: u64 = 800;

/// Directory created under `$TMPDIR` for tmux sockets
const SOCKET_DIR_NAME: &str = "clawdbot-tmux-sockets";

/// Environment variables ccrun reads, captured once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// `CLAUDE_CODE_BIN`
    pub claude_bin: Option<PathBuf>,
    /// `CLAWDBOT_TMUX_SOCKET_DIR`
    pub tmux_socket_dir: Option<PathBuf>,
    /// `TMPDIR`
    pub tmpdir: Option<PathBuf>,
    /// Home directory, for the default claude install path
    pub home: Option<PathBuf>,
}

impl EnvOverrides {
    /// Read overrides from the process environment
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var_os(key), dirs::home_dir())
    }

    /// Read overrides through `lookup`; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>, home: Option<PathBuf>) -> Self {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            claude_bin: path("CLAUDE_CODE_BIN"),
            tmux_socket_dir: path("CLAWDBOT_TMUX_SOCKET_DIR"),
            tmpdir: path("TMPDIR"),
            home,
        }
    }

    /// Where claude lives when nothing else says so: `~/.local/bin/claude`
    pub fn default_claude_bin(&self) -> PathBuf {
        self.home.as_ref().map_or_else(
            || PathBuf::from("claude"),
            |home| home.join(".local").join("bin").join("claude"),
        )
    }

    /// `$TMPDIR/clawdbot-tmux-sockets`, with `/tmp` when TMPDIR is unset
    pub fn default_socket_dir(&self) -> PathBuf {
        self.tmpdir
            .clone()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(SOCKET_DIR_NAME)
    }
}

/// Tmux session placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxSettings {
    pub session: String,
    pub socket_dir: PathBuf,
    pub socket_name: String,
    pub window_name: String,
    pub capture_lines: u32,
}

impl TmuxSettings {
    pub fn socket_path(&self) -> PathBuf {
        self.socket_dir.join(&self.socket_name)
    }
}

/// Delays used while driving an interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause after each prompt line
    pub send_delay: Duration,
    /// Pause after the agent teams export so the shell can catch up
    pub env_settle: Duration,
    /// How long to wait before the final snapshot (zero skips it)
    pub interactive_wait: Duration,
}

/// Everything a single run needs, resolved up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub prompt: Option<String>,
    pub mode: LaunchMode,
    pub claude_bin: PathBuf,
    pub claude: ClaudeOptions,
    pub agent_teams: bool,
    pub cwd: Option<PathBuf>,
    pub tmux: TmuxSettings,
    pub timing: Timing,
    pub trust_prompt: TrustPromptConfig,
}

impl RunConfig {
    /// Resolve flags, environment and file values into one config
    pub fn resolve(cli: Cli, file: FileConfig, env: &EnvOverrides) -> Self {
        let claude_bin = cli
            .claude_bin
            .or_else(|| env.claude_bin.clone())
            .or(file.claude_bin)
            .unwrap_or_else(|| env.default_claude_bin());

        let tmux = TmuxSettings {
            session: cli
                .tmux_session
                .or(file.tmux.session)
                .unwrap_or_else(|| DEFAULT_SESSION.to_string()),
            socket_dir: cli
                .tmux_socket_dir
                .or_else(|| env.tmux_socket_dir.clone())
                .or(file.tmux.socket_dir)
                .unwrap_or_else(|| env.default_socket_dir()),
            socket_name: cli
                .tmux_socket_name
                .or(file.tmux.socket_name)
                .unwrap_or_else(|| DEFAULT_SOCKET_NAME.to_string()),
            window_name: file.tmux.window_name,
            capture_lines: file.tmux.capture_lines,
        };

        let timing = Timing {
            send_delay: Duration::from_millis(
                cli.interactive_send_delay_ms
                    .or(file.timing.send_delay_ms)
                    .unwrap_or(DEFAULT_SEND_DELAY_MS),
            ),
            env_settle: Duration::from_millis(file.timing.env_settle_ms),
            interactive_wait: Duration::from_secs(cli.interactive_wait_s),
        };

        let claude = ClaudeOptions {
            permission_mode: cli.permission_mode,
            allowed_tools: cli.allowed_tools,
            output_format: cli.output_format,
            json_schema: cli.json_schema,
            append_system_prompt: cli.append_system_prompt,
            system_prompt: cli.system_prompt,
            continue_latest: cli.continue_latest,
            resume: cli.resume,
            teammate_mode: cli.teammate_mode,
            extra: cli.extra,
        };

        Self {
            prompt: cli.prompt,
            mode: cli.mode,
            claude_bin,
            claude,
            agent_teams: cli.agent_teams,
            cwd: cli.cwd,
            tmux,
            timing,
            trust_prompt: file.trust_prompt,
        }
    }

    /// Mode after applying the slash-command heuristic
    pub fn effective_mode(&self) -> LaunchMode {
        self.mode.resolve(self.prompt.as_deref())
    }
}

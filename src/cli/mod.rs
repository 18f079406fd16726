// ABOUTME: CLI argument parsing for ccrun
//
// Flags mirror the Claude CLI where they are forwarded (--permission-mode,
// --allowedTools, ...) and add the tmux and timing knobs for interactive runs.
// Anything after `--` is passed to claude untouched.

pub mod run;

use crate::claude::{OutputFormat, TeammateMode};
use crate::mode::LaunchMode;
use clap::Parser;
use std::path::PathBuf;

/// Run Claude Code reliably (headless or interactive via tmux)
#[derive(Parser, Debug)]
#[command(name = "ccrun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prompt text
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Launch mode; auto goes interactive when the prompt has /slash lines
    #[arg(long, value_enum, default_value_t = LaunchMode::Auto)]
    pub mode: LaunchMode,

    /// Forwarded as --permission-mode
    #[arg(long)]
    pub permission_mode: Option<String>,

    /// Forwarded as --allowedTools
    #[arg(long = "allowedTools")]
    pub allowed_tools: Option<String>,

    /// Forwarded as --output-format (headless only)
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Forwarded as --json-schema (headless only)
    #[arg(long)]
    pub json_schema: Option<String>,

    /// Forwarded as --append-system-prompt
    #[arg(long)]
    pub append_system_prompt: Option<String>,

    /// Forwarded as --system-prompt
    #[arg(long)]
    pub system_prompt: Option<String>,

    /// Continue the most recent conversation
    #[arg(long = "continue")]
    pub continue_latest: bool,

    /// Resume a conversation by session ID
    #[arg(long)]
    pub resume: Option<String>,

    /// Enable experimental agent teams (CLAUDE_CODE_EXPERIMENTAL_AGENT_TEAMS=1)
    #[arg(long)]
    pub agent_teams: bool,

    /// Forwarded as --teammate-mode
    #[arg(long, value_enum)]
    pub teammate_mode: Option<TeammateMode>,

    /// Path to the claude binary [env: CLAUDE_CODE_BIN] [default: ~/.local/bin/claude]
    #[arg(long)]
    pub claude_bin: Option<PathBuf>,

    /// Working directory for claude
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Tmux session name [default: cc]
    #[arg(long)]
    pub tmux_session: Option<String>,

    /// Tmux socket directory [env: CLAWDBOT_TMUX_SOCKET_DIR] [default: $TMPDIR/clawdbot-tmux-sockets]
    #[arg(long)]
    pub tmux_socket_dir: Option<PathBuf>,

    /// Tmux socket filename [default: claude-code.sock]
    #[arg(long)]
    pub tmux_socket_name: Option<String>,

    /// Seconds to wait before printing a final tmux snapshot (0 = no snapshot)
    #[arg(long, default_value_t = 0)]
    pub interactive_wait_s: u64,

    /// Delay between prompt lines typed into tmux [default: 800]
    #[arg(long)]
    pub interactive_send_delay_ms: Option<u64>,

    /// TOML config file [default: <config dir>/ccrun/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write JSON-lines logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Extra arguments passed verbatim to claude
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

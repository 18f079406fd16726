// ABOUTME: Headless (one-shot) Claude Code runs under a pseudo-terminal
//
// Claude Code can hang when stdout is not a TTY, so the `-p` invocation is
// wrapped in script(1) when available. Without script the command runs
// directly. Stdio is inherited and the child's exit code is returned as-is.

use crate::claude::{ClaudeCommand, AGENT_TEAMS_ENV};
use crate::config::RunConfig;
use crate::error::LaunchError;
use crate::locator;
use std::path::Path;
use std::process::ExitStatus;
use tokio::process::Command;
use tracing::{info, warn};

/// Run claude once with the configured prompt and return its exit code
pub async fn run_headless(config: &RunConfig) -> Result<i32, LaunchError> {
    let script = locator::locate("script");
    run_headless_with(config, script.as_deref()).await
}

/// Same as `run_headless` with an explicit pty helper (None runs directly)
pub async fn run_headless_with(config: &RunConfig, script: Option<&Path>) -> Result<i32, LaunchError> {
    let argv = ClaudeCommand::new(&config.claude_bin, &config.claude).headless(config.prompt.as_deref());

    if script.is_none() {
        warn!("script(1) not found; running claude without a pseudo-terminal");
    }

    let mut cmd = pty_command(&argv, script);
    if let Some(cwd) = &config.cwd {
        cmd.current_dir(cwd);
    }
    if config.agent_teams {
        cmd.env(AGENT_TEAMS_ENV, "1");
    }

    info!("Running claude headless: {:?}", argv);
    let status = cmd.status().await?;
    let code = exit_code(status);
    info!("claude exited with {}", code);

    Ok(code)
}

/// Wrap `argv` so the child sees a terminal
///
/// util-linux script runs its `-c` argument through a shell, so the argv is
/// quoted into one string, and only reports the child's exit status with
/// `-e`. BSD script takes the argv directly and always reports it.
pub fn pty_command(argv: &[String], script: Option<&Path>) -> Command {
    let Some(script) = script else {
        let mut cmd = Command::new(&argv[0]);
        cmd.args(&argv[1..]);
        return cmd;
    };

    let mut cmd = Command::new(script);
    #[cfg(any(target_os = "macos", target_os = "freebsd", target_os = "openbsd", target_os = "netbsd"))]
    {
        cmd.args(["-q", "/dev/null"]).args(argv);
    }
    #[cfg(not(any(target_os = "macos", target_os = "freebsd", target_os = "openbsd", target_os = "netbsd")))]
    {
        cmd.args(["-q", "-e", "-c"])
            .arg(crate::claude::command::shell_join(argv))
            .arg("/dev/null");
    }
    cmd
}

/// Exit code of a finished child; signals map to 128 + signal number
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

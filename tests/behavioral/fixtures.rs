// ABOUTME: Shared test fixtures and utilities for behavioral tests
//
// Provides:
// - FakeClaude: shell script standing in for the claude binary
// - TmuxSocket: private tmux server socket, killed on drop
// - tmux_available(): Check if tmux is installed
// - require_tmux!(): Skip test if tmux unavailable
// - require_script!(): Locate script(1) or skip the test

use anyhow::Result;
use ccrun::cli::Cli;
use ccrun::config::{EnvOverrides, FileConfig, RunConfig};
use clap::Parser;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Executable script in a temp directory that acts as `claude`
pub struct FakeClaude {
    pub dir: TempDir,
    pub bin: PathBuf,
}

impl FakeClaude {
    /// Create the script with the given body (a `#!/bin/sh` line is added)
    pub fn new(body: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        let bin = dir.path().join("claude");

        fs::write(&bin, format!("#!/bin/sh\n{body}\n"))?;
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755))?;

        Ok(Self { dir, bin })
    }

    /// Script that records its argv, cwd and agent teams variable, then exits with `code`
    pub fn recording(code: i32) -> Result<Self> {
        Self::new(&format!(
            r#"out="$(dirname "$0")/invocation.txt"
printf '%s\n' "$@" > "$out"
printf 'cwd=%s\n' "$(pwd)" >> "$out"
printf 'teams=%s\n' "$CLAUDE_CODE_EXPERIMENTAL_AGENT_TEAMS" >> "$out"
exit {code}"#
        ))
    }

    /// Lines written by a `recording` script
    pub fn invocation(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(self.dir.path().join("invocation.txt"))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    pub fn path(&self) -> &Path {
        &self.bin
    }
}

/// Dedicated tmux server socket for one test
pub struct TmuxSocket {
    pub dir: TempDir,
}

impl TmuxSocket {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::Builder::new().prefix("ccrun").tempdir_in("/tmp")?,
        })
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("test.sock")
    }
}

impl Drop for TmuxSocket {
    fn drop(&mut self) {
        let _ = Command::new("tmux")
            .arg("-S")
            .arg(self.path())
            .arg("kill-server")
            .output();
    }
}

/// Parse ccrun flags into a config without reading the process environment
pub fn run_config(args: &[&str]) -> RunConfig {
    let cli = Cli::try_parse_from(std::iter::once("ccrun").chain(args.iter().copied()))
        .expect("test arguments should parse");
    RunConfig::resolve(cli, FileConfig::default(), &EnvOverrides::default())
}

/// Generate a unique tmux session name for a test
pub fn unique_session_name(prefix: &str) -> String {
    format!("{}-{}", prefix, &uuid::Uuid::new_v4().to_string()[..8])
}

/// Check if tmux is available on the system
pub fn tmux_available() -> bool {
    Command::new("tmux")
        .args(["-V"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Macro to skip test if tmux is not available
#[macro_export]
macro_rules! require_tmux {
    () => {
        if !super::fixtures::tmux_available() {
            eprintln!("Skipping test: tmux not available");
            return Ok(());
        }
    };
}

/// Located script(1), if installed
pub fn script_path() -> Option<PathBuf> {
    ccrun::locator::locate("script")
}

/// Macro to skip test if script(1) is not available
#[macro_export]
macro_rules! require_script {
    () => {
        match super::fixtures::script_path() {
            Some(path) => path,
            None => {
                eprintln!("Skipping test: script not available");
                return Ok(());
            }
        }
    };
}

/// Check if a tmux session exists on a socket
pub fn tmux_session_exists(socket: &Path, name: &str) -> bool {
    Command::new("tmux")
        .arg("-S")
        .arg(socket)
        .args(["has-session", "-t", name])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_claude_is_executable() -> Result<()> {
        let fake = FakeClaude::new("exit 0")?;
        let mode = fs::metadata(fake.path())?.permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
        Ok(())
    }
}

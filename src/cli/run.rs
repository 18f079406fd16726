// ABOUTME: Top-level run logic - preflight, mode selection, dispatch
//
// Loads config, checks that the claude binary exists, resolves `auto` mode
// and hands off to the headless launcher or the tmux session controller.

use tracing::info;

use super::Cli;
use crate::config::{EnvOverrides, FileConfig, RunConfig};
use crate::error::LaunchError;
use crate::headless::run_headless;
use crate::interactive::run_interactive;
use crate::mode::LaunchMode;

/// Execute a parsed command line and return the exit code
pub async fn execute(cli: Cli) -> Result<i32, LaunchError> {
    let file = FileConfig::load(cli.config.as_deref())?;
    let config = RunConfig::resolve(cli, file, &EnvOverrides::from_process());
    dispatch(&config).await
}

/// Run a resolved config
pub async fn dispatch(config: &RunConfig) -> Result<i32, LaunchError> {
    check_claude_bin(config)?;

    let mode = config.effective_mode();
    info!("Launch mode: {} (requested: {})", mode, config.mode);

    match mode {
        LaunchMode::Interactive => run_interactive(config).await,
        LaunchMode::Headless | LaunchMode::Auto => run_headless(config).await,
    }
}

/// The claude binary must exist before anything is started
pub fn check_claude_bin(config: &RunConfig) -> Result<(), LaunchError> {
    if config.claude_bin.exists() {
        Ok(())
    } else {
        Err(LaunchError::ClaudeBinaryNotFound(config.claude_bin.clone()))
    }
}

// ABOUTME: Interactive mode: Claude Code inside a persistent tmux session
//
// The session outlives ccrun on purpose so a human can attach later with the
// printed `tmux -S ... attach` command.

pub mod controller;

pub use controller::{SessionController, TrustOutcome};

use crate::config::RunConfig;
use crate::error::LaunchError;
use crate::locator;
use crate::tmux::{TmuxClient, TmuxSession};
use tracing::warn;

/// Start Claude Code in tmux and return the exit code for ccrun
pub async fn run_interactive(config: &RunConfig) -> Result<i32, LaunchError> {
    let tmux_bin = locator::locate("tmux").ok_or(LaunchError::TmuxNotFound)?;

    tokio::fs::create_dir_all(&config.tmux.socket_dir).await?;
    let socket_path = config.tmux.socket_path();

    let client = TmuxClient::new(tmux_bin, &socket_path);
    let session = TmuxSession::new(&socket_path, &config.tmux.session);
    if session.name() != config.tmux.session {
        warn!(
            "Tmux session name '{}' contains target separators, using '{}'",
            config.tmux.session,
            session.name()
        );
    }

    let mut stdout = std::io::stdout();
    SessionController::new(&client, &session, config)
        .run(&mut stdout)
        .await
}

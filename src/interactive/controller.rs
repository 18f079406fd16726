// ABOUTME: Drives one interactive Claude Code session inside tmux
//
// Sequence: reset any same-named session, create it, optionally export the
// agent teams variable, type the launch command, dismiss the folder trust
// dialog if it shows up, type the prompt line by line, then report how to
// attach. Reset, trust handling and the final snapshot are best-effort; the
// other steps abort the run on failure.

use crate::claude::command::launch_line;
use crate::claude::{agent_teams_export, ClaudeCommand};
use crate::config::RunConfig;
use crate::error::LaunchError;
use crate::tmux::{wait_for_text, CaptureOptions, Keystroke, Multiplexer, TmuxSession};
use std::io::Write;
use std::path::PathBuf;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// What happened with the folder trust dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustOutcome {
    /// Handling turned off in config
    Disabled,
    /// Dialog never appeared before the deadline
    NotShown,
    /// Dismissed by the confirm keystrokes
    Confirmed,
    /// Needed the fallback keystrokes as well
    ConfirmedWithFallback,
}

/// Runs the interactive launch sequence against a multiplexer
pub struct SessionController<'a, M: Multiplexer> {
    mux: &'a M,
    session: &'a TmuxSession,
    config: &'a RunConfig,
    capture: CaptureOptions,
}

impl<'a, M: Multiplexer> SessionController<'a, M> {
    pub const fn new(mux: &'a M, session: &'a TmuxSession, config: &'a RunConfig) -> Self {
        Self {
            mux,
            session,
            config,
            capture: CaptureOptions::scrollback(config.tmux.capture_lines),
        }
    }

    /// Run the whole sequence, writing the attach hint (and snapshot) to `out`
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<i32, LaunchError> {
        self.session.reset(self.mux).await;
        self.session.create(self.mux, &self.config.tmux.window_name).await?;

        if self.config.agent_teams {
            self.export_agent_teams().await?;
        }

        self.launch_claude().await?;
        let trust = self.handle_trust_prompt().await;
        debug!("Trust prompt outcome: {:?}", trust);

        if let Some(prompt) = self.config.prompt.as_deref() {
            self.deliver_prompt(prompt).await?;
        }

        self.report(out).await?;
        Ok(0)
    }

    async fn export_agent_teams(&self) -> Result<(), LaunchError> {
        self.session.send_line(self.mux, &agent_teams_export()).await?;
        sleep(self.config.timing.env_settle).await;
        Ok(())
    }

    /// Type `cd <cwd> && claude ...` into the pane
    pub async fn launch_claude(&self) -> Result<(), LaunchError> {
        let cwd = launch_dir(self.config)?;
        let argv = ClaudeCommand::new(&self.config.claude_bin, &self.config.claude).interactive();
        let line = launch_line(&cwd, &argv);

        info!("Launching claude in {}", self.session.target());
        self.session.send_line(self.mux, &line).await
    }

    /// Wait for the trust dialog and dismiss it
    ///
    /// The dialog sometimes accepts Enter and sometimes wants an explicit menu
    /// choice, so the marker is checked again after `confirm` and `fallback`
    /// is sent if it is still on screen.
    pub async fn handle_trust_prompt(&self) -> TrustOutcome {
        let trust = &self.config.trust_prompt;
        if !trust.enabled {
            return TrustOutcome::Disabled;
        }

        let target = self.session.target();
        if !wait_for_text(self.mux, target, &trust.marker, &self.capture, trust.initial_wait()).await {
            debug!("No trust prompt within {}s", trust.timeout_s);
            return TrustOutcome::NotShown;
        }

        info!("Trust prompt detected, confirming");
        self.send_best_effort(&trust.confirm).await;
        sleep(trust.settle()).await;

        if wait_for_text(self.mux, target, &trust.marker, &self.capture, trust.recheck_wait()).await {
            info!("Trust prompt still shown, sending fallback selection");
            self.send_best_effort(&trust.fallback).await;
            return TrustOutcome::ConfirmedWithFallback;
        }

        TrustOutcome::Confirmed
    }

    async fn send_best_effort(&self, keys: &[Keystroke]) {
        for key in keys {
            if let Err(e) = self.mux.send_keys(self.session.target(), key).await {
                warn!("Ignoring failed keystroke {:?}: {}", key, e);
            }
        }
    }

    /// Type each non-blank line, pausing after each one
    pub async fn deliver_prompt(&self, prompt: &str) -> Result<(), LaunchError> {
        for line in prompt_lines(prompt) {
            debug!("Sending prompt line: {}", line);
            self.session.send_line(self.mux, line).await?;
            sleep(self.config.timing.send_delay).await;
        }
        Ok(())
    }

    async fn report<W: Write>(&self, out: &mut W) -> Result<(), LaunchError> {
        writeln!(out, "Started interactive Claude Code in tmux.")?;
        writeln!(out, "  {}", self.session.attach_command())?;

        let wait = self.config.timing.interactive_wait;
        if wait.is_zero() {
            return Ok(());
        }

        sleep(wait).await;
        match self.session.capture(self.mux, &self.capture).await {
            Ok(content) => {
                write!(out, "\n--- tmux snapshot ---\n\n")?;
                writeln!(out, "{content}")?;
            }
            Err(e) => debug!("Skipping snapshot: {}", e),
        }
        Ok(())
    }
}

/// Lines of `prompt` worth typing, in order
pub fn prompt_lines(prompt: &str) -> impl Iterator<Item = &str> {
    prompt.lines().filter(|line| !line.trim().is_empty())
}

/// Working directory the launch command will `cd` into
pub fn launch_dir(config: &RunConfig) -> std::io::Result<PathBuf> {
    config.cwd.clone().map_or_else(std::env::current_dir, Ok)
}

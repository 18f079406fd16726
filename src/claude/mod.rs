// ABOUTME: Claude Code CLI invocation details
//
// Everything ccrun knows about the target program lives here: its flags and
// the environment variable that switches on agent teams.

pub mod command;

pub use command::{ClaudeCommand, ClaudeOptions, OutputFormat, TeammateMode};

/// Environment variable enabling the experimental agent teams feature
pub const AGENT_TEAMS_ENV: &str = "CLAUDE_CODE_EXPERIMENTAL_AGENT_TEAMS";

/// Shell statement typed into tmux before launching with agent teams
pub fn agent_teams_export() -> String {
    format!("export {AGENT_TEAMS_ENV}=1")
}

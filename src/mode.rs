// ABOUTME: Launch mode selection
//
// `auto` picks interactive mode when the prompt uses slash commands
// (e.g. /speckit.plan), which only work inside Claude Code's own TUI.

use clap::ValueEnum;
use std::fmt;

/// How Claude Code should be launched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LaunchMode {
    /// Decide from the prompt contents
    #[default]
    Auto,
    /// One-shot `-p` run under a pseudo-terminal
    Headless,
    /// Persistent session inside tmux
    Interactive,
}

impl LaunchMode {
    /// Resolve `Auto` into a concrete mode for this prompt
    pub fn resolve(self, prompt: Option<&str>) -> Self {
        match self {
            Self::Auto if looks_like_slash_commands(prompt) => Self::Interactive,
            Self::Auto => Self::Headless,
            explicit => explicit,
        }
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Headless => "headless",
            Self::Interactive => "interactive",
        };
        f.write_str(name)
    }
}

/// True if any line of the prompt, once trimmed, starts with `/`
pub fn looks_like_slash_commands(prompt: Option<&str>) -> bool {
    prompt.is_some_and(|p| p.lines().any(|line| line.trim().starts_with('/')))
}

// ABOUTME: Claude CLI argument assembly for headless and interactive launches
//
// Flag order is fixed so that the same options always produce the same argv:
// permission mode, prompt, allowed tools, output format, JSON schema, system
// prompt append/replace, continue, resume, teammate mode, pass-through args.

use clap::ValueEnum;
use shell_escape::unix::escape;
use std::borrow::Cow;
use std::path::Path;

/// Output format forwarded to `--output-format` (headless only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    StreamJson,
}

impl OutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::StreamJson => "stream-json",
        }
    }
}

/// Teammate mode forwarded to `--teammate-mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TeammateMode {
    Auto,
    InProcess,
    Tmux,
}

impl TeammateMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::InProcess => "in-process",
            Self::Tmux => "tmux",
        }
    }
}

/// Options forwarded verbatim to the Claude CLI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaudeOptions {
    pub permission_mode: Option<String>,
    pub allowed_tools: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub json_schema: Option<String>,
    pub append_system_prompt: Option<String>,
    pub system_prompt: Option<String>,
    pub continue_latest: bool,
    pub resume: Option<String>,
    pub teammate_mode: Option<TeammateMode>,
    /// Appended after every other flag
    pub extra: Vec<String>,
}

/// Builder for a Claude CLI argv
#[derive(Debug, Clone)]
pub struct ClaudeCommand<'a> {
    bin: &'a Path,
    options: &'a ClaudeOptions,
}

impl<'a> ClaudeCommand<'a> {
    pub const fn new(bin: &'a Path, options: &'a ClaudeOptions) -> Self {
        Self { bin, options }
    }

    /// Argv for a one-shot run: `claude ... -p PROMPT ...`
    ///
    /// An empty prompt is still forwarded as `-p ""`; only `None` omits it.
    pub fn headless(&self, prompt: Option<&str>) -> Vec<String> {
        self.build(Some(prompt), true)
    }

    /// Argv for a session typed into tmux: no prompt, no output format
    pub fn interactive(&self) -> Vec<String> {
        self.build(None, false)
    }

    fn build(&self, prompt: Option<Option<&str>>, one_shot: bool) -> Vec<String> {
        let opts = self.options;
        let mut cmd = vec![self.bin.to_string_lossy().into_owned()];

        push_flag(&mut cmd, "--permission-mode", opts.permission_mode.as_deref());
        if let Some(Some(prompt)) = prompt {
            cmd.push("-p".to_string());
            cmd.push(prompt.to_string());
        }
        push_flag(&mut cmd, "--allowedTools", opts.allowed_tools.as_deref());
        if one_shot {
            push_flag(&mut cmd, "--output-format", opts.output_format.map(OutputFormat::as_str));
            push_flag(&mut cmd, "--json-schema", opts.json_schema.as_deref());
        }
        push_flag(&mut cmd, "--append-system-prompt", opts.append_system_prompt.as_deref());
        push_flag(&mut cmd, "--system-prompt", opts.system_prompt.as_deref());
        if opts.continue_latest {
            cmd.push("--continue".to_string());
        }
        push_flag(&mut cmd, "--resume", opts.resume.as_deref());
        push_flag(&mut cmd, "--teammate-mode", opts.teammate_mode.map(TeammateMode::as_str));
        cmd.extend(opts.extra.iter().cloned());

        cmd
    }
}

/// Push `flag value` when the value is present and non-empty
fn push_flag(cmd: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        cmd.push(flag.to_string());
        cmd.push(value.to_string());
    }
}

/// Quote a single word for a POSIX shell
pub fn shell_quote(word: &str) -> String {
    escape(Cow::Borrowed(word)).into_owned()
}

/// Quote every word and join with spaces
pub fn shell_join<S: AsRef<str>>(argv: &[S]) -> String {
    argv.iter()
        .map(|word| shell_quote(word.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shell line that enters `cwd` then runs `argv`
pub fn launch_line<S: AsRef<str>>(cwd: &Path, argv: &[S]) -> String {
    format!("cd {} && {}", shell_quote(&cwd.to_string_lossy()), shell_join(argv))
}

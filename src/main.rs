// ABOUTME: Main entry point for ccrun
//
// Binary: ccrun
// Usage: ccrun [OPTIONS] [-- CLAUDE_ARGS...]
// - headless: claude -p under script(1), exit code forwarded
// - interactive: claude inside a tmux session you can attach to later
// - auto (default): interactive when the prompt has /slash command lines

#![allow(missing_docs)]

use ccrun::cli::{self, Cli};
use ccrun::error::EXIT_FAILURE;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();
    setup_logging(args.log_file.as_deref());

    match cli::run::execute(args).await {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(EXIT_FAILURE)),
        Err(e) => {
            tracing::debug!("ccrun failed: {:?}", e);
            let _ = e.report(&mut std::io::stderr());
            ExitCode::from(e.exit_code())
        }
    }
}

fn setup_logging(log_file: Option<&Path>) {
    use std::fs::OpenOptions;
    use std::sync::Mutex;
    use tracing_subscriber::prelude::*;

    // Optional JSONL log file next to the human-readable stderr output
    let file_layer = log_file.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            ),
            Err(e) => {
                eprintln!("Cannot open log file {}: {}", path.display(), e);
                None
            }
        }
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_env("CCRUN_LOG")
                .unwrap_or_else(|_| "ccrun=warn".into()),
        )
        .init();
}

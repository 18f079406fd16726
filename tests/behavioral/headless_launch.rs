// ABOUTME: Behavioral tests for headless launches
//
// Runs a fake claude script, both directly and under script(1), and checks
// the argv it received, the environment, the working directory and that its
// exit code comes back unchanged.

use super::fixtures::{run_config, FakeClaude};
use crate::require_script;
use anyhow::Result;
use ccrun::cli::run::dispatch;
use ccrun::headless::{run_headless, run_headless_with};
use ccrun::mode::LaunchMode;
use pretty_assertions::assert_eq;

/// Plain prompt in auto mode resolves to headless and forwards the exit code
#[tokio::test]
async fn test_headless_prompt_forwards_exit_code() -> Result<()> {
    let claude = FakeClaude::recording(7)?;
    let bin = claude.path().to_string_lossy().into_owned();
    let config = run_config(&["-p", "what is 2+2", "--claude-bin", &bin]);

    assert_eq!(config.effective_mode(), LaunchMode::Headless);

    let code = run_headless_with(&config, None).await?;
    assert_eq!(code, 7);

    let invocation = claude.invocation()?;
    assert_eq!(invocation[0], "-p");
    assert_eq!(invocation[1], "what is 2+2");
    assert!(invocation[2].starts_with("cwd="));
    assert_eq!(invocation[3], "teams=");

    Ok(())
}

/// Flags arrive in the documented order with pass-through args last
#[tokio::test]
async fn test_headless_argv_order() -> Result<()> {
    let claude = FakeClaude::recording(0)?;
    let bin = claude.path().to_string_lossy().into_owned();
    let config = run_config(&[
        "--claude-bin",
        &bin,
        "--permission-mode",
        "plan",
        "-p",
        "hello",
        "--allowedTools",
        "Bash",
        "--output-format",
        "json",
        "--continue",
        "--",
        "--verbose",
    ]);

    let code = run_headless_with(&config, None).await?;
    assert_eq!(code, 0);

    let invocation = claude.invocation()?;
    assert_eq!(
        &invocation[..10],
        &[
            "--permission-mode",
            "plan",
            "-p",
            "hello",
            "--allowedTools",
            "Bash",
            "--output-format",
            "json",
            "--continue",
            "--verbose",
        ]
    );

    Ok(())
}

/// --cwd and --agent-teams reach the child process
#[tokio::test]
async fn test_headless_cwd_and_agent_teams() -> Result<()> {
    let claude = FakeClaude::recording(0)?;
    let workdir = tempfile::tempdir()?;
    let bin = claude.path().to_string_lossy().into_owned();
    let cwd = workdir.path().to_string_lossy().into_owned();
    let config = run_config(&["--claude-bin", &bin, "--cwd", &cwd, "--agent-teams", "-p", "x"]);

    run_headless_with(&config, None).await?;

    let invocation = claude.invocation()?;
    let reported = invocation
        .iter()
        .find_map(|line| line.strip_prefix("cwd="))
        .expect("cwd line");
    assert_eq!(
        std::fs::canonicalize(reported)?,
        std::fs::canonicalize(workdir.path())?
    );
    assert!(invocation.contains(&"teams=1".to_string()));

    Ok(())
}

/// A missing claude binary is a preflight failure with exit code 2
#[tokio::test]
async fn test_missing_binary_is_preflight_failure() -> Result<()> {
    let config = run_config(&["--claude-bin", "/nonexistent/claude", "-p", "hi"]);

    let err = dispatch(&config).await.unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("/nonexistent/claude"));

    Ok(())
}

/// Exit code, argv order, cwd and environment all survive the script(1) wrapper
#[tokio::test]
async fn test_pty_wrapper_preserves_exit_code_and_invocation() -> Result<()> {
    let script = require_script!();

    let claude = FakeClaude::recording(7)?;
    let workdir = tempfile::tempdir()?;
    let bin = claude.path().to_string_lossy().into_owned();
    let cwd = workdir.path().to_string_lossy().into_owned();
    let config = run_config(&[
        "--claude-bin",
        &bin,
        "--cwd",
        &cwd,
        "--agent-teams",
        "--permission-mode",
        "plan",
        "-p",
        "what is 2+2",
        "--allowedTools",
        "Bash",
    ]);

    let code = run_headless_with(&config, Some(script.as_path())).await?;
    assert_eq!(code, 7);

    let invocation = claude.invocation()?;
    assert_eq!(
        &invocation[..6],
        &["--permission-mode", "plan", "-p", "what is 2+2", "--allowedTools", "Bash"]
    );
    let reported = invocation
        .iter()
        .find_map(|line| line.strip_prefix("cwd="))
        .expect("cwd line");
    assert_eq!(
        std::fs::canonicalize(reported)?,
        std::fs::canonicalize(workdir.path())?
    );
    assert!(invocation.contains(&"teams=1".to_string()));

    Ok(())
}

/// The PATH lookup path forwards the child's exit code too
#[tokio::test]
async fn test_run_headless_forwards_exit_code() -> Result<()> {
    let claude = FakeClaude::recording(3)?;
    let bin = claude.path().to_string_lossy().into_owned();
    let config = run_config(&["--claude-bin", &bin, "-p", "hello"]);

    let code = run_headless(&config).await?;
    assert_eq!(code, 3);
    assert_eq!(&claude.invocation()?[..2], &["-p", "hello"]);

    Ok(())
}

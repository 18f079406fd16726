// ABOUTME: Tmux pane content capture and text polling
//
// Provides capture options for `capture-pane` and a bounded polling loop that
// waits for a piece of text to appear on screen. Running out of time is a
// normal outcome, reported as `false`.

use super::Multiplexer;
use tokio::time::{sleep, Duration, Instant};
use tracing::debug;

/// Default scrollback depth for captures
pub const DEFAULT_CAPTURE_LINES: u32 = 200;

/// Options for capturing tmux pane content
///
/// Captures are plain text with wrapped lines joined, covering the visible
/// area plus `history_lines` of scrollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    pub history_lines: u32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self::scrollback(DEFAULT_CAPTURE_LINES)
    }
}

impl CaptureOptions {
    /// Visible content plus `lines` of scrollback
    pub const fn scrollback(lines: u32) -> Self {
        Self { history_lines: lines }
    }

    /// Flags for `capture-pane`, excluding `-p` and `-t`
    pub fn flags(&self) -> Vec<String> {
        vec!["-J".to_string(), "-S".to_string(), format!("-{}", self.history_lines)]
    }
}

/// Deadline and poll interval for `wait_for_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl WaitOptions {
    pub const fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self { timeout, poll_interval }
    }
}

/// Poll a pane until `pattern` shows up or the deadline passes
///
/// Capture failures count as "not there yet".
pub async fn wait_for_text<M: Multiplexer>(
    mux: &M,
    target: &str,
    pattern: &str,
    capture: &CaptureOptions,
    wait: WaitOptions,
) -> bool {
    let deadline = Instant::now() + wait.timeout;

    while Instant::now() < deadline {
        match mux.capture_pane(target, capture).await {
            Ok(content) if content.contains(pattern) => {
                debug!("Found {:?} in {}", pattern, target);
                return true;
            }
            Ok(_) => {}
            Err(e) => debug!("Capture of {} failed while waiting: {}", target, e),
        }
        sleep(wait.poll_interval).await;
    }

    debug!("Gave up waiting for {:?} in {} after {:?}", pattern, target, wait.timeout);
    false
}

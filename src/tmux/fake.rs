// ABOUTME: Recording multiplexer for unit tests
//
// Records every call in order and plays back scripted screens for
// capture-pane. The last scripted screen repeats forever.

use super::{CaptureOptions, Keystroke, Multiplexer};
use crate::error::LaunchError;
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    KillSession(String),
    NewSession(String, String),
    SendKeys(String, Keystroke),
    Capture(String),
}

#[derive(Debug, Default)]
pub struct FakeMux {
    calls: RefCell<Vec<Call>>,
    screens: RefCell<VecDeque<Result<String, String>>>,
    kill_succeeds: bool,
    fail_new_session: bool,
    fail_send_keys: bool,
}

fn failure(action: &str, stderr: &str) -> LaunchError {
    LaunchError::Tmux {
        action: action.to_string(),
        stderr: stderr.to_string(),
    }
}

impl FakeMux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screens returned by successive captures
    pub fn with_screens(screens: &[&str]) -> Self {
        let fake = Self::new();
        fake.screens
            .borrow_mut()
            .extend(screens.iter().map(|s| Ok((*s).to_string())));
        fake
    }

    /// Queue a failing capture
    pub fn push_capture_error(&self, stderr: &str) {
        self.screens.borrow_mut().push_back(Err(stderr.to_string()));
    }

    /// Queue a screen
    pub fn push_screen(&self, screen: &str) {
        self.screens.borrow_mut().push_back(Ok(screen.to_string()));
    }

    pub const fn with_existing_session(mut self) -> Self {
        self.kill_succeeds = true;
        self
    }

    pub const fn failing_new_session(mut self) -> Self {
        self.fail_new_session = true;
        self
    }

    pub const fn failing_send_keys(mut self) -> Self {
        self.fail_send_keys = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Only the keystrokes, in order
    pub fn keystrokes(&self) -> Vec<Keystroke> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::SendKeys(_, keys) => Some(keys.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn capture_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Capture(_)))
            .count()
    }
}

impl Multiplexer for FakeMux {
    async fn kill_session(&self, session: &str) -> Result<(), LaunchError> {
        self.calls.borrow_mut().push(Call::KillSession(session.to_string()));
        if self.kill_succeeds {
            Ok(())
        } else {
            Err(failure("kill-session", "can't find session"))
        }
    }

    async fn new_session(&self, session: &str, window: &str) -> Result<(), LaunchError> {
        self.calls
            .borrow_mut()
            .push(Call::NewSession(session.to_string(), window.to_string()));
        if self.fail_new_session {
            Err(failure("new-session", "error connecting to socket"))
        } else {
            Ok(())
        }
    }

    async fn send_keys(&self, target: &str, keys: &Keystroke) -> Result<(), LaunchError> {
        self.calls
            .borrow_mut()
            .push(Call::SendKeys(target.to_string(), keys.clone()));
        if self.fail_send_keys {
            Err(failure("send-keys", "no server running"))
        } else {
            Ok(())
        }
    }

    async fn capture_pane(&self, target: &str, _options: &CaptureOptions) -> Result<String, LaunchError> {
        self.calls.borrow_mut().push(Call::Capture(target.to_string()));
        let mut screens = self.screens.borrow_mut();
        let next = if screens.len() > 1 {
            screens.pop_front()
        } else {
            screens.front().cloned()
        };
        match next {
            Some(Ok(screen)) => Ok(screen),
            Some(Err(stderr)) => Err(failure("capture-pane", &stderr)),
            None => Ok(String::new()),
        }
    }
}

//! Runtime configuration for a game session.

use std::string::String;
use std::time::Duration;

use crate::core::config::{
    DEFAULT_REPORT_ENDPOINT, DEFAULT_REPORT_TIMEOUT_SECS, DEFAULT_REVEAL_PAUSE_MS,
    DEFAULT_THINKING_DELAY_MS, DEFAULT_TURN_PAUSE_MS,
};

/// Presentation delays inserted around turns. None of them affect the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause while the coin fades before being hidden or revealed.
    pub reveal: Duration,
    /// "Computer is thinking" delay before each computer decision.
    pub thinking: Duration,
    /// Pause between a computer decision and the player's prompt.
    pub turn_pause: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            reveal: Duration::from_millis(DEFAULT_REVEAL_PAUSE_MS),
            thinking: Duration::from_millis(DEFAULT_THINKING_DELAY_MS),
            turn_pause: Duration::from_millis(DEFAULT_TURN_PAUSE_MS),
        }
    }
}

impl Pacing {
    /// No delays at all, for simulations and tests.
    pub const fn headless() -> Self {
        Self {
            reveal: Duration::ZERO,
            thinking: Duration::ZERO,
            turn_pause: Duration::ZERO,
        }
    }

    pub fn with_thinking(mut self, thinking: Duration) -> Self {
        self.thinking = thinking;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub pacing: Pacing,
    /// Upper bound on how long a player turn may stay open. `None` waits
    /// until the input layer answers or closes.
    pub player_timeout: Option<Duration>,
}

impl SessionConfig {
    pub fn headless() -> Self {
        Self {
            pacing: Pacing::headless(),
            player_timeout: None,
        }
    }
}

/// Where and how completed games are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// `None` disables reporting.
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            endpoint: Some(DEFAULT_REPORT_ENDPOINT.to_string()),
            timeout: Duration::from_secs(DEFAULT_REPORT_TIMEOUT_SECS),
        }
    }
}

impl ReportConfig {
    pub fn disabled() -> Self {
        Self {
            endpoint: None,
            ..Self::default()
        }
    }
}

//! Session view state.
//!
//! Owns the two pieces of state the presentation layer drives: which
//! top-level view is active and whether posture monitoring is running.
//! Switching views never pauses reminders; the single coupling is that
//! entering the posture view switches monitoring on if it was off
//! (one-directional - leaving the view does not switch it back off).

use serde::{Deserialize, Serialize};

/// Top-level application views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppView {
    Dashboard,
    Posture,
    Exercises,
    Streamer,
    Stats,
    Assistant,
    Leaderboard,
    Feedback,
}

impl AppView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppView::Dashboard => "dashboard",
            AppView::Posture => "posture",
            AppView::Exercises => "exercises",
            AppView::Streamer => "streamer",
            AppView::Stats => "stats",
            AppView::Assistant => "assistant",
            AppView::Leaderboard => "leaderboard",
            AppView::Feedback => "feedback",
        }
    }
}

/// Monitoring flag and active view for the current session.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    is_monitoring: bool,
    active_view: AppView,
}

impl Session {
    pub fn new() -> Self {
        Self {
            is_monitoring: false,
            active_view: AppView::Dashboard,
        }
    }

    /// Sets the monitoring flag. Returns `true` when the flag changed.
    pub fn set_monitoring(&mut self, on: bool) -> bool {
        if self.is_monitoring == on {
            return false;
        }
        self.is_monitoring = on;
        true
    }

    /// Switches the active view.
    ///
    /// Returns `true` when monitoring was switched on as a side effect of
    /// entering the posture view, so the caller can start the monitoring
    /// tasks.
    pub fn set_active_view(&mut self, view: AppView) -> bool {
        self.active_view = view;
        if view == AppView::Posture && !self.is_monitoring {
            self.is_monitoring = true;
            return true;
        }
        false
    }

    pub fn is_monitoring(&self) -> bool {
        self.is_monitoring
    }

    pub fn active_view(&self) -> AppView {
        self.active_view
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

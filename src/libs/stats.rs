//! Daily wellness counters.
//!
//! Counters are seeded once at session start from locally recorded
//! activities and incremented in memory as the engine observes completions.
//! Nothing here blocks on the hosted backend - remote writes are
//! fire-and-forget and happen elsewhere.

use serde::{Deserialize, Serialize};

/// The fixed set of recordable activity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    PostureSession,
    Exercise,
    Break,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::PostureSession => "posture_session",
            ActivityKind::Exercise => "exercise",
            ActivityKind::Break => "break",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "posture_session" => Some(ActivityKind::PostureSession),
            "exercise" => Some(ActivityKind::Exercise),
            "break" => Some(ActivityKind::Break),
            _ => None,
        }
    }
}

/// Today's counters, as shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DailyStats {
    pub sessions_completed: u32,
    pub exercises_completed: u32,
    pub breaks_taken: u32,
    /// Hours of completed monitoring sessions, derived from recorded
    /// session durations.
    pub hours_worked: f64,
}

impl DailyStats {
    /// Applies a completed activity to the counters.
    pub fn record(&mut self, kind: ActivityKind, duration_secs: Option<i64>) {
        match kind {
            ActivityKind::PostureSession => {
                self.sessions_completed += 1;
                if let Some(secs) = duration_secs {
                    self.hours_worked += secs.max(0) as f64 / 3600.0;
                }
            }
            ActivityKind::Exercise => self.exercises_completed += 1,
            ActivityKind::Break => self.breaks_taken += 1,
        }
    }
}

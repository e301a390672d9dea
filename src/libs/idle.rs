//! Inactivity tracking.
//!
//! The tracker keeps the timestamp of the last input event and a table of
//! inactivity thresholds. `check_idle` runs on a fixed cadence while
//! monitoring is on; every threshold whose duration has elapsed fires
//! independently - crossing the two-hour mark does not suppress the
//! half-hour message. A one-shot threshold fires once per idle period and
//! is re-armed by the next recorded activity; a repeatable one fires on
//! every check while the condition holds. Recording activity never
//! retroactively cancels notifications that were already dispatched.

use crate::libs::notify::Category;
use chrono::{DateTime, Utc};

/// A configured inactivity threshold.
#[derive(Debug, Clone)]
pub struct IdleThreshold {
    pub minutes: i64,
    pub message: String,
    pub category: Category,
    /// `false` fires once per idle period, `true` fires on every check
    /// while elapsed time stays above the threshold.
    pub repeatable: bool,
}

/// Emitted when a threshold fires.
#[derive(Debug, Clone)]
pub struct ThresholdCrossing {
    pub minutes: i64,
    pub message: String,
    pub category: Category,
    pub elapsed_minutes: i64,
}

/// Tracks the last-interaction clock against the threshold table.
#[derive(Debug)]
pub struct IdleTracker {
    last_activity: DateTime<Utc>,
    thresholds: Vec<(IdleThreshold, bool)>,
}

impl IdleTracker {
    pub fn new(now: DateTime<Utc>, thresholds: Vec<IdleThreshold>) -> Self {
        Self {
            last_activity: now,
            thresholds: thresholds.into_iter().map(|t| (t, false)).collect(),
        }
    }

    /// The default threshold table: a stretch suggestion after 30 minutes
    /// (once per idle period) and an eye-rest suggestion after 2 hours
    /// (repeats on every check while the condition holds).
    pub fn default_thresholds(stretch_minutes: i64, eye_rest_minutes: i64) -> Vec<IdleThreshold> {
        vec![
            IdleThreshold {
                minutes: stretch_minutes,
                message: format!(
                    "You have been inactive for {} minutes. How about taking a break and doing some stretches? 🤸",
                    stretch_minutes
                ),
                category: Category::Stretch,
                repeatable: false,
            },
            IdleThreshold {
                minutes: eye_rest_minutes,
                message: format!(
                    "You have been at it for {} minutes! Apply the 20-20-20 rule for your eyes: look at a point 6 meters away for 20 seconds. 👁️",
                    eye_rest_minutes
                ),
                category: Category::Eye,
                repeatable: true,
            },
        ]
    }

    /// Resets the last-activity clock and re-arms one-shot thresholds.
    pub fn record_activity(&mut self, now: DateTime<Utc>) {
        self.last_activity = now;
        for (_, fired) in &mut self.thresholds {
            *fired = false;
        }
    }

    /// Evaluates every threshold against the elapsed idle time.
    ///
    /// Thresholds are checked independently; a one-shot threshold is marked
    /// spent after firing so it stays quiet until activity re-arms it.
    pub fn check_idle(&mut self, now: DateTime<Utc>) -> Vec<ThresholdCrossing> {
        let elapsed = self.idle_minutes(now);
        let mut crossings = Vec::new();

        for (threshold, fired) in &mut self.thresholds {
            if elapsed < threshold.minutes {
                continue;
            }
            if *fired && !threshold.repeatable {
                continue;
            }
            *fired = true;
            crossings.push(ThresholdCrossing {
                minutes: threshold.minutes,
                message: threshold.message.clone(),
                category: threshold.category,
                elapsed_minutes: elapsed,
            });
        }

        crossings
    }

    pub fn idle_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.last_activity).num_minutes().max(0)
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }
}

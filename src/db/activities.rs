//! Locally recorded wellness activities.
//!
//! Every completed session, exercise and break lands here first; the hosted
//! backend receives the same rows as fire-and-forget writes. The local copy
//! is what seeds the daily counters at session start and what achievement
//! progress is computed from, so the application stays fully functional
//! offline.

use crate::db::db::Db;
use crate::libs::stats::{ActivityKind, DailyStats};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::collections::HashMap;

/// Insert a completed activity with optional score and duration.
const INSERT_ACTIVITY: &str = "INSERT INTO activities (activity_type, score, duration, created_at) VALUES (?1, ?2, ?3, ?4)";

/// Count activities of one kind recorded on a given day.
const COUNT_FOR_DAY: &str = "SELECT COUNT(*) FROM activities WHERE activity_type = ?1 AND date(created_at) = ?2";

/// Sum of recorded durations (seconds) for one kind on a given day.
const DURATION_FOR_DAY: &str = "SELECT COALESCE(SUM(duration), 0) FROM activities WHERE activity_type = ?1 AND date(created_at) = ?2";

/// All-time counts per activity kind.
const COUNTS_BY_KIND: &str = "SELECT activity_type, COUNT(*) FROM activities GROUP BY activity_type";

/// Sum of all recorded session durations in seconds.
const TOTAL_SESSION_SECONDS: &str = "SELECT COALESCE(SUM(duration), 0) FROM activities WHERE activity_type = 'posture_session'";

/// Distinct days with at least one recorded activity, newest first.
const ACTIVITY_DAYS: &str = "SELECT DISTINCT date(created_at) FROM activities ORDER BY date(created_at) DESC";

/// Database manager for activity records.
pub struct Activities {
    conn: Connection,
}

impl Activities {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Activities { conn: db.conn })
    }

    /// Records a completed activity stamped with the current local time.
    pub fn insert(&mut self, kind: ActivityKind, score: Option<f64>, duration_secs: Option<i64>) -> Result<()> {
        let created_at = chrono::Local::now().naive_local();
        self.conn
            .execute(INSERT_ACTIVITY, params![kind.as_str(), score, duration_secs, created_at])?;
        Ok(())
    }

    /// Number of activities of `kind` recorded on `date`.
    pub fn count_for_day(&mut self, kind: ActivityKind, date: NaiveDate) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row(COUNT_FOR_DAY, params![kind.as_str(), date.format("%Y-%m-%d").to_string()], |row| row.get(0))?;
        Ok(count)
    }

    /// Total recorded seconds of `kind` on `date`.
    pub fn duration_for_day(&mut self, kind: ActivityKind, date: NaiveDate) -> Result<i64> {
        let secs: i64 = self
            .conn
            .query_row(DURATION_FOR_DAY, params![kind.as_str(), date.format("%Y-%m-%d").to_string()], |row| row.get(0))?;
        Ok(secs)
    }

    /// Seeds the daily counters for `date` from recorded activities.
    pub fn seed_daily_stats(&mut self, date: NaiveDate) -> Result<DailyStats> {
        let session_secs = self.duration_for_day(ActivityKind::PostureSession, date)?;
        Ok(DailyStats {
            sessions_completed: self.count_for_day(ActivityKind::PostureSession, date)?,
            exercises_completed: self.count_for_day(ActivityKind::Exercise, date)?,
            breaks_taken: self.count_for_day(ActivityKind::Break, date)?,
            hours_worked: session_secs.max(0) as f64 / 3600.0,
        })
    }

    /// All-time counts per kind, for achievement progress.
    pub fn counts_by_kind(&mut self) -> Result<HashMap<ActivityKind, u32>> {
        let mut stmt = self.conn.prepare(COUNTS_BY_KIND)?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, u32>(1)?)))?;

        let mut counts = HashMap::new();
        for row in rows {
            let (kind, count) = row?;
            if let Some(kind) = ActivityKind::parse(&kind) {
                counts.insert(kind, count);
            }
        }
        Ok(counts)
    }

    /// Total hours of recorded monitoring sessions.
    pub fn total_session_hours(&mut self) -> Result<f64> {
        let secs: i64 = self.conn.query_row(TOTAL_SESSION_SECONDS, [], |row| row.get(0))?;
        Ok(secs.max(0) as f64 / 3600.0)
    }

    /// Current streak of consecutive days with recorded activity, counting
    /// back from today.
    pub fn current_streak(&mut self) -> Result<u32> {
        let mut stmt = self.conn.prepare(ACTIVITY_DAYS)?;
        let days = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut streak = 0;
        let mut expected = chrono::Local::now().date_naive();
        for day in days {
            let Ok(date) = NaiveDate::parse_from_str(&day, "%Y-%m-%d") else {
                break;
            };
            if date == expected {
                streak += 1;
                expected = expected.pred_opt().unwrap_or(expected);
            } else {
                break;
            }
        }
        Ok(streak)
    }
}

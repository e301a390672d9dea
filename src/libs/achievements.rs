//! Gamified achievement milestones.
//!
//! Achievements are fixed definitions with a single numeric requirement.
//! Progress is computed locally from recorded activity totals; the hosted
//! backend only comes into play for the cross-user leaderboard.

use crate::libs::stats::ActivityKind;
use serde::Serialize;
use std::collections::HashMap;

/// What an achievement requires of the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Completed monitoring sessions.
    SessionsCount(u32),
    /// Completed exercises.
    ExercisesCount(u32),
    /// Hours of recorded monitoring.
    TotalHours(u32),
    /// Consecutive days with activity.
    StreakDays(u32),
}

/// A fixed achievement definition.
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub points: u32,
    pub requirement: Requirement,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "streak-7",
        title: "7 day streak",
        description: "Track your posture 7 days in a row",
        icon: "🔥",
        points: 100,
        requirement: Requirement::StreakDays(7),
    },
    Achievement {
        id: "posture-master",
        title: "Posture master",
        description: "Complete 50 monitoring sessions",
        icon: "🏆",
        points: 150,
        requirement: Requirement::SessionsCount(50),
    },
    Achievement {
        id: "eye-champion",
        title: "Exercise champion",
        description: "Complete 50 exercises",
        icon: "👁️",
        points: 100,
        requirement: Requirement::ExercisesCount(50),
    },
    Achievement {
        id: "marathon-worker",
        title: "Marathon",
        description: "Accumulate 100 hours of monitored work",
        icon: "⏱️",
        points: 200,
        requirement: Requirement::TotalHours(100),
    },
];

/// Activity totals the requirements are evaluated against.
#[derive(Debug, Clone, Default)]
pub struct ActivityTotals {
    pub counts: HashMap<ActivityKind, u32>,
    pub total_hours: f64,
    pub streak_days: u32,
}

/// An achievement with its computed progress.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementProgress {
    pub achievement: &'static Achievement,
    /// 0.0 .. 100.0 percent toward the requirement.
    pub progress: f64,
    pub earned: bool,
}

/// Evaluates every achievement against the given totals.
pub fn evaluate(totals: &ActivityTotals) -> Vec<AchievementProgress> {
    ACHIEVEMENTS
        .iter()
        .map(|achievement| {
            let (current, required) = match achievement.requirement {
                Requirement::SessionsCount(n) => (*totals.counts.get(&ActivityKind::PostureSession).unwrap_or(&0) as f64, n as f64),
                Requirement::ExercisesCount(n) => (*totals.counts.get(&ActivityKind::Exercise).unwrap_or(&0) as f64, n as f64),
                Requirement::TotalHours(n) => (totals.total_hours, n as f64),
                Requirement::StreakDays(n) => (totals.streak_days as f64, n as f64),
            };
            let progress = if required <= 0.0 { 100.0 } else { (current / required * 100.0).min(100.0) };
            AchievementProgress {
                achievement,
                progress,
                earned: current >= required,
            }
        })
        .collect()
}

/// Total points for the earned subset.
pub fn earned_points(progress: &[AchievementProgress]) -> u32 {
    progress.iter().filter(|p| p.earned).map(|p| p.achievement.points).sum()
}

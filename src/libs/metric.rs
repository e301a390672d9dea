//! Simulated posture score.
//!
//! The score is a bounded random walk: every metric tick applies a uniform
//! delta in [-5, +5] and clamps the result to [0, 100]. No history is kept
//! beyond the current value. Suspending monitoring simply stops ticking -
//! there is no drift accumulation and no catch-up on resume; the score
//! picks up from wherever it was left.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Score bounds and step size of the random walk.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;
pub const SCORE_DELTA: f64 = 5.0;

/// Starting score for a fresh session.
pub const DEFAULT_SCORE: f64 = 85.0;

/// Coarse classification of the current score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGrade {
    Excellent,
    Good,
    NeedsAttention,
}

impl ScoreGrade {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellent",
            ScoreGrade::Good => "Good",
            ScoreGrade::NeedsAttention => "Needs attention",
        }
    }
}

/// Holds the current simulated posture score.
#[derive(Debug, Clone)]
pub struct PostureMetric {
    score: f64,
}

impl PostureMetric {
    pub fn new(initial: f64) -> Self {
        Self {
            score: initial.clamp(SCORE_MIN, SCORE_MAX),
        }
    }

    /// Advances the random walk by one step and returns the new score.
    pub fn tick(&mut self) -> f64 {
        let delta = rand::thread_rng().gen_range(-SCORE_DELTA..=SCORE_DELTA);
        self.apply(delta)
    }

    /// Applies a specific delta, clamping to the score bounds. The random
    /// tick goes through here, so the clamping behavior is the same on both
    /// paths.
    pub fn apply(&mut self, delta: f64) -> f64 {
        self.score = (self.score + delta).clamp(SCORE_MIN, SCORE_MAX);
        self.score
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn grade(&self) -> ScoreGrade {
        if self.score >= 80.0 {
            ScoreGrade::Excellent
        } else if self.score >= 60.0 {
            ScoreGrade::Good
        } else {
            ScoreGrade::NeedsAttention
        }
    }

    /// Score-driven posture advice, most urgent last. Empty while the score
    /// is 70 or above.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.score < 70.0 {
            warnings.push("Keep your back straighter");
            warnings.push("Sit farther away from the screen");
        }
        if self.score < 50.0 {
            warnings.push("Pull your shoulders back");
            warnings.push("Keep your neck upright");
        }
        if self.score < 30.0 {
            warnings.push("Urgent: fix your posture!");
            warnings.push("Take a 5 minute break");
        }
        warnings
    }
}

impl Default for PostureMetric {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE)
    }
}

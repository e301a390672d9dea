//! Guided exercise catalog and session state.
//!
//! The catalog is a fixed set of short desk exercises. A session walks the
//! user through one exercise step by step; completing the final step ends
//! the session, which is when the completion counters and the backend
//! activity write happen (in the caller).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Eye,
    Stretch,
    Posture,
    Breathing,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Eye => "eye",
            ExerciseCategory::Stretch => "stretch",
            ExerciseCategory::Posture => "posture",
            ExerciseCategory::Breathing => "breathing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "eye" => Some(ExerciseCategory::Eye),
            "stretch" => Some(ExerciseCategory::Stretch),
            "posture" => Some(ExerciseCategory::Posture),
            "breathing" => Some(ExerciseCategory::Breathing),
            _ => None,
        }
    }

    pub fn all() -> &'static [ExerciseCategory] {
        &[
            ExerciseCategory::Eye,
            ExerciseCategory::Stretch,
            ExerciseCategory::Posture,
            ExerciseCategory::Breathing,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// A guided exercise definition.
#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Suggested duration in seconds.
    pub duration: u32,
    pub category: ExerciseCategory,
    pub difficulty: Difficulty,
    pub steps: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

/// The built-in exercise catalog.
pub const CATALOG: &[Exercise] = &[
    Exercise {
        id: "eye-20-20-20",
        name: "20-20-20 rule",
        description: "The classic exercise against eye strain",
        duration: 60,
        category: ExerciseCategory::Eye,
        difficulty: Difficulty::Easy,
        steps: &[
            "Look at something 20 feet (6 meters) away for 20 seconds",
            "Move your eyes around slowly",
            "Blink a few times",
            "Return to your normal gaze",
        ],
        benefits: &["Reduces eye strain", "Improves focus", "Protects against dry eye syndrome"],
    },
    Exercise {
        id: "neck-stretch",
        name: "Neck stretch",
        description: "Relieves neck and shoulder tension",
        duration: 120,
        category: ExerciseCategory::Stretch,
        difficulty: Difficulty::Easy,
        steps: &[
            "Slowly turn your head to the right and hold for 15 seconds",
            "Slowly turn your head to the left and hold for 15 seconds",
            "Tilt your head forward and hold for 15 seconds",
            "Gently pull your head back and hold for 15 seconds",
        ],
        benefits: &["Reduces neck tension", "Improves circulation", "Prevents headaches"],
    },
    Exercise {
        id: "shoulder-rolls",
        name: "Shoulder rolls",
        description: "Relaxes the shoulder muscles",
        duration: 90,
        category: ExerciseCategory::Stretch,
        difficulty: Difficulty::Easy,
        steps: &[
            "Slowly roll your shoulders forward 5 times",
            "Slowly roll your shoulders backward 5 times",
            "Raise your shoulders and hold for 5 seconds",
            "Let your shoulders drop and relax",
        ],
        benefits: &["Reduces shoulder tension", "Improves posture", "Boosts upper-body circulation"],
    },
    Exercise {
        id: "deep-breathing",
        name: "Deep breathing",
        description: "A breathing exercise that lowers stress",
        duration: 180,
        category: ExerciseCategory::Breathing,
        difficulty: Difficulty::Medium,
        steps: &[
            "Sit in a comfortable position",
            "Breathe in through your nose for 4 seconds",
            "Hold your breath for 7 seconds",
            "Breathe out through your mouth for 8 seconds",
            "Repeat this cycle 4 times",
        ],
        benefits: &["Reduces stress", "Improves concentration", "Regulates blood pressure"],
    },
    Exercise {
        id: "spinal-twist",
        name: "Spinal twist",
        description: "Improves spine flexibility",
        duration: 120,
        category: ExerciseCategory::Posture,
        difficulty: Difficulty::Medium,
        steps: &[
            "Sit upright in your chair",
            "Slowly twist your torso to the right",
            "Hold the position for 15 seconds",
            "Return to center and twist to the left",
            "Hold the position for 15 seconds",
        ],
        benefits: &["Improves spine flexibility", "Reduces lower back pain", "Supports digestion"],
    },
];

/// Finds an exercise by its id.
pub fn find(id: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|e| e.id == id)
}

/// Exercises in one category, in catalog order.
pub fn by_category(category: ExerciseCategory) -> Vec<&'static Exercise> {
    CATALOG.iter().filter(|e| e.category == category).collect()
}

/// Step-by-step state of a running exercise.
#[derive(Debug)]
pub struct ExerciseSession {
    exercise: &'static Exercise,
    current_step: usize,
    remaining: u32,
    finished: bool,
}

impl ExerciseSession {
    pub fn start(exercise: &'static Exercise) -> Self {
        Self {
            exercise,
            current_step: 0,
            remaining: exercise.duration,
            finished: false,
        }
    }

    /// Advances to the next step. Advancing past the final step finishes
    /// the session and returns `true`.
    pub fn next_step(&mut self) -> bool {
        if self.finished {
            return true;
        }
        if self.current_step + 1 < self.exercise.steps.len() {
            self.current_step += 1;
            false
        } else {
            self.finished = true;
            true
        }
    }

    /// Counts the suggested time down by one second.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn exercise(&self) -> &'static Exercise {
        self.exercise
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_text(&self) -> &'static str {
        self.exercise.steps[self.current_step.min(self.exercise.steps.len() - 1)]
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// 0.0 .. 1.0 progress through the steps.
    pub fn progress(&self) -> f64 {
        if self.finished {
            return 1.0;
        }
        self.current_step as f64 / self.exercise.steps.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use ergomate::libs::exercise::{self, Difficulty, ExerciseCategory, ExerciseSession};

    #[test]
    fn test_catalog_has_the_builtin_exercises() {
        assert_eq!(exercise::CATALOG.len(), 5);
        assert!(exercise::find("eye-20-20-20").is_some());
        assert!(exercise::find("neck-stretch").is_some());
        assert!(exercise::find("shoulder-rolls").is_some());
        assert!(exercise::find("deep-breathing").is_some());
        assert!(exercise::find("spinal-twist").is_some());
        assert!(exercise::find("unknown").is_none());
    }

    #[test]
    fn test_catalog_entries_are_complete() {
        for entry in exercise::CATALOG {
            assert!(entry.duration > 0);
            assert!(!entry.steps.is_empty());
            assert!(!entry.benefits.is_empty());
        }
    }

    #[test]
    fn test_category_filtering() {
        let stretches = exercise::by_category(ExerciseCategory::Stretch);
        assert_eq!(stretches.len(), 2);
        assert!(stretches.iter().all(|e| e.category == ExerciseCategory::Stretch));

        let breathing = exercise::by_category(ExerciseCategory::Breathing);
        assert_eq!(breathing.len(), 1);
        assert_eq!(breathing[0].id, "deep-breathing");
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(ExerciseCategory::parse("eye"), Some(ExerciseCategory::Eye));
        assert_eq!(ExerciseCategory::parse("breathing"), Some(ExerciseCategory::Breathing));
        assert_eq!(ExerciseCategory::parse("cardio"), None);
    }

    #[test]
    fn test_session_walks_through_steps() {
        let eye = exercise::find("eye-20-20-20").unwrap();
        let mut session = ExerciseSession::start(eye);

        assert_eq!(session.current_step(), 0);
        assert_eq!(session.remaining(), eye.duration);
        assert!(!session.is_finished());

        // Advance through all but the last step
        for expected in 1..eye.steps.len() {
            assert!(!session.next_step());
            assert_eq!(session.current_step(), expected);
        }

        // Advancing past the final step finishes the session
        assert!(session.next_step());
        assert!(session.is_finished());
        assert_eq!(session.progress(), 1.0);

        // Finished sessions stay finished
        assert!(session.next_step());
    }

    #[test]
    fn test_session_tick_counts_down() {
        let neck = exercise::find("neck-stretch").unwrap();
        let mut session = ExerciseSession::start(neck);

        session.tick();
        session.tick();
        assert_eq!(session.remaining(), neck.duration - 2);

        for _ in 0..neck.duration {
            session.tick();
        }
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_step_text_matches_current_step() {
        let breathing = exercise::find("deep-breathing").unwrap();
        let mut session = ExerciseSession::start(breathing);

        assert_eq!(session.step_text(), breathing.steps[0]);
        session.next_step();
        assert_eq!(session.step_text(), breathing.steps[1]);
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::Easy.label(), "easy");
        assert_eq!(Difficulty::Medium.label(), "medium");
        assert_eq!(Difficulty::Hard.label(), "hard");
    }
}

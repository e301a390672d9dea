#[cfg(test)]
mod tests {
    use ergomate::libs::achievements::{self, ActivityTotals};
    use ergomate::libs::stats::ActivityKind;
    use std::collections::HashMap;

    fn totals(sessions: u32, exercises: u32, hours: f64, streak: u32) -> ActivityTotals {
        let mut counts = HashMap::new();
        counts.insert(ActivityKind::PostureSession, sessions);
        counts.insert(ActivityKind::Exercise, exercises);
        ActivityTotals {
            counts,
            total_hours: hours,
            streak_days: streak,
        }
    }

    #[test]
    fn test_nothing_earned_on_fresh_account() {
        let progress = achievements::evaluate(&ActivityTotals::default());
        assert!(progress.iter().all(|p| !p.earned));
        assert_eq!(achievements::earned_points(&progress), 0);
    }

    #[test]
    fn test_earned_exactly_at_requirement() {
        let progress = achievements::evaluate(&totals(50, 0, 0.0, 0));
        let posture = progress.iter().find(|p| p.achievement.id == "posture-master").unwrap();
        assert!(posture.earned);
        assert_eq!(posture.progress, 100.0);

        // One below the requirement is not earned
        let progress = achievements::evaluate(&totals(49, 0, 0.0, 0));
        let posture = progress.iter().find(|p| p.achievement.id == "posture-master").unwrap();
        assert!(!posture.earned);
        assert_eq!(posture.progress, 98.0);
    }

    #[test]
    fn test_streak_achievement() {
        let progress = achievements::evaluate(&totals(0, 0, 0.0, 7));
        let streak = progress.iter().find(|p| p.achievement.id == "streak-7").unwrap();
        assert!(streak.earned);
    }

    #[test]
    fn test_hours_achievement_progress() {
        let progress = achievements::evaluate(&totals(0, 0, 25.0, 0));
        let marathon = progress.iter().find(|p| p.achievement.id == "marathon-worker").unwrap();
        assert!(!marathon.earned);
        assert_eq!(marathon.progress, 25.0);
    }

    #[test]
    fn test_progress_is_capped_at_hundred() {
        let progress = achievements::evaluate(&totals(500, 500, 500.0, 500));
        assert!(progress.iter().all(|p| p.earned && p.progress == 100.0));
    }

    #[test]
    fn test_earned_points_sums_earned_only() {
        let progress = achievements::evaluate(&totals(50, 50, 0.0, 0));
        // posture-master (150) + eye-champion (100)
        assert_eq!(achievements::earned_points(&progress), 250);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use ergomate::libs::idle::IdleTracker;
    use ergomate::libs::notify::Category;

    fn tracker_with_defaults() -> (IdleTracker, chrono::DateTime<Utc>) {
        let start = Utc::now();
        let tracker = IdleTracker::new(start, IdleTracker::default_thresholds(30, 120));
        (tracker, start)
    }

    #[test]
    fn test_nothing_fires_below_threshold() {
        let (mut tracker, start) = tracker_with_defaults();
        assert!(tracker.check_idle(start + Duration::minutes(29)).is_empty());
    }

    #[test]
    fn test_stretch_threshold_fires_once_per_idle_period() {
        let (mut tracker, start) = tracker_with_defaults();

        let crossings = tracker.check_idle(start + Duration::minutes(35));
        assert_eq!(crossings.len(), 1);
        assert_eq!(crossings[0].category, Category::Stretch);
        assert_eq!(crossings[0].minutes, 30);

        // Subsequent checks in the same idle period stay quiet
        assert!(tracker.check_idle(start + Duration::minutes(40)).is_empty());
        assert!(tracker.check_idle(start + Duration::minutes(60)).is_empty());
    }

    #[test]
    fn test_activity_rearms_one_shot_threshold() {
        let (mut tracker, start) = tracker_with_defaults();

        assert_eq!(tracker.check_idle(start + Duration::minutes(31)).len(), 1);

        tracker.record_activity(start + Duration::minutes(32));
        assert!(tracker.check_idle(start + Duration::minutes(40)).is_empty());

        // A fresh idle period crosses the threshold again
        let crossings = tracker.check_idle(start + Duration::minutes(63));
        assert_eq!(crossings.len(), 1);
        assert_eq!(crossings[0].category, Category::Stretch);
    }

    #[test]
    fn test_eye_rest_threshold_refires_on_every_check() {
        let (mut tracker, start) = tracker_with_defaults();

        let first = tracker.check_idle(start + Duration::minutes(121));
        assert!(first.iter().any(|c| c.category == Category::Eye));

        let second = tracker.check_idle(start + Duration::minutes(126));
        assert!(second.iter().any(|c| c.category == Category::Eye));

        let third = tracker.check_idle(start + Duration::minutes(131));
        assert!(third.iter().any(|c| c.category == Category::Eye));
    }

    #[test]
    fn test_thresholds_are_evaluated_independently() {
        let (mut tracker, start) = tracker_with_defaults();

        // Crossing the two-hour mark does not suppress the half-hour
        // message - both fire on the same check.
        let crossings = tracker.check_idle(start + Duration::minutes(125));
        assert_eq!(crossings.len(), 2);
        assert!(crossings.iter().any(|c| c.category == Category::Stretch));
        assert!(crossings.iter().any(|c| c.category == Category::Eye));
    }

    #[test]
    fn test_elapsed_minutes_reported_on_crossing() {
        let (mut tracker, start) = tracker_with_defaults();

        let crossings = tracker.check_idle(start + Duration::minutes(45));
        assert_eq!(crossings[0].elapsed_minutes, 45);
    }

    #[test]
    fn test_idle_minutes_never_negative() {
        let (tracker, start) = tracker_with_defaults();
        assert_eq!(tracker.idle_minutes(start - Duration::minutes(5)), 0);
    }

    #[test]
    fn test_record_activity_updates_clock() {
        let (mut tracker, start) = tracker_with_defaults();

        let later = start + Duration::minutes(10);
        tracker.record_activity(later);
        assert_eq!(tracker.last_activity(), later);
        assert_eq!(tracker.idle_minutes(later + Duration::minutes(3)), 3);
    }
}

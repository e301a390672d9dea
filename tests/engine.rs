#[cfg(test)]
mod tests {
    use chrono::{Duration as ChronoDuration, Utc};
    use ergomate::libs::engine::{EngineOptions, WellnessEngine};
    use ergomate::libs::notify::Category;
    use ergomate::libs::reminder::{Priority, ReminderKind, ReminderSpec};
    use ergomate::libs::session::AppView;
    use std::time::Duration;

    fn engine() -> WellnessEngine {
        WellnessEngine::new(EngineOptions::default())
    }

    #[test]
    fn test_reminder_tick_decrements_and_expires() {
        let engine = engine();
        let now = Utc::now();

        engine
            .create_reminder(ReminderSpec::new(ReminderKind::Break, "Short break", "Take five", Priority::High, 2))
            .unwrap();

        engine.tick_reminders(now);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.active_reminders.len(), 1);
        assert_eq!(snapshot.active_reminders[0].remaining, 1);

        engine.tick_reminders(now);
        let snapshot = engine.snapshot();
        assert!(snapshot.active_reminders.is_empty());

        // Expiry produced a notification in the same tick
        assert_eq!(snapshot.notifications.len(), 1);
        assert_eq!(snapshot.notifications[0].category, Category::Break);
        assert_eq!(snapshot.notifications[0].title, "Short break");
    }

    #[test]
    fn test_interval_reminder_respawns_with_new_id() {
        let engine = engine();
        let now = Utc::now();

        let mut spec = ReminderSpec::new(ReminderKind::Eye, "Eye rest", "Look away", Priority::Medium, 1);
        spec.interval = Some(1);
        spec.template = Some("eye-rest".to_string());
        let original_id = engine.create_reminder(spec).unwrap();

        // Expire the instance; the respawn is queued one minute out
        engine.tick_reminders(now);
        assert!(engine.snapshot().active_reminders.is_empty());

        // Not due yet
        engine.tick_reminders(now + ChronoDuration::seconds(30));
        assert!(engine.snapshot().active_reminders.is_empty());

        // Due: a fresh instance appears with a new id and a full countdown
        engine.tick_reminders(now + ChronoDuration::seconds(61));
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.active_reminders.len(), 1);
        assert_ne!(snapshot.active_reminders[0].id, original_id);
        assert_eq!(snapshot.active_reminders[0].remaining, 1);
        assert_eq!(snapshot.active_reminders[0].template.as_deref(), Some("eye-rest"));
    }

    #[test]
    fn test_completing_a_reminder_counts_a_break() {
        let engine = engine();

        let id = engine
            .create_reminder(ReminderSpec::new(ReminderKind::Break, "Short break", "Take five", Priority::High, 300))
            .unwrap();

        assert_eq!(engine.snapshot().stats.breaks_taken, 0);
        engine.complete(id);

        let snapshot = engine.snapshot();
        assert!(snapshot.active_reminders.is_empty());
        assert_eq!(snapshot.stats.breaks_taken, 1);

        // Completing the same id again is a no-op
        engine.complete(id);
        assert_eq!(engine.snapshot().stats.breaks_taken, 1);
    }

    #[test]
    fn test_dismiss_does_not_touch_stats() {
        let engine = engine();

        let id = engine
            .create_reminder(ReminderSpec::new(ReminderKind::Stretch, "Stretch", "Loosen up", Priority::Low, 300))
            .unwrap();
        engine.dismiss(id);

        let snapshot = engine.snapshot();
        assert!(snapshot.active_reminders.is_empty());
        assert_eq!(snapshot.stats.breaks_taken, 0);
    }

    #[test]
    fn test_idle_crossing_dispatches_and_spawns_stretch_reminder() {
        let engine = engine();
        let now = Utc::now();

        // Pretend the last input event was 31 minutes ago
        engine.record_activity(now - ChronoDuration::minutes(31));
        engine.check_idle(now);

        let snapshot = engine.snapshot();
        // The crossing itself plus the spawned reminder announcement
        assert_eq!(snapshot.notifications.len(), 2);
        assert!(snapshot.notifications.iter().any(|n| n.category == Category::Stretch));
        assert_eq!(snapshot.active_reminders.len(), 1);
        assert_eq!(snapshot.active_reminders[0].kind, ReminderKind::Stretch);
    }

    #[test]
    fn test_exercise_completion_updates_stats() {
        let engine = engine();

        engine.record_exercise(90);
        engine.record_exercise(120);

        assert_eq!(engine.snapshot().stats.exercises_completed, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopping_monitoring_freezes_the_score() {
        let engine = engine();

        engine.set_monitoring(true);
        assert!(engine.snapshot().is_monitoring);

        engine.set_monitoring(false);
        assert!(!engine.snapshot().is_monitoring);
        let frozen = engine.snapshot().score;

        // No pending metric or idle tick fires after cancellation
        tokio::time::advance(Duration::from_secs(120)).await;
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }

        assert_eq!(engine.snapshot().score, frozen);
        // A completed monitoring session was recorded
        assert_eq!(engine.snapshot().stats.sessions_completed, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_monitoring_drives_the_metric_task() {
        let engine = engine();
        let initial = engine.snapshot().score;

        engine.set_monitoring(true);
        tokio::time::advance(Duration::from_secs(30)).await;
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }

        assert_ne!(engine.snapshot().score, initial);
    }

    #[tokio::test(start_paused = true)]
    async fn test_posture_view_auto_starts_monitoring() {
        let engine = engine();

        engine.set_active_view(AppView::Posture);

        let snapshot = engine.snapshot();
        assert!(snapshot.is_monitoring);
        assert_eq!(snapshot.active_view, AppView::Posture);

        // One-directional: leaving the view keeps monitoring on
        engine.set_active_view(AppView::Dashboard);
        assert!(engine.snapshot().is_monitoring);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_seeds_reminders_and_ticks_them() {
        let engine = engine();
        engine.start();

        let seeded = engine.snapshot().active_reminders;
        assert_eq!(seeded.len(), 2);
        let before: u32 = seeded.iter().map(|r| r.remaining).sum();

        tokio::time::advance(Duration::from_secs(5)).await;
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }

        let after: u32 = engine.snapshot().active_reminders.iter().map(|r| r.remaining).sum();
        assert!(after < before);

        engine.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use ergomate::libs::error::ValidationError;
    use ergomate::libs::reminder::{Priority, RecurrenceQueue, RegistryEvent, ReminderKind, ReminderRegistry, ReminderSpec, ReminderState};
    use uuid::Uuid;

    fn stretch_spec(duration: u32) -> ReminderSpec {
        ReminderSpec::new(ReminderKind::Stretch, "Stretch", "Time to stretch", Priority::Medium, duration)
    }

    #[test]
    fn test_create_starts_active_with_full_countdown() {
        let mut registry = ReminderRegistry::new();
        let id = registry.create(stretch_spec(120)).unwrap();

        let reminder = registry.active().iter().find(|r| r.id == id).unwrap();
        assert_eq!(reminder.state, ReminderState::Active);
        assert_eq!(reminder.remaining, 120);
        assert_eq!(reminder.total, 120);
    }

    #[test]
    fn test_create_rejects_empty_fields() {
        let mut registry = ReminderRegistry::new();

        let spec = ReminderSpec::new(ReminderKind::Eye, "", "message", Priority::Low, 60);
        assert_eq!(registry.create(spec), Err(ValidationError::EmptyTitle));

        let spec = ReminderSpec::new(ReminderKind::Eye, "title", "   ", Priority::Low, 60);
        assert_eq!(registry.create(spec), Err(ValidationError::EmptyMessage));

        let spec = ReminderSpec::new(ReminderKind::Eye, "title", "message", Priority::Low, 0);
        assert_eq!(registry.create(spec), Err(ValidationError::ZeroDuration));

        // Nothing was mutated by the failed attempts
        assert!(registry.is_empty());
    }

    #[test]
    fn test_tick_decrements_by_one() {
        let mut registry = ReminderRegistry::new();
        registry.create(stretch_spec(10)).unwrap();

        registry.tick();
        assert_eq!(registry.active()[0].remaining, 9);

        registry.tick();
        assert_eq!(registry.active()[0].remaining, 8);
    }

    #[test]
    fn test_reminder_expires_within_same_tick() {
        let mut registry = ReminderRegistry::new();
        registry.create(stretch_spec(1)).unwrap();

        let events = registry.tick();

        // Reaching zero removes the reminder in the same tick; nothing
        // lingers at remaining == 0 in the active state.
        assert!(registry.is_empty());
        assert_eq!(events.len(), 1);
        match &events[0] {
            RegistryEvent::Expired(r) => {
                assert_eq!(r.state, ReminderState::Expired);
                assert_eq!(r.remaining, 0);
            }
            other => panic!("expected Expired event, got {:?}", other),
        }
    }

    #[test]
    fn test_full_countdown_scenario() {
        let mut registry = ReminderRegistry::new();
        registry.create(stretch_spec(120)).unwrap();

        for _ in 0..119 {
            let events = registry.tick();
            assert!(events.is_empty());
        }
        assert_eq!(registry.active()[0].remaining, 1);

        let events = registry.tick();
        assert_eq!(events.len(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_dismiss_and_complete_unknown_id_are_noops() {
        let mut registry = ReminderRegistry::new();
        registry.create(stretch_spec(60)).unwrap();

        assert!(registry.dismiss(Uuid::new_v4()).is_none());
        assert!(registry.complete(Uuid::new_v4()).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_dismiss_removes_from_active_set() {
        let mut registry = ReminderRegistry::new();
        let id = registry.create(stretch_spec(60)).unwrap();

        let event = registry.dismiss(id).unwrap();
        match event {
            RegistryEvent::Dismissed(r) => assert_eq!(r.state, ReminderState::Dismissed),
            other => panic!("expected Dismissed event, got {:?}", other),
        }
        assert!(registry.is_empty());

        // A second dismiss of the same id is an idempotent no-op
        assert!(registry.dismiss(id).is_none());
    }

    #[test]
    fn test_complete_removes_from_active_set() {
        let mut registry = ReminderRegistry::new();
        let id = registry.create(stretch_spec(60)).unwrap();

        let event = registry.complete(id).unwrap();
        match event {
            RegistryEvent::Completed(r) => assert_eq!(r.state, ReminderState::Completed),
            other => panic!("expected Completed event, got {:?}", other),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_identical_titles_are_distinct_entities() {
        let mut registry = ReminderRegistry::new();
        let first = registry.create(stretch_spec(60)).unwrap();
        let second = registry.create(stretch_spec(60)).unwrap();

        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);

        registry.dismiss(first);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active()[0].id, second);
    }

    #[test]
    fn test_tick_never_goes_negative() {
        let mut registry = ReminderRegistry::new();
        registry.create(stretch_spec(2)).unwrap();

        for _ in 0..10 {
            registry.tick();
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_active_sorted_puts_high_priority_first() {
        let mut registry = ReminderRegistry::new();
        registry
            .create(ReminderSpec::new(ReminderKind::Eye, "low", "m", Priority::Low, 60))
            .unwrap();
        registry
            .create(ReminderSpec::new(ReminderKind::Break, "high", "m", Priority::High, 60))
            .unwrap();

        let sorted = registry.active_sorted();
        assert_eq!(sorted[0].title, "high");
        assert_eq!(sorted[1].title, "low");
    }

    #[test]
    fn test_recurrence_queue_drains_only_due_entries() {
        let mut queue = RecurrenceQueue::new();
        let now = Utc::now();

        let mut spec = stretch_spec(60);
        spec.interval = Some(15);
        queue.schedule(spec.clone(), now + Duration::minutes(15));
        queue.schedule(spec, now + Duration::minutes(30));

        assert!(queue.drain_due(now).is_empty());
        assert_eq!(queue.len(), 2);

        let due = queue.drain_due(now + Duration::minutes(16));
        assert_eq!(due.len(), 1);
        assert_eq!(queue.len(), 1);

        let due = queue.drain_due(now + Duration::minutes(31));
        assert_eq!(due.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_respawn_spec_preserves_fields() {
        let mut registry = ReminderRegistry::new();
        let mut spec = stretch_spec(60);
        spec.interval = Some(5);
        spec.template = Some("stretch-template".to_string());
        let id = registry.create(spec).unwrap();

        let event = registry.complete(id).unwrap();
        let respawn = event.reminder().respawn_spec();

        assert_eq!(respawn.duration, 60);
        assert_eq!(respawn.interval, Some(5));
        assert_eq!(respawn.template.as_deref(), Some("stretch-template"));
        assert_eq!(respawn.title, "Stretch");
    }
}

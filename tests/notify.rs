#[cfg(test)]
mod tests {
    use ergomate::libs::idle::ThresholdCrossing;
    use ergomate::libs::notify::{Category, NotificationDispatcher, NotifyEvent};
    use ergomate::libs::reminder::{Priority, ReminderKind, ReminderRegistry, ReminderSpec};

    fn expired_reminder(kind: ReminderKind) -> ergomate::libs::reminder::ActiveReminder {
        let mut registry = ReminderRegistry::new();
        registry.create(ReminderSpec::new(kind, "Title", "Body", Priority::High, 1)).unwrap();
        let events = registry.tick();
        match events.into_iter().next().unwrap() {
            ergomate::libs::reminder::RegistryEvent::Expired(r) => r,
            other => panic!("expected expiry, got {:?}", other),
        }
    }

    #[test]
    fn test_category_mapping_from_reminder_kinds() {
        assert_eq!(Category::from(ReminderKind::Eye), Category::Eye);
        assert_eq!(Category::from(ReminderKind::Posture), Category::Posture);
        assert_eq!(Category::from(ReminderKind::Break), Category::Break);
        assert_eq!(Category::from(ReminderKind::Stretch), Category::Stretch);
        // Anything uncategorizable falls back to the general category
        assert_eq!(Category::from(ReminderKind::Custom), Category::General);
    }

    #[test]
    fn test_expired_reminder_keeps_its_text_and_priority() {
        let mut dispatcher = NotificationDispatcher::new();
        dispatcher.dispatch(NotifyEvent::ReminderExpired(expired_reminder(ReminderKind::Break)));

        let feed = dispatcher.feed();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].title, "Title");
        assert_eq!(feed[0].body, "Body");
        assert_eq!(feed[0].category, Category::Break);
        assert_eq!(feed[0].priority, Priority::High);
    }

    #[test]
    fn test_idle_crossing_renders_with_category_label() {
        let mut dispatcher = NotificationDispatcher::new();
        dispatcher.dispatch(NotifyEvent::IdleThresholdCrossed(ThresholdCrossing {
            minutes: 30,
            message: "Take a stretch".to_string(),
            category: Category::Stretch,
            elapsed_minutes: 42,
        }));

        let feed = dispatcher.feed();
        assert_eq!(feed[0].category, Category::Stretch);
        assert!(feed[0].title.contains(Category::Stretch.label()));
        assert_eq!(feed[0].body, "Take a stretch");
        assert_eq!(feed[0].priority, Priority::Medium);
    }

    #[test]
    fn test_feed_is_append_only_and_ordered() {
        let mut dispatcher = NotificationDispatcher::new();

        dispatcher.dispatch(NotifyEvent::ReminderExpired(expired_reminder(ReminderKind::Eye)));
        dispatcher.dispatch(NotifyEvent::ReminderExpired(expired_reminder(ReminderKind::Stretch)));
        dispatcher.dispatch(NotifyEvent::IdleThresholdCrossed(ThresholdCrossing {
            minutes: 120,
            message: "Rest your eyes".to_string(),
            category: Category::Eye,
            elapsed_minutes: 120,
        }));

        let feed = dispatcher.feed();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].category, Category::Eye);
        assert_eq!(feed[1].category, Category::Stretch);
        assert_eq!(feed[2].category, Category::Eye);
        assert!(feed[0].at <= feed[2].at);
    }

    #[test]
    fn test_every_category_has_label_and_icon() {
        for category in [Category::Eye, Category::Posture, Category::Break, Category::Stretch, Category::General] {
            assert!(!category.label().is_empty());
            assert!(!category.icon().is_empty());
        }
    }

    #[test]
    fn test_dispatch_never_fails_on_custom_kind() {
        let mut dispatcher = NotificationDispatcher::new();
        dispatcher.dispatch(NotifyEvent::ReminderExpired(expired_reminder(ReminderKind::Custom)));
        assert_eq!(dispatcher.feed()[0].category, Category::General);
    }

    #[test]
    fn test_threshold_created_reminder_event() {
        let mut registry = ReminderRegistry::new();
        let id = registry
            .create(ReminderSpec::new(ReminderKind::Stretch, "Stretch break", "Stand up", Priority::Medium, 300))
            .unwrap();
        let reminder = registry.active().iter().find(|r| r.id == id).cloned().unwrap();

        let mut dispatcher = NotificationDispatcher::new();
        dispatcher.dispatch(NotifyEvent::ReminderCreatedByThreshold(reminder));

        assert_eq!(dispatcher.feed()[0].category, Category::Stretch);
        assert_eq!(dispatcher.feed()[0].title, "Stretch break");
    }
}

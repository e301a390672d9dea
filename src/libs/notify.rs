//! Notification dispatching.
//!
//! Turns registry and idle-detector events into user-facing messages. The
//! category set is a closed enum with an exhaustive label/icon mapping -
//! anything that does not fit a concrete category falls back to `General`.
//! Dispatch never fails; notifications land on an ordered, append-only
//! feed and removal is the presentation layer's job via dismiss/complete
//! calls back into the registry.

use crate::libs::idle::ThresholdCrossing;
use crate::libs::reminder::{ActiveReminder, Priority, ReminderKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed notification category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Eye,
    Posture,
    Break,
    Stretch,
    General,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Eye => "Eye rest",
            Category::Posture => "Posture",
            Category::Break => "Break",
            Category::Stretch => "Stretch",
            Category::General => "General",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Eye => "👁️",
            Category::Posture => "🧍",
            Category::Break => "☕",
            Category::Stretch => "🤸",
            Category::General => "🔔",
        }
    }
}

impl From<ReminderKind> for Category {
    fn from(kind: ReminderKind) -> Self {
        match kind {
            ReminderKind::Eye => Category::Eye,
            ReminderKind::Posture => Category::Posture,
            ReminderKind::Break => Category::Break,
            ReminderKind::Stretch => Category::Stretch,
            ReminderKind::Custom => Category::General,
        }
    }
}

/// Events the dispatcher knows how to render.
#[derive(Debug, Clone)]
pub enum NotifyEvent {
    /// A countdown ran out.
    ReminderExpired(ActiveReminder),
    /// The engine spawned a reminder in response to an idle threshold.
    ReminderCreatedByThreshold(ActiveReminder),
    /// An idle threshold fired without spawning a reminder.
    IdleThresholdCrossed(ThresholdCrossing),
}

/// A rendered, user-facing notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub category: Category,
    pub priority: Priority,
    pub at: DateTime<Utc>,
}

/// Renders events onto an append-only notification feed.
#[derive(Debug, Default)]
pub struct NotificationDispatcher {
    feed: Vec<Notification>,
}

impl NotificationDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps an event to a notification, appends it to the feed and returns
    /// a copy for the caller to announce.
    pub fn dispatch(&mut self, event: NotifyEvent) -> Notification {
        let notification = match event {
            NotifyEvent::ReminderExpired(reminder) => Notification {
                title: reminder.title.clone(),
                body: reminder.message,
                category: Category::from(reminder.kind),
                priority: reminder.priority,
                at: Utc::now(),
            },
            NotifyEvent::ReminderCreatedByThreshold(reminder) => Notification {
                title: reminder.title.clone(),
                body: reminder.message,
                category: Category::from(reminder.kind),
                priority: reminder.priority,
                at: Utc::now(),
            },
            NotifyEvent::IdleThresholdCrossed(crossing) => Notification {
                title: format!("{} {}", crossing.category.icon(), crossing.category.label()),
                body: crossing.message,
                category: crossing.category,
                priority: Priority::Medium,
                at: Utc::now(),
            },
        };

        self.feed.push(notification.clone());
        notification
    }

    /// The full feed in dispatch order.
    pub fn feed(&self) -> &[Notification] {
        &self.feed
    }

    pub fn len(&self) -> usize {
        self.feed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feed.is_empty()
    }
}

//! Reminder registry: countdown state machine and recurrence queue.
//!
//! Active reminders move through a one-way state machine:
//!
//! ```text
//! Scheduled -> Active -> (Expired | Completed | Dismissed)
//! ```
//!
//! There is no transition back out of a terminal state. Recurrence is
//! implemented by re-spawning: when an instance spawned from an interval
//! template leaves the active set, a fresh instance (new id) is queued for
//! `interval` minutes later via [`RecurrenceQueue`]. The registry is ticked
//! once per second by the engine regardless of whether posture monitoring
//! is on - countdowns are independent of monitoring state.

use crate::libs::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of reminder kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Eye,
    Posture,
    Break,
    Stretch,
    Custom,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderKind::Eye => "eye",
            ReminderKind::Posture => "posture",
            ReminderKind::Break => "break",
            ReminderKind::Stretch => "stretch",
            ReminderKind::Custom => "custom",
        }
    }

    /// Parses a stored kind string; anything unknown falls back to `Custom`.
    pub fn parse(s: &str) -> Self {
        match s {
            "eye" => ReminderKind::Eye,
            "posture" => ReminderKind::Posture,
            "break" => ReminderKind::Break,
            "stretch" => ReminderKind::Stretch,
            _ => ReminderKind::Custom,
        }
    }

    pub fn all() -> &'static [ReminderKind] {
        &[
            ReminderKind::Eye,
            ReminderKind::Posture,
            ReminderKind::Break,
            ReminderKind::Stretch,
            ReminderKind::Custom,
        ]
    }
}

/// Display priority. Affects styling and ordering only - a high priority
/// reminder never preempts anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }
}

/// Lifecycle state of a reminder instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderState {
    Scheduled,
    Active,
    Expired,
    Dismissed,
    Completed,
}

/// Input for spawning a reminder instance.
#[derive(Debug, Clone)]
pub struct ReminderSpec {
    pub kind: ReminderKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    /// Countdown duration in seconds, fixed at creation.
    pub duration: u32,
    /// Minutes between recurrences. `None` spawns exactly once.
    pub interval: Option<u32>,
    /// Name of the template this spec was spawned from, if any.
    pub template: Option<String>,
}

impl ReminderSpec {
    pub fn new(kind: ReminderKind, title: &str, message: &str, priority: Priority, duration: u32) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.to_string(),
            priority,
            duration,
            interval: None,
            template: None,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        if self.duration == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        Ok(())
    }
}

/// A reminder with a running countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveReminder {
    pub id: Uuid,
    pub kind: ReminderKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    /// Total countdown in seconds, fixed at creation.
    pub total: u32,
    /// Seconds left; decremented once per tick while active.
    pub remaining: u32,
    pub state: ReminderState,
    /// Minutes between recurrences, copied from the source template.
    pub interval: Option<u32>,
    /// Source template name, if any.
    pub template: Option<String>,
}

impl ActiveReminder {
    /// 0.0 .. 1.0 progress of the countdown.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        1.0 - (self.remaining as f64 / self.total as f64)
    }

    /// Builds the spec for the next recurrence of this instance.
    pub fn respawn_spec(&self) -> ReminderSpec {
        ReminderSpec {
            kind: self.kind,
            title: self.title.clone(),
            message: self.message.clone(),
            priority: self.priority,
            duration: self.total,
            interval: self.interval,
            template: self.template.clone(),
        }
    }
}

/// Emitted by the registry when an instance leaves the active set.
#[derive(Debug, Clone)]
pub enum RegistryEvent {
    Expired(ActiveReminder),
    Completed(ActiveReminder),
    Dismissed(ActiveReminder),
}

impl RegistryEvent {
    pub fn reminder(&self) -> &ActiveReminder {
        match self {
            RegistryEvent::Expired(r) | RegistryEvent::Completed(r) | RegistryEvent::Dismissed(r) => r,
        }
    }
}

/// Holds all currently active reminder countdowns.
#[derive(Debug, Default)]
pub struct ReminderRegistry {
    active: Vec<ActiveReminder>,
}

impl ReminderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a new active reminder from a spec.
    ///
    /// Validation failures leave the registry untouched. Identical titles
    /// are allowed - every instance gets its own id.
    pub fn create(&mut self, spec: ReminderSpec) -> Result<Uuid, ValidationError> {
        spec.validate()?;

        let id = Uuid::new_v4();
        self.active.push(ActiveReminder {
            id,
            kind: spec.kind,
            title: spec.title,
            message: spec.message,
            priority: spec.priority,
            total: spec.duration,
            remaining: spec.duration,
            state: ReminderState::Active,
            interval: spec.interval,
            template: spec.template,
        });
        Ok(id)
    }

    /// Decrements every active countdown by one second.
    ///
    /// A reminder that reaches zero transitions to `Expired` and is removed
    /// from the active set within the same tick - nothing lingers at
    /// `remaining == 0` in the active state. Never panics.
    pub fn tick(&mut self) -> Vec<RegistryEvent> {
        let mut events = Vec::new();

        for reminder in &mut self.active {
            reminder.remaining = reminder.remaining.saturating_sub(1);
        }

        let mut i = 0;
        while i < self.active.len() {
            if self.active[i].remaining == 0 {
                let mut expired = self.active.remove(i);
                expired.state = ReminderState::Expired;
                events.push(RegistryEvent::Expired(expired));
            } else {
                i += 1;
            }
        }

        events
    }

    /// Dismisses a reminder. Unknown ids are an idempotent no-op.
    pub fn dismiss(&mut self, id: Uuid) -> Option<RegistryEvent> {
        self.remove(id, ReminderState::Dismissed).map(RegistryEvent::Dismissed)
    }

    /// Completes a reminder. Unknown ids are an idempotent no-op.
    pub fn complete(&mut self, id: Uuid) -> Option<RegistryEvent> {
        self.remove(id, ReminderState::Completed).map(RegistryEvent::Completed)
    }

    fn remove(&mut self, id: Uuid, state: ReminderState) -> Option<ActiveReminder> {
        let index = self.active.iter().position(|r| r.id == id)?;
        let mut reminder = self.active.remove(index);
        reminder.state = state;
        Some(reminder)
    }

    /// Active reminders ordered by priority (high first), then by time left.
    pub fn active_sorted(&self) -> Vec<ActiveReminder> {
        let mut reminders = self.active.clone();
        reminders.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.remaining.cmp(&b.remaining)));
        reminders
    }

    pub fn active(&self) -> &[ActiveReminder] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Seed reminders spawned once at engine startup.
pub fn seed_reminders() -> Vec<ReminderSpec> {
    vec![
        ReminderSpec::new(
            ReminderKind::Eye,
            "Eye exercise time",
            "Time to apply the 20-20-20 rule",
            Priority::Medium,
            20 * 60,
        ),
        ReminderSpec::new(
            ReminderKind::Break,
            "Short break",
            "We recommend taking a 5 minute break",
            Priority::High,
            30 * 60,
        ),
    ]
}

/// Pending re-spawns for reminders created from interval templates.
///
/// Entries become due `interval` minutes after the previous instance left
/// the active set; the engine drains due entries on its reminder tick.
#[derive(Debug, Default)]
pub struct RecurrenceQueue {
    entries: Vec<(DateTime<Utc>, ReminderSpec)>,
}

impl RecurrenceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, spec: ReminderSpec, due_at: DateTime<Utc>) {
        self.entries.push((due_at, spec));
    }

    /// Removes and returns every spec whose due time has passed.
    pub fn drain_due(&mut self, now: DateTime<Utc>) -> Vec<ReminderSpec> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].0 <= now {
                due.push(self.entries.remove(i).1);
            } else {
                i += 1;
            }
        }
        due
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

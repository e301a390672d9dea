//! The wellness engine.
//!
//! Wires the reminder registry, idle tracker, metric simulator, session
//! state and notification dispatcher into one unit behind a shared state
//! object, and drives them from the periodic scheduler:
//!
//! - reminder tick, every second, for as long as the engine runs
//! - metric tick, every `metric_interval` seconds, only while monitoring
//! - idle check, every `idle_check_interval` seconds, only while monitoring
//!
//! Every tick entry point is a public method operating on wall-clock "now",
//! so tests (and any other caller) can drive the engine deterministically
//! without the scheduler. Ordering between the tasks on a coincident tick
//! is unspecified; no invariant depends on it. Tick bodies never return
//! errors - a failure inside a periodic task must not cancel future runs.
//!
//! Stopping monitoring releases the metric and idle task handles
//! immediately, so no pending tick fires afterwards; tearing the engine
//! down releases all three.

use crate::api::BackendClient;
use crate::db::activities::Activities;
use crate::libs::config::{MonitorConfig, StreamerConfig};
use crate::libs::error::ValidationError;
use crate::libs::idle::IdleTracker;
use crate::libs::messages::Message;
use crate::libs::metric::{PostureMetric, ScoreGrade};
use crate::libs::notify::{Category, Notification, NotificationDispatcher, NotifyEvent};
use crate::libs::reminder::{seed_reminders, ActiveReminder, Priority, RecurrenceQueue, RegistryEvent, ReminderKind, ReminderRegistry, ReminderSpec};
use crate::libs::scheduler::{spawn_periodic, TaskHandle};
use crate::libs::session::{AppView, Session};
use crate::libs::stats::{ActivityKind, DailyStats};
use crate::{msg_debug, msg_info};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use uuid::Uuid;

/// Countdown length of the stretch reminder spawned by an idle threshold.
const THRESHOLD_REMINDER_SECS: u32 = 5 * 60;

/// Everything the engine needs at construction time.
#[derive(Default)]
pub struct EngineOptions {
    pub monitor: MonitorConfig,
    pub streamer: StreamerConfig,
    /// Counters seeded from locally recorded activities.
    pub stats: DailyStats,
    /// Local activity log; `None` keeps completions in memory only.
    pub activity_log: Option<Activities>,
    /// Hosted backend for fire-and-forget sync.
    pub backend: Option<BackendClient>,
}

/// The read model handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub score: f64,
    pub grade: ScoreGrade,
    pub warnings: Vec<&'static str>,
    pub active_reminders: Vec<ActiveReminder>,
    pub notifications: Vec<Notification>,
    pub is_monitoring: bool,
    pub active_view: AppView,
    pub stats: DailyStats,
    pub streamer: StreamerConfig,
}

struct EngineState {
    monitor: MonitorConfig,
    streamer: StreamerConfig,
    registry: Mutex<ReminderRegistry>,
    recurrence: Mutex<RecurrenceQueue>,
    dispatcher: Mutex<NotificationDispatcher>,
    idle: Mutex<IdleTracker>,
    metric: Mutex<PostureMetric>,
    session: Mutex<Session>,
    stats: Mutex<DailyStats>,
    activity_log: Option<Mutex<Activities>>,
    backend: Option<BackendClient>,
    monitoring_since: Mutex<Option<DateTime<Utc>>>,
    reminder_task: Mutex<Option<TaskHandle>>,
    metric_task: Mutex<Option<TaskHandle>>,
    idle_task: Mutex<Option<TaskHandle>>,
}

/// Handle to the shared engine. Cheap to clone.
#[derive(Clone)]
pub struct WellnessEngine {
    state: Arc<EngineState>,
}

impl WellnessEngine {
    pub fn new(options: EngineOptions) -> Self {
        let now = Utc::now();
        let thresholds = IdleTracker::default_thresholds(options.monitor.stretch_threshold as i64, options.monitor.eye_rest_threshold as i64);

        Self {
            state: Arc::new(EngineState {
                monitor: options.monitor,
                streamer: options.streamer,
                registry: Mutex::new(ReminderRegistry::new()),
                recurrence: Mutex::new(RecurrenceQueue::new()),
                dispatcher: Mutex::new(NotificationDispatcher::new()),
                idle: Mutex::new(IdleTracker::new(now, thresholds)),
                metric: Mutex::new(PostureMetric::default()),
                session: Mutex::new(Session::new()),
                stats: Mutex::new(options.stats),
                activity_log: options.activity_log.map(Mutex::new),
                backend: options.backend,
                monitoring_since: Mutex::new(None),
                reminder_task: Mutex::new(None),
                metric_task: Mutex::new(None),
                idle_task: Mutex::new(None),
            }),
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Seeds the registry and starts the one-second reminder tick.
    ///
    /// Must be called from within a tokio runtime. Monitoring stays off
    /// until [`set_monitoring`](Self::set_monitoring) or the posture view
    /// switch it on.
    pub fn start(&self) {
        {
            let mut registry = self.state.registry.lock();
            for spec in seed_reminders() {
                // Seed specs are static and always valid.
                let _ = registry.create(spec);
            }
        }

        let weak = Arc::downgrade(&self.state);
        let handle = spawn_periodic("reminder-tick", Duration::from_secs(1), move || {
            if let Some(engine) = Self::upgrade(&weak) {
                engine.tick_reminders(Utc::now());
            }
        });
        *self.state.reminder_task.lock() = Some(handle);
    }

    /// Runs until cancelled from outside (the daemon selects against a
    /// shutdown signal).
    pub async fn run(&self) {
        self.start();
        self.spawn_input_listener();
        self.set_monitoring(true);
        msg_info!(Message::EngineStarted {
            metric_interval: self.state.monitor.metric_interval,
            idle_check_interval: self.state.monitor.idle_check_interval,
        });
        std::future::pending::<()>().await;
    }

    /// Releases every periodic task. A monitoring session in flight is
    /// closed out and recorded first.
    pub fn shutdown(&self) {
        self.set_monitoring(false);
        self.state.reminder_task.lock().take();
        self.state.metric_task.lock().take();
        self.state.idle_task.lock().take();
    }

    fn upgrade(weak: &Weak<EngineState>) -> Option<WellnessEngine> {
        weak.upgrade().map(|state| WellnessEngine { state })
    }

    // ── Periodic tick bodies ─────────────────────────────────────────

    /// One second of reminder time: decrement countdowns, dispatch expiry
    /// notifications, schedule and spawn recurrences.
    pub fn tick_reminders(&self, now: DateTime<Utc>) {
        let events = self.state.registry.lock().tick();

        for event in events {
            if let RegistryEvent::Expired(reminder) = event {
                self.schedule_recurrence(&reminder, now);
                let notification = self.state.dispatcher.lock().dispatch(NotifyEvent::ReminderExpired(reminder));
                self.announce(&notification);
            }
        }

        let due = self.state.recurrence.lock().drain_due(now);
        if !due.is_empty() {
            let mut registry = self.state.registry.lock();
            for spec in due {
                // Specs were validated when their template was created.
                let _ = registry.create(spec);
            }
        }
    }

    /// One metric step of the posture score random walk.
    pub fn tick_metric(&self) {
        let score = self.state.metric.lock().tick();
        msg_debug!(format!("posture score: {:.1}", score));
    }

    /// One idle evaluation pass: dispatch threshold crossings and spawn a
    /// short stretch reminder for the stretch threshold.
    pub fn check_idle(&self, now: DateTime<Utc>) {
        let crossings = self.state.idle.lock().check_idle(now);

        for crossing in crossings {
            let spawn_stretch = crossing.category == Category::Stretch;
            let notification = self.state.dispatcher.lock().dispatch(NotifyEvent::IdleThresholdCrossed(crossing));
            self.announce(&notification);

            if spawn_stretch {
                let spec = ReminderSpec::new(
                    ReminderKind::Stretch,
                    "Stretch break",
                    "Stand up and loosen your shoulders and back",
                    Priority::Medium,
                    THRESHOLD_REMINDER_SECS,
                );
                let created = {
                    let mut registry = self.state.registry.lock();
                    registry
                        .create(spec)
                        .ok()
                        .and_then(|id| registry.active().iter().find(|r| r.id == id).cloned())
                };
                if let Some(reminder) = created {
                    let notification = self.state.dispatcher.lock().dispatch(NotifyEvent::ReminderCreatedByThreshold(reminder));
                    self.announce(&notification);
                }
            }
        }
    }

    /// Called for every tracked input event.
    pub fn record_activity(&self, now: DateTime<Utc>) {
        self.state.idle.lock().record_activity(now);
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Switches posture monitoring on or off.
    ///
    /// Turning it on starts the metric and idle-check tasks; turning it
    /// off releases them immediately and records the finished monitoring
    /// session. Reminder countdowns are unaffected either way.
    pub fn set_monitoring(&self, on: bool) {
        let changed = self.state.session.lock().set_monitoring(on);
        if !changed {
            return;
        }

        if on {
            self.start_monitoring_tasks();
            msg_debug!(Message::MonitoringEnabled);
        } else {
            self.stop_monitoring_tasks();
            msg_debug!(Message::MonitoringDisabled);
        }
    }

    /// Switches the active view. Entering the posture view switches
    /// monitoring on if it was off; nothing else touches the timers.
    pub fn set_active_view(&self, view: AppView) {
        let auto_started = self.state.session.lock().set_active_view(view);
        if auto_started {
            self.start_monitoring_tasks();
            msg_debug!(Message::MonitoringEnabled);
        }
    }

    /// Spawns a reminder countdown.
    pub fn create_reminder(&self, spec: ReminderSpec) -> Result<Uuid, ValidationError> {
        self.state.registry.lock().create(spec)
    }

    /// Dismisses a reminder; unknown ids are a no-op. A dismissed instance
    /// from an interval template still re-arms.
    pub fn dismiss(&self, id: Uuid) {
        let event = self.state.registry.lock().dismiss(id);
        if let Some(RegistryEvent::Dismissed(reminder)) = event {
            self.schedule_recurrence(&reminder, Utc::now());
        }
    }

    /// Completes a reminder; unknown ids are a no-op. Completion counts as
    /// a taken break and is forwarded to the activity log and backend.
    pub fn complete(&self, id: Uuid) {
        let event = self.state.registry.lock().complete(id);
        if let Some(RegistryEvent::Completed(reminder)) = event {
            let elapsed = (reminder.total - reminder.remaining) as i64;
            self.state.stats.lock().record(ActivityKind::Break, Some(elapsed));
            self.log_activity(ActivityKind::Break, None, Some(elapsed));
            self.schedule_recurrence(&reminder, Utc::now());
        }
    }

    /// Records a completed exercise (driven by the exercise command).
    pub fn record_exercise(&self, duration_secs: i64) {
        self.state.stats.lock().record(ActivityKind::Exercise, Some(duration_secs));
        self.log_activity(ActivityKind::Exercise, None, Some(duration_secs));
    }

    // ── Read model ───────────────────────────────────────────────────

    pub fn snapshot(&self) -> Snapshot {
        let metric = self.state.metric.lock();
        let session = self.state.session.lock();
        Snapshot {
            score: metric.score(),
            grade: metric.grade(),
            warnings: metric.warnings(),
            active_reminders: self.state.registry.lock().active_sorted(),
            notifications: self.state.dispatcher.lock().feed().to_vec(),
            is_monitoring: session.is_monitoring(),
            active_view: session.active_view(),
            stats: *self.state.stats.lock(),
            streamer: self.state.streamer.clone(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn start_monitoring_tasks(&self) {
        *self.state.monitoring_since.lock() = Some(Utc::now());

        let weak = Arc::downgrade(&self.state);
        let metric_handle = spawn_periodic("metric-tick", Duration::from_secs(self.state.monitor.metric_interval.max(1)), move || {
            if let Some(engine) = Self::upgrade(&weak) {
                engine.tick_metric();
            }
        });
        *self.state.metric_task.lock() = Some(metric_handle);

        let weak = Arc::downgrade(&self.state);
        let idle_handle = spawn_periodic("idle-check", Duration::from_secs(self.state.monitor.idle_check_interval.max(1)), move || {
            if let Some(engine) = Self::upgrade(&weak) {
                engine.check_idle(Utc::now());
            }
        });
        *self.state.idle_task.lock() = Some(idle_handle);
    }

    fn stop_monitoring_tasks(&self) {
        self.state.metric_task.lock().take();
        self.state.idle_task.lock().take();

        if let Some(since) = self.state.monitoring_since.lock().take() {
            let duration = (Utc::now() - since).num_seconds().max(0);
            let score = self.state.metric.lock().score();
            self.state.stats.lock().record(ActivityKind::PostureSession, Some(duration));
            self.log_activity(ActivityKind::PostureSession, Some(score), Some(duration));
        }
    }

    fn announce(&self, notification: &Notification) {
        msg_info!(format!(
            "{} {}: {}",
            notification.category.icon(),
            notification.title,
            notification.body
        ));
    }

    fn schedule_recurrence(&self, reminder: &ActiveReminder, now: DateTime<Utc>) {
        if let Some(minutes) = reminder.interval {
            let due_at = now + ChronoDuration::minutes(minutes as i64);
            self.state.recurrence.lock().schedule(reminder.respawn_spec(), due_at);
        }
    }

    /// Writes an activity locally and forwards it to the backend,
    /// fire-and-forget. Neither write can fail the caller.
    fn log_activity(&self, kind: ActivityKind, score: Option<f64>, duration: Option<i64>) {
        if let Some(log) = &self.state.activity_log {
            if let Err(e) = log.lock().insert(kind, score, duration) {
                tracing::warn!("failed to record {} activity locally: {}", kind.as_str(), e);
            }
        }

        if let Some(backend) = self.state.backend.clone() {
            if let Ok(runtime) = tokio::runtime::Handle::try_current() {
                runtime.spawn(async move {
                    backend.record_activity(kind, score, duration).await;
                });
            }
        }
    }

    /// Spawns the global input listener thread feeding the idle tracker.
    ///
    /// Restarts the listener on error, matching the lifetime of the
    /// daemon process. The thread holds only a weak reference, so engine
    /// teardown is not kept alive by it.
    pub fn spawn_input_listener(&self) {
        let weak = Arc::downgrade(&self.state);
        std::thread::spawn(move || loop {
            let weak_for_listener = weak.clone();
            if let Err(e) = rdev::listen(move |event: rdev::Event| {
                let tracked = matches!(
                    event.event_type,
                    rdev::EventType::KeyPress(_) | rdev::EventType::ButtonPress(_) | rdev::EventType::MouseMove { .. } | rdev::EventType::Wheel { .. }
                );
                if tracked {
                    if let Some(engine) = Self::upgrade(&weak_for_listener) {
                        engine.record_activity(Utc::now());
                    }
                }
            }) {
                msg_debug!(Message::InputListenerFailed(format!("{:?}", e)));
                std::thread::sleep(Duration::from_secs(1));
            } else {
                break;
            }
        });
    }
}

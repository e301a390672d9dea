//! Display implementation for ergomate application messages.
//!
//! All user-facing text is defined here, in one place, so wording stays
//! consistent across commands and the daemon. Messages with dynamic content
//! use typed parameters interpolated at format time.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigModuleMonitor => "Monitor configuration".to_string(),
            Message::ConfigModuleBackend => "Backend configuration".to_string(),
            Message::ConfigModuleAssistant => "Assistant configuration".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptUserId => "User identifier for backend sync".to_string(),
            Message::PromptMetricInterval => "Posture score update interval (seconds)".to_string(),
            Message::PromptIdleCheckInterval => "Idle check interval (seconds)".to_string(),
            Message::PromptStretchThreshold => "Stretch suggestion after inactivity (minutes)".to_string(),
            Message::PromptEyeRestThreshold => "Eye rest suggestion after inactivity (minutes)".to_string(),
            Message::PromptBackendApiUrl => "Backend API URL".to_string(),
            Message::PromptBackendAuthToken => "Backend auth token".to_string(),
            Message::PromptAssistantApiUrl => "Assistant proxy URL".to_string(),

            // === REMINDER TEMPLATE MESSAGES ===
            Message::TemplateCreated(name) => format!("Reminder template '{}' created", name),
            Message::TemplateUpdated(name) => format!("Reminder template '{}' updated", name),
            Message::TemplateDeleted(name) => format!("Reminder template '{}' deleted", name),
            Message::TemplateNotFound(name) => format!("Reminder template '{}' not found", name),
            Message::TemplateAlreadyExists(name) => format!("Reminder template '{}' already exists", name),
            Message::TemplateCreateFailed => "Failed to create reminder template".to_string(),
            Message::NoTemplatesFound => "No reminder templates found".to_string(),
            Message::TemplateListHeader => "📋 Reminder templates".to_string(),
            Message::EditingTemplate(name) => format!("Editing reminder template '{}'", name),
            Message::SelectTemplateToEdit => "Select a template to edit".to_string(),
            Message::SelectTemplateToDelete => "Select a template to delete".to_string(),
            Message::SelectReminderAction => "What would you like to do?".to_string(),
            Message::ConfirmDeleteTemplate(name) => format!("Delete reminder template '{}'?", name),
            Message::PromptTemplateName => "Template name".to_string(),
            Message::PromptReminderTitle => "Reminder title".to_string(),
            Message::PromptReminderMessage => "Reminder message".to_string(),
            Message::PromptReminderKind => "Reminder kind".to_string(),
            Message::PromptReminderPriority => "Priority".to_string(),
            Message::PromptReminderDuration => "Countdown duration (seconds)".to_string(),
            Message::PromptReminderInterval => "Recurrence interval in minutes (0 for none)".to_string(),
            Message::ReminderDurationRange => "Duration must be a positive number of seconds".to_string(),

            // === ENGINE MESSAGES ===
            Message::EngineStarted {
                metric_interval,
                idle_check_interval,
            } => format!(
                "Wellness engine started (score every {}s, idle check every {}s)",
                metric_interval, idle_check_interval
            ),
            Message::EngineShuttingDown => "Shutting down wellness engine...".to_string(),
            Message::EngineExitedNormally => "Wellness engine exited normally".to_string(),
            Message::EngineTaskPanicked(e) => format!("Wellness engine task panicked: {}", e),
            Message::MonitoringEnabled => "Posture monitoring enabled".to_string(),
            Message::MonitoringDisabled => "Posture monitoring disabled".to_string(),
            Message::InputListenerFailed(e) => format!("Input listener failed: {}. Retrying in 1 second...", e),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted(pid) => format!("Watcher started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watcher with PID {} stopped", pid),
            Message::WatcherNotRunning => "Watcher is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found)".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher (PID: {})", pid),
            Message::WatcherFailedToStopExisting(e) => format!("Failed to stop existing watcher: {}", e),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher with PID {}", pid),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down gracefully...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down gracefully...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down gracefully...".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatcherSignalHandlingNotSupported => "Signal handling not supported on this platform".to_string(),
            Message::InvalidPidFileContent => "Invalid PID file content".to_string(),
            Message::DaemonModeNotSupported => "Daemon mode is not supported on this platform".to_string(),
            Message::ProcessTerminationNotSupported => "Process termination is not supported on this platform".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process (error code: {})", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process (error code: {})", code),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === EXERCISE MESSAGES ===
            Message::ExerciseListHeader => "🤸 Guided exercises".to_string(),
            Message::ExerciseNotFound(id) => format!("Exercise '{}' not found", id),
            Message::ExerciseStarted(name) => format!("Starting exercise: {}", name),
            Message::ExerciseStep(current, total) => format!("Step {} of {}", current, total),
            Message::ExerciseCompleted(name) => format!("Exercise '{}' completed, well done!", name),
            Message::ExerciseStopped => "Exercise stopped".to_string(),
            Message::SelectExercise => "Select an exercise".to_string(),
            Message::NoExercisesInCategory(cat) => format!("No exercises in category '{}'", cat),
            Message::PromptNextStep => "Next step?".to_string(),

            // === ASSISTANT MESSAGES ===
            Message::AssistantHeader => "🤖 AI health assistant (empty message to quit)".to_string(),
            Message::AssistantNotConfigured => "Assistant is not configured, run 'ergomate init'".to_string(),
            Message::AssistantMissingApiKey => "Assistant API key is not set (export ERGOMATE_ASSISTANT_API_KEY)".to_string(),
            Message::PromptAssistantMessage => "You".to_string(),

            // === FEEDBACK MESSAGES ===
            Message::FeedbackSubmitted => "Thank you, your feedback has been submitted".to_string(),
            Message::FeedbackSubmitFailed(e) => format!("Failed to submit feedback: {}", e),
            Message::PromptFeedbackRating => "Rating (1-5)".to_string(),
            Message::PromptFeedbackCategory => "Category".to_string(),
            Message::PromptFeedbackMessage => "Your feedback".to_string(),
            Message::FeedbackRatingRange => "Rating must be between 1 and 5".to_string(),

            // === STATS MESSAGES ===
            Message::StatsHeader(date) => format!("📊 Wellness stats for {}", date),
            Message::ActiveRemindersHeader => "⏰ Active reminders".to_string(),
            Message::NotificationsHeader => "🔔 Notifications".to_string(),

            // === LEADERBOARD MESSAGES ===
            Message::AchievementsHeader => "🏆 Achievements".to_string(),
            Message::LeaderboardHeader => "🥇 Leaderboard".to_string(),
            Message::LeaderboardFetchFailed(e) => format!("Could not fetch leaderboard: {}", e),
            Message::LeaderboardEmpty => "Leaderboard is empty".to_string(),

            // === BACKEND MESSAGES ===
            Message::BackendNotConfigured => "Backend is not configured, run 'ergomate init'".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}

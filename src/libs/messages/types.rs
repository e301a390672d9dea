#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,
    ConfigModuleMonitor,
    ConfigModuleBackend,
    ConfigModuleAssistant,
    PromptSelectModules,
    PromptUserId,
    PromptMetricInterval,
    PromptIdleCheckInterval,
    PromptStretchThreshold,
    PromptEyeRestThreshold,
    PromptBackendApiUrl,
    PromptBackendAuthToken,
    PromptAssistantApiUrl,

    // === REMINDER TEMPLATE MESSAGES ===
    TemplateCreated(String),
    TemplateUpdated(String),
    TemplateDeleted(String),
    TemplateNotFound(String),
    TemplateAlreadyExists(String),
    TemplateCreateFailed,
    NoTemplatesFound,
    TemplateListHeader,
    EditingTemplate(String),
    SelectTemplateToEdit,
    SelectTemplateToDelete,
    SelectReminderAction,
    ConfirmDeleteTemplate(String),
    PromptTemplateName,
    PromptReminderTitle,
    PromptReminderMessage,
    PromptReminderKind,
    PromptReminderPriority,
    PromptReminderDuration,
    PromptReminderInterval,
    ReminderDurationRange,

    // === ENGINE MESSAGES ===
    EngineStarted {
        metric_interval: u64,
        idle_check_interval: u64,
    },
    EngineShuttingDown,
    EngineExitedNormally,
    EngineTaskPanicked(String),
    MonitoringEnabled,
    MonitoringDisabled,
    InputListenerFailed(String),

    // === WATCHER MESSAGES ===
    WatcherStarted(u32),
    WatcherStopped(u32),
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String),
    WatcherFailedToStopExisting(String),
    WatcherFailedToStop(u32),
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    InvalidPidFileContent,
    DaemonModeNotSupported,
    ProcessTerminationNotSupported,
    FailedToOpenProcess(u32),
    FailedToTerminateProcess(u32),
    FailedToGetCurrentExecutable,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,

    // === EXERCISE MESSAGES ===
    ExerciseListHeader,
    ExerciseNotFound(String),
    ExerciseStarted(String),
    ExerciseStep(usize, usize), // current, total
    ExerciseCompleted(String),
    ExerciseStopped,
    SelectExercise,
    NoExercisesInCategory(String),
    PromptNextStep,

    // === ASSISTANT MESSAGES ===
    AssistantHeader,
    AssistantNotConfigured,
    AssistantMissingApiKey,
    PromptAssistantMessage,

    // === FEEDBACK MESSAGES ===
    FeedbackSubmitted,
    FeedbackSubmitFailed(String),
    PromptFeedbackRating,
    PromptFeedbackCategory,
    PromptFeedbackMessage,
    FeedbackRatingRange,

    // === STATS MESSAGES ===
    StatsHeader(String), // date
    ActiveRemindersHeader,
    NotificationsHeader,

    // === LEADERBOARD MESSAGES ===
    AchievementsHeader,
    LeaderboardHeader,
    LeaderboardFetchFailed(String),
    LeaderboardEmpty,

    // === BACKEND MESSAGES ===
    BackendNotConfigured,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}

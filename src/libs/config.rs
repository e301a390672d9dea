//! Configuration management for the ergomate application.
//!
//! Settings live in a JSON file in the platform data directory and are
//! split into optional modules: activity monitoring, the hosted backend,
//! the assistant proxy, and streamer-mode presentation hints. Each module
//! can be configured independently through the interactive setup wizard;
//! missing modules fall back to defaults where that makes sense.
//!
//! The assistant API key is deliberately NOT part of the config file - it
//! comes from the `ERGOMATE_ASSISTANT_API_KEY` environment variable and its
//! absence only surfaces when an assistant call is attempted.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Activity monitor configuration.
///
/// Cadences for the periodic tasks and the inactivity threshold table. The
/// reminder tick is fixed at one second and not configurable - countdown
/// semantics depend on it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Posture score update interval in seconds.
    pub metric_interval: u64,

    /// Idle check interval in seconds.
    pub idle_check_interval: u64,

    /// Minutes of inactivity before the stretch suggestion fires (once per
    /// idle period).
    pub stretch_threshold: u64,

    /// Minutes of inactivity before the eye-rest suggestion fires (repeats
    /// on every check while the condition holds).
    pub eye_rest_threshold: u64,
}

impl Default for MonitorConfig {
    /// Defaults mirror the observed application behavior: score every 3
    /// seconds, idle check every 5 minutes, stretch suggestion at 30
    /// minutes, eye rest at 2 hours.
    fn default() -> Self {
        MonitorConfig {
            metric_interval: 3,
            idle_check_interval: 300,
            stretch_threshold: 30,
            eye_rest_threshold: 120,
        }
    }
}

/// Hosted backend configuration for activity sync.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BackendConfig {
    /// Base URL of the hosted CRUD backend.
    pub api_url: String,

    /// Authentication token sent with every request.
    pub auth_token: String,

    /// Identifier attached to every persisted row.
    pub user_id: String,
}

/// Assistant proxy configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AssistantConfig {
    /// URL of the chat completion proxy endpoint.
    pub api_url: String,
}

/// Overlay position for the streamer-mode camera box.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum CameraPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Streamer-mode presentation hints.
///
/// These are carried through the read model for the presentation layer;
/// the timer core applies no audio or overlay behavior itself.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StreamerConfig {
    pub silent_mode: bool,
    pub visual_only_alerts: bool,
    pub posture_monitoring: bool,
    pub eye_reminders: bool,
    pub break_reminders: bool,
    /// Alert visibility, 10-100 percent.
    pub alert_opacity: u8,
    /// Seconds an alert stays on screen.
    pub alert_duration: u64,
    pub camera_position: CameraPosition,
    pub minimize_overlay: bool,
}

impl Default for StreamerConfig {
    fn default() -> Self {
        StreamerConfig {
            silent_mode: true,
            visual_only_alerts: true,
            posture_monitoring: true,
            eye_reminders: true,
            break_reminders: true,
            alert_opacity: 80,
            alert_duration: 3,
            camera_position: CameraPosition::TopRight,
            minimize_overlay: false,
        }
    }
}

/// Main configuration container.
///
/// All modules are optional so users configure only what they use and new
/// modules never break existing setups. Unconfigured modules are omitted
/// from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant: Option<AssistantConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub streamer: Option<StreamerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem, falling back to defaults
    /// when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow!(e.to_string()))?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow!(e.to_string()))?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Presents a multi-select of configurable modules, collects the
    /// parameters for each selected one (pre-filling current values as
    /// defaults) and returns the updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            ConfigModule {
                key: "monitor".to_string(),
                name: "Monitor".to_string(),
            },
            ConfigModule {
                key: "backend".to_string(),
                name: "Backend".to_string(),
            },
            ConfigModule {
                key: "assistant".to_string(),
                name: "Assistant".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "monitor" => {
                    let default = config.monitor.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleMonitor);
                    config.monitor = Some(MonitorConfig {
                        metric_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMetricInterval.to_string())
                            .default(default.metric_interval)
                            .interact_text()?,

                        idle_check_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIdleCheckInterval.to_string())
                            .default(default.idle_check_interval)
                            .interact_text()?,

                        stretch_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStretchThreshold.to_string())
                            .default(default.stretch_threshold)
                            .interact_text()?,

                        eye_rest_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptEyeRestThreshold.to_string())
                            .default(default.eye_rest_threshold)
                            .interact_text()?,
                    });
                }

                "backend" => {
                    let default = config.backend.clone().unwrap_or(BackendConfig {
                        api_url: "".to_string(),
                        auth_token: "".to_string(),
                        user_id: "".to_string(),
                    });
                    msg_print!(Message::ConfigModuleBackend);
                    config.backend = Some(BackendConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBackendApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,

                        auth_token: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBackendAuthToken.to_string())
                            .default(default.auth_token)
                            .interact_text()?,

                        user_id: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUserId.to_string())
                            .default(default.user_id)
                            .interact_text()?,
                    });
                }

                "assistant" => {
                    let default = config.assistant.clone().unwrap_or(AssistantConfig { api_url: "".to_string() });
                    msg_print!(Message::ConfigModuleAssistant);
                    config.assistant = Some(AssistantConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAssistantApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                _ => {} // Unknown module keys are safely ignored
            }
        }

        Ok(config)
    }
}

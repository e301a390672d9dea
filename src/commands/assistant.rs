//! AI health assistant command.
//!
//! Sends a single message or runs an interactive chat loop against the
//! configured proxy. The client degrades to a fixed fallback answer on any
//! upstream failure, so this command never errors because the proxy is
//! down; only a missing configuration is reported. Exchanges are forwarded
//! to the backend's chat history, fire-and-forget.

use crate::{
    api::{assistant::API_KEY_ENV, AssistantClient, BackendClient},
    libs::{config::Config, messages::Message},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AssistantArgs {
    /// Message to send (starts an interactive chat when omitted)
    message: Option<String>,
}

pub async fn cmd(args: AssistantArgs) -> Result<()> {
    let config = Config::read()?;

    let Some(assistant_config) = &config.assistant else {
        msg_info!(Message::AssistantNotConfigured);
        return Ok(());
    };

    // The missing key only matters once a call is attempted; warn up front
    // but let the exchange degrade to the fallback answer.
    if std::env::var(API_KEY_ENV).is_err() {
        msg_warning!(Message::AssistantMissingApiKey);
    }

    let backend = BackendClient::from_config(&config);
    let user_id = backend.as_ref().map(|b| b.user_id().to_string()).unwrap_or_else(|| "anonymous".to_string());
    let client = AssistantClient::new(assistant_config, &user_id);

    if let Some(message) = args.message {
        exchange(&client, backend.as_ref(), &message).await;
        return Ok(());
    }

    msg_print!(Message::AssistantHeader, true);
    loop {
        let message: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAssistantMessage.to_string())
            .allow_empty(true)
            .interact_text()?;

        if message.trim().is_empty() {
            break;
        }

        exchange(&client, backend.as_ref(), &message).await;
    }

    Ok(())
}

async fn exchange(client: &AssistantClient, backend: Option<&BackendClient>, message: &str) {
    let response = client.ask(message).await;
    println!("🤖 {}", response);

    if let Some(backend) = backend {
        backend.record_chat(message, &response).await;
    }
}

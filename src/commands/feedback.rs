//! Feedback submission command.
//!
//! Collects a rating, category and message, validates them, and submits
//! the result to the hosted backend. Validation failures surface before
//! anything is sent; a backend failure is reported but never fatal.

use crate::{
    api::{
        backend::{Feedback, FeedbackCategory},
        BackendClient,
    },
    libs::{config::Config, messages::Message},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct FeedbackArgs {
    /// Rating from 1 to 5
    #[arg(short, long)]
    rating: Option<u8>,

    /// Feedback message
    #[arg(short, long)]
    message: Option<String>,
}

pub async fn cmd(args: FeedbackArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(backend) = BackendClient::from_config(&config) else {
        msg_info!(Message::BackendNotConfigured);
        return Ok(());
    };

    let rating_range_msg = Message::FeedbackRatingRange.to_string();
    let rating: u8 = match args.rating {
        Some(r) => r,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFeedbackRating.to_string())
            .validate_with(|input: &u8| -> Result<(), &str> {
                if (1..=5).contains(input) {
                    Ok(())
                } else {
                    Err(&rating_range_msg)
                }
            })
            .interact_text()?,
    };

    let categories = FeedbackCategory::all();
    let category_index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptFeedbackCategory.to_string())
        .items(&categories.iter().map(|c| c.label()).collect::<Vec<_>>())
        .default(2)
        .interact()?;

    let message: String = match args.message {
        Some(m) => m,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptFeedbackMessage.to_string())
            .interact_text()?,
    };

    let feedback = match Feedback::new(rating, categories[category_index], &message) {
        Ok(f) => f,
        Err(e) => {
            msg_error!(e);
            return Ok(());
        }
    };

    match backend.submit_feedback(&feedback).await {
        Ok(()) => msg_success!(Message::FeedbackSubmitted),
        Err(e) => msg_error!(Message::FeedbackSubmitFailed(e.to_string())),
    }

    Ok(())
}

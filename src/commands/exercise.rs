//! Guided exercise command.
//!
//! Lists the catalog or walks through one exercise step by step. Completing
//! the final step records the exercise locally and forwards it to the
//! hosted backend as a fire-and-forget write.

use crate::{
    api::BackendClient,
    db::activities::Activities,
    libs::{
        config::Config,
        exercise::{self, ExerciseCategory, ExerciseSession},
        messages::Message,
        stats::ActivityKind,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Args)]
pub struct ExerciseArgs {
    /// Exercise id to run (lists the catalog when omitted)
    id: Option<String>,

    /// Filter the catalog by category (eye, stretch, posture, breathing)
    #[arg(short, long)]
    category: Option<String>,

    /// Run the selected exercise interactively
    #[arg(short, long)]
    run: bool,
}

pub async fn cmd(args: ExerciseArgs) -> Result<()> {
    let filtered: Vec<&exercise::Exercise> = match &args.category {
        Some(raw) => match ExerciseCategory::parse(raw) {
            Some(category) => exercise::by_category(category),
            None => {
                msg_error!(Message::NoExercisesInCategory(raw.clone()));
                return Ok(());
            }
        },
        None => exercise::CATALOG.iter().collect(),
    };

    if let Some(id) = &args.id {
        let Some(found) = exercise::find(id) else {
            msg_error!(Message::ExerciseNotFound(id.clone()));
            return Ok(());
        };
        return run_exercise(found).await;
    }

    if filtered.is_empty() {
        msg_info!(Message::NoExercisesInCategory(args.category.unwrap_or_default()));
        return Ok(());
    }

    if args.run {
        let names: Vec<&str> = filtered.iter().map(|e| e.name).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectExercise.to_string())
            .items(&names)
            .interact()?;
        return run_exercise(filtered[selection]).await;
    }

    msg_print!(Message::ExerciseListHeader, true);
    View::exercises(&filtered)?;
    Ok(())
}

/// Walks through the exercise step by step and records the completion.
async fn run_exercise(found: &'static exercise::Exercise) -> Result<()> {
    msg_print!(Message::ExerciseStarted(found.name.to_string()), true);

    let mut session = ExerciseSession::start(found);
    loop {
        msg_info!(Message::ExerciseStep(session.current_step() + 1, found.steps.len()));
        println!("  {}", session.step_text());

        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNextStep.to_string())
            .default(true)
            .interact()?;

        if !proceed {
            msg_info!(Message::ExerciseStopped);
            return Ok(());
        }

        if session.next_step() {
            break;
        }
    }

    msg_success!(Message::ExerciseCompleted(found.name.to_string()));
    record_completion(found).await;
    Ok(())
}

/// Records the completed exercise locally and forwards it to the backend.
/// Neither write may fail the command.
async fn record_completion(found: &exercise::Exercise) {
    match Activities::new() {
        Ok(mut activities) => {
            if let Err(e) = activities.insert(ActivityKind::Exercise, None, Some(found.duration as i64)) {
                tracing::warn!("failed to record exercise locally: {}", e);
            }
        }
        Err(e) => tracing::warn!("failed to open activity log: {}", e),
    }

    if let Ok(config) = Config::read() {
        if let Some(backend) = BackendClient::from_config(&config) {
            backend.record_activity(ActivityKind::Exercise, None, Some(found.duration as i64)).await;
        }
    }
}

//! Reminder template management command.
//!
//! Templates are the stored definitions the engine spawns countdowns from.
//! Editing or deleting a template never touches countdowns that are
//! already running in a watch session.

use crate::{
    db::templates::{ReminderTemplate, Templates},
    libs::{
        messages::Message,
        reminder::{Priority, ReminderKind},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct ReminderArgs {
    #[command(subcommand)]
    command: Option<ReminderCommand>,
}

#[derive(Debug, Subcommand)]
enum ReminderCommand {
    /// Create a new reminder template
    Create {
        /// Template name (unique identifier)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List all reminder templates
    List,
    /// Edit an existing reminder template
    Edit {
        /// Template name to edit
        name: Option<String>,
    },
    /// Delete a reminder template
    Delete {
        /// Template name to delete
        name: Option<String>,
    },
}

pub fn cmd(args: ReminderArgs) -> Result<()> {
    match args.command {
        Some(ReminderCommand::Create { name }) => handle_create(name),
        Some(ReminderCommand::List) => handle_list(),
        Some(ReminderCommand::Edit { name }) => handle_edit(name),
        Some(ReminderCommand::Delete { name }) => handle_delete(name),
        None => handle_interactive(),
    }
}

fn handle_create(name: Option<String>) -> Result<()> {
    let mut templates_db = Templates::new()?;

    let name = name.unwrap_or_else(|| {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTemplateName.to_string())
            .interact_text()
            .unwrap()
    });

    // Check if template already exists
    if templates_db.exists(&name)? {
        msg_error!(Message::TemplateAlreadyExists(name));
        return Ok(());
    }

    let template = prompt_template_fields(&name, None)?;
    templates_db.create(&template)?;

    msg_success!(Message::TemplateCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut templates_db = Templates::new()?;
    let templates = templates_db.list()?;

    if templates.is_empty() {
        msg_info!(Message::NoTemplatesFound);
        return Ok(());
    }

    msg_print!(Message::TemplateListHeader, true);
    View::templates(&templates)?;
    Ok(())
}

fn handle_edit(name: Option<String>) -> Result<()> {
    let mut templates_db = Templates::new()?;

    let name = match name {
        Some(n) => n,
        None => match select_template(&mut templates_db, Message::SelectTemplateToEdit)? {
            Some(n) => n,
            None => return Ok(()),
        },
    };

    let template = match templates_db.get(&name)? {
        Some(t) => t,
        None => {
            msg_error!(Message::TemplateNotFound(name));
            return Ok(());
        }
    };

    msg_print!(Message::EditingTemplate(template.name.clone()), true);

    let updated = prompt_template_fields(&name, Some(&template))?;
    templates_db.update(&updated)?;

    msg_success!(Message::TemplateUpdated(name));
    Ok(())
}

fn handle_delete(name: Option<String>) -> Result<()> {
    let mut templates_db = Templates::new()?;

    let name = match name {
        Some(n) => n,
        None => match select_template(&mut templates_db, Message::SelectTemplateToDelete)? {
            Some(n) => n,
            None => return Ok(()),
        },
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTemplate(name.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        templates_db.delete(&name)?;
        msg_success!(Message::TemplateDeleted(name));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create new template", "List templates", "Edit template", "Delete template"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectReminderAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_create(None),
        1 => handle_list(),
        2 => handle_edit(None),
        3 => handle_delete(None),
        _ => Ok(()),
    }
}

/// Presents the list of templates and returns the chosen name, or `None`
/// when there are no templates to choose from.
fn select_template(templates_db: &mut Templates, prompt: Message) -> Result<Option<String>> {
    let templates = templates_db.list()?;
    if templates.is_empty() {
        msg_info!(Message::NoTemplatesFound);
        return Ok(None);
    }

    let template_names: Vec<String> = templates.iter().map(|t| t.name.clone()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&template_names)
        .interact()?;

    Ok(Some(template_names[selection].clone()))
}

/// Collects all template fields interactively, pre-filling from an
/// existing template when editing.
fn prompt_template_fields(name: &str, existing: Option<&ReminderTemplate>) -> Result<ReminderTemplate> {
    let kinds = ReminderKind::all();
    let kind_default = existing.map(|t| kinds.iter().position(|k| *k == t.kind).unwrap_or(0)).unwrap_or(0);
    let kind_index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptReminderKind.to_string())
        .items(&kinds.iter().map(|k| k.as_str()).collect::<Vec<_>>())
        .default(kind_default)
        .interact()?;

    let title: String = {
        let theme = ColorfulTheme::default();
        let mut input = Input::with_theme(&theme).with_prompt(Message::PromptReminderTitle.to_string());
        if let Some(t) = existing {
            input = input.default(t.title.clone());
        }
        input.interact_text()?
    };

    let message: String = {
        let theme = ColorfulTheme::default();
        let mut input = Input::with_theme(&theme).with_prompt(Message::PromptReminderMessage.to_string());
        if let Some(t) = existing {
            input = input.default(t.message.clone());
        }
        input.interact_text()?
    };

    let priorities = Priority::all();
    let priority_default = existing
        .map(|t| priorities.iter().position(|p| *p == t.priority).unwrap_or(1))
        .unwrap_or(1);
    let priority_index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptReminderPriority.to_string())
        .items(&priorities.iter().map(|p| p.as_str()).collect::<Vec<_>>())
        .default(priority_default)
        .interact()?;

    let duration_range_msg = Message::ReminderDurationRange.to_string();
    let duration: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptReminderDuration.to_string())
        .default(existing.map(|t| t.duration).unwrap_or(20 * 60))
        .validate_with(|input: &u32| -> Result<(), &str> { if *input > 0 { Ok(()) } else { Err(&duration_range_msg) } })
        .interact_text()?;

    let interval: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptReminderInterval.to_string())
        .default(existing.and_then(|t| t.interval).unwrap_or(0))
        .interact_text()?;

    Ok(ReminderTemplate::new(
        name.to_string(),
        kinds[kind_index],
        title,
        message,
        priorities[priority_index],
        duration,
        if interval == 0 { None } else { Some(interval) },
    ))
}

//! Reminder template storage.
//!
//! Templates are stored definitions that active countdowns are spawned
//! from. Editing or deleting a template never touches countdowns that were
//! already spawned from it - instances carry their own copies of every
//! field. A template with a recurrence interval re-arms by spawning a fresh
//! instance after the previous one finishes.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::reminder::{Priority, ReminderKind, ReminderSpec};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

/// Insert a new template with complete field specification.
const INSERT_TEMPLATE: &str =
    "INSERT INTO reminder_templates (name, kind, title, message, priority, duration, interval_minutes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

/// Update an existing template's content while preserving its name.
const UPDATE_TEMPLATE: &str =
    "UPDATE reminder_templates SET kind = ?2, title = ?3, message = ?4, priority = ?5, duration = ?6, interval_minutes = ?7 WHERE name = ?1";

/// Delete a template record by its unique name.
const DELETE_TEMPLATE: &str = "DELETE FROM reminder_templates WHERE name = ?1";

/// Retrieve all templates ordered alphabetically by name.
const SELECT_ALL_TEMPLATES: &str =
    "SELECT id, name, kind, title, message, priority, duration, interval_minutes, created_at FROM reminder_templates ORDER BY name";

/// Find a specific template by its unique name.
const SELECT_TEMPLATE_BY_NAME: &str =
    "SELECT id, name, kind, title, message, priority, duration, interval_minutes, created_at FROM reminder_templates WHERE name = ?1";

/// A stored reminder definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderTemplate {
    /// Database-assigned unique identifier.
    pub id: Option<i64>,

    /// Unique human-readable name users reference the template by.
    pub name: String,

    pub kind: ReminderKind,

    /// Title and message copied onto every spawned instance.
    pub title: String,
    pub message: String,

    pub priority: Priority,

    /// Countdown duration in seconds for spawned instances.
    pub duration: u32,

    /// Minutes between recurrences; `None` means the template only spawns
    /// on explicit triggers.
    pub interval: Option<u32>,

    pub created_at: Option<String>,
}

impl ReminderTemplate {
    pub fn new(name: String, kind: ReminderKind, title: String, message: String, priority: Priority, duration: u32, interval: Option<u32>) -> Self {
        Self {
            id: None,
            name,
            kind,
            title,
            message,
            priority,
            duration,
            interval,
            created_at: None,
        }
    }

    /// Builds the spec for spawning an active countdown from this template.
    pub fn to_spec(&self) -> ReminderSpec {
        ReminderSpec {
            kind: self.kind,
            title: self.title.clone(),
            message: self.message.clone(),
            priority: self.priority,
            duration: self.duration,
            interval: self.interval,
            template: Some(self.name.clone()),
        }
    }
}

/// Database manager for reminder template operations.
pub struct Templates {
    conn: Connection,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Templates { conn: db.conn })
    }

    /// Creates a new template. Template names must be unique.
    pub fn create(&mut self, template: &ReminderTemplate) -> Result<()> {
        let affected = self.conn.execute(
            INSERT_TEMPLATE,
            params![
                template.name,
                template.kind.as_str(),
                template.title,
                template.message,
                template.priority.as_str(),
                template.duration,
                template.interval,
            ],
        )?;

        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TemplateCreateFailed));
        }

        Ok(())
    }

    /// Updates an existing template. Active countdowns spawned earlier from
    /// it are not affected.
    pub fn update(&mut self, template: &ReminderTemplate) -> Result<()> {
        let affected = self.conn.execute(
            UPDATE_TEMPLATE,
            params![
                template.name,
                template.kind.as_str(),
                template.title,
                template.message,
                template.priority.as_str(),
                template.duration,
                template.interval,
            ],
        )?;

        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TemplateNotFound(template.name.clone())));
        }

        Ok(())
    }

    /// Deletes a template permanently. Instances spawned from it survive.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let affected = self.conn.execute(DELETE_TEMPLATE, params![name])?;

        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TemplateNotFound(name.to_string())));
        }

        Ok(())
    }

    /// Retrieves all templates ordered alphabetically by name.
    pub fn list(&mut self) -> Result<Vec<ReminderTemplate>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TEMPLATES)?;
        let template_iter = stmt.query_map([], Self::map_row)?;

        let mut templates = Vec::new();
        for template in template_iter {
            templates.push(template?);
        }
        Ok(templates)
    }

    /// Finds a template by its exact name.
    pub fn get(&mut self, name: &str) -> Result<Option<ReminderTemplate>> {
        let mut stmt = self.conn.prepare(SELECT_TEMPLATE_BY_NAME)?;
        let mut template_iter = stmt.query_map(params![name], Self::map_row)?;

        match template_iter.next() {
            Some(Ok(template)) => Ok(Some(template)),
            Some(Err(e)) => Err(e.into()),
            None => Ok(None),
        }
    }

    pub fn exists(&mut self, name: &str) -> Result<bool> {
        Ok(self.get(name)?.is_some())
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReminderTemplate> {
        let kind: String = row.get(2)?;
        let priority: String = row.get(5)?;
        Ok(ReminderTemplate {
            id: row.get(0)?,
            name: row.get(1)?,
            kind: ReminderKind::parse(&kind),
            title: row.get(3)?,
            message: row.get(4)?,
            priority: Priority::parse(&priority),
            duration: row.get(6)?,
            interval: row.get(7)?,
            created_at: row.get(8)?,
        })
    }
}

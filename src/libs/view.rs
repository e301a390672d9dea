use super::achievements::AchievementProgress;
use super::exercise::Exercise;
use super::formatter::{format_countdown, format_hours};
use super::notify::Notification;
use super::reminder::ActiveReminder;
use super::stats::DailyStats;
use crate::api::backend::LeaderboardEntry;
use crate::db::templates::ReminderTemplate;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn reminders(reminders: &[ActiveReminder]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "KIND", "TITLE", "PRIORITY", "LEFT", "TOTAL"]);
        for reminder in reminders {
            table.add_row(row![
                reminder.id,
                reminder.kind.as_str(),
                reminder.title,
                reminder.priority.as_str(),
                format_countdown(reminder.remaining),
                format_countdown(reminder.total)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn templates(templates: &[ReminderTemplate]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "KIND", "TITLE", "PRIORITY", "DURATION", "INTERVAL"]);
        for template in templates {
            table.add_row(row![
                template.name,
                template.kind.as_str(),
                template.title,
                template.priority.as_str(),
                format_countdown(template.duration),
                template.interval.map_or("-".to_string(), |m| format!("{} min", m))
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn notifications(notifications: &[Notification]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "CATEGORY", "TITLE", "BODY", "PRIORITY"]);
        for notification in notifications {
            table.add_row(row![
                notification.category.icon(),
                notification.category.label(),
                notification.title,
                notification.body,
                notification.priority.as_str()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &DailyStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SESSIONS", "EXERCISES", "BREAKS", "HOURS"]);
        table.add_row(row![
            stats.sessions_completed,
            stats.exercises_completed,
            stats.breaks_taken,
            format_hours(stats.hours_worked)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn exercises(exercises: &[&Exercise]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CATEGORY", "DIFFICULTY", "DURATION", "STEPS"]);
        for exercise in exercises {
            table.add_row(row![
                exercise.id,
                exercise.name,
                exercise.category.as_str(),
                exercise.difficulty.label(),
                format_countdown(exercise.duration),
                exercise.steps.len()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn achievements(progress: &[AchievementProgress]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "TITLE", "DESCRIPTION", "POINTS", "PROGRESS"]);
        for entry in progress {
            table.add_row(row![
                entry.achievement.icon,
                entry.achievement.title,
                entry.achievement.description,
                entry.achievement.points,
                if entry.earned { "earned".to_string() } else { format!("{:.0}%", entry.progress) }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn leaderboard(entries: &[LeaderboardEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["RANK", "USER", "POINTS"]);
        for (index, entry) in entries.iter().enumerate() {
            table.add_row(row![
                index + 1,
                entry.full_name.clone().unwrap_or_else(|| entry.user_id.clone()),
                entry.points
            ]);
        }
        table.printstd();

        Ok(())
    }
}

//! Daily stats command.
//!
//! Shows today's counters seeded from the local activity log.

use crate::{
    db::activities::Activities,
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut activities = Activities::new()?;
    let today = chrono::Local::now().date_naive();
    let stats = activities.seed_daily_stats(today)?;

    msg_print!(Message::StatsHeader(today.format("%Y-%m-%d").to_string()), true);
    View::stats(&stats)?;
    Ok(())
}

//! Achievements and leaderboard command.
//!
//! Achievement progress is computed locally from recorded activity totals;
//! the cross-user rankings come from the hosted backend and degrade
//! gracefully to local-only output when the backend is unreachable or not
//! configured.

use crate::{
    api::BackendClient,
    db::activities::Activities,
    libs::{
        achievements::{self, ActivityTotals},
        config::Config,
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let mut activities = Activities::new()?;

    let totals = ActivityTotals {
        counts: activities.counts_by_kind()?,
        total_hours: activities.total_session_hours()?,
        streak_days: activities.current_streak()?,
    };

    let progress = achievements::evaluate(&totals);

    msg_print!(Message::AchievementsHeader, true);
    View::achievements(&progress)?;

    let config = Config::read()?;
    let Some(backend) = BackendClient::from_config(&config) else {
        return Ok(());
    };

    match backend.leaderboard().await {
        Ok(entries) if entries.is_empty() => msg_info!(Message::LeaderboardEmpty),
        Ok(entries) => {
            msg_print!(Message::LeaderboardHeader, true);
            View::leaderboard(&entries)?;
        }
        Err(e) => msg_info!(Message::LeaderboardFetchFailed(e.to_string())),
    }

    Ok(())
}

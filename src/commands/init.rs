//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard that guides users through
//! configuring ergomate for first-time use: monitoring cadences, backend
//! credentials and the assistant proxy endpoint.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    // Handle deletion mode - exit early after cleanup
    if init_args.delete {
        let _ = std::fs::remove_file(
            crate::libs::data_storage::DataStorage::new()
                .get_path(crate::libs::config::CONFIG_FILE_NAME)
                .map_err(|e| anyhow::anyhow!(e.to_string()))?,
        );
        return Ok(());
    }

    // Run interactive configuration wizard
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}

//! Background monitoring command.
//!
//! By default detaches a daemon process that runs the wellness engine
//! (reminder countdowns, posture score, idle detection). `--foreground`
//! keeps the engine in the current terminal, `--stop` terminates a running
//! daemon.

use crate::libs::daemon;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Stop the running watcher daemon
    #[arg(long)]
    stop: bool,

    /// Run in the foreground instead of detaching
    #[arg(long)]
    foreground: bool,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }

    if args.foreground {
        return daemon::run_with_signal_handling().await;
    }

    daemon::spawn()
}

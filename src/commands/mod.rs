pub mod assistant;
pub mod exercise;
pub mod feedback;
pub mod init;
pub mod leaderboard;
pub mod reminder;
pub mod stats;
pub mod watch;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the wellness engine (posture score, reminders, idle detection)")]
    Watch(watch::WatchArgs),
    #[command(about = "Manage reminder templates")]
    Reminder(reminder::ReminderArgs),
    #[command(about = "Browse and run guided exercises")]
    Exercise(exercise::ExerciseArgs),
    #[command(about = "Chat with the AI health assistant")]
    Assistant(assistant::AssistantArgs),
    #[command(about = "Submit feedback")]
    Feedback(feedback::FeedbackArgs),
    #[command(about = "Show today's wellness stats")]
    Stats,
    #[command(about = "Show achievements and the leaderboard")]
    Leaderboard,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Reminder(args) => reminder::cmd(args),
            Commands::Exercise(args) => exercise::cmd(args).await,
            Commands::Assistant(args) => assistant::cmd(args).await,
            Commands::Feedback(args) => feedback::cmd(args).await,
            Commands::Stats => stats::cmd(),
            Commands::Leaderboard => leaderboard::cmd().await,
        }
    }
}

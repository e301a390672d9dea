//! # Ergomate - Ergonomics and Wellness Assistant
//!
//! A command-line wellness companion for desk workers: posture-score
//! monitoring, smart break reminders, guided exercises, and an AI
//! health assistant.
//!
//! ## Features
//!
//! - **Posture Monitoring**: Simulated posture score with grade bands and warnings
//! - **Smart Reminders**: Countdown reminders with templates and recurrence
//! - **Idle Detection**: Input-activity tracking with configurable thresholds
//! - **Guided Exercises**: Step-by-step eye, stretch, posture and breathing routines
//! - **Daily Stats & Achievements**: Local counters with gamified milestones
//! - **AI Assistant**: Chat-based health assistant via a hosted proxy
//! - **Feedback**: Structured feedback submission to the hosted backend
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ergomate::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;

use clap::{Parser, Subcommand};

use crate::components::google_calendar::TimeFrame;

/// Personality summaries straight from your Google Calendar
#[derive(Parser)]
#[command(name = "calsona", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch calendar events and print an overview
    Events {
        /// Date range to fetch
        #[arg(long, value_enum, default_value = "1year")]
        time_frame: TimeFrame,
        /// Print the normalized events as JSON instead of the overview
        #[arg(long)]
        json: bool,
    },
    /// Generate a personality summary from calendar events
    Summarize {
        /// Date range to fetch
        #[arg(long, value_enum, default_value = "1year")]
        time_frame: TimeFrame,
        /// Print the outbound payload before requesting the summary
        #[arg(long)]
        show_payload: bool,
    },
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `telepath` - record completed tasks and send them as a standup report.
#[derive(Parser, Debug)]
#[command(name = "telepath")]
#[command(author = "ClifHouck")]
#[command(version)]
#[command(about = "Personal standup-report assistant.", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ~/.telepath.cfg)
    #[arg(long, global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Show diagnostic output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a completed task in the status store
    TaskComplete {
        /// Task description; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        task_body: Vec<String>,
    },

    /// Send all recorded tasks to the standup endpoint
    Report,
}

//! CLI argument parsing for Orchard.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "orchard",
    about = "Count nodes and the edges they imply",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/orchard/logs/orchard.log"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Insert nodes and print a one-line status with the edge count
    Status {
        /// Node ids to insert, in order
        #[arg(allow_negative_numbers = true, default_values_t = [1, 2])]
        ids: Vec<i64>,
    },

    /// Insert nodes, printing the counts after each insertion
    Trace {
        /// Node ids to insert, in order
        #[arg(allow_negative_numbers = true)]
        ids: Vec<i64>,
    },

    /// Insert nodes and print the final counts as JSON
    Snapshot {
        /// Node ids to insert, in order
        #[arg(allow_negative_numbers = true)]
        ids: Vec<i64>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

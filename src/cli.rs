use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "ultrastats dashboard client")]
pub struct Cli {
    /// Backend base URL (overrides ULTRASTATS_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// List all athletes with aggregated career stats
    Athletes,
    /// Show one athlete's profile with per-event performances
    Athlete {
        /// Athlete name as registered with the backend
        name: String,
    },
    /// List events, optionally restricted to one year
    Events {
        /// Only the event held in this year
        #[arg(short, long)]
        year: Option<i32>,
        /// Print dashboard deep links instead of raw JSON
        #[arg(long)]
        links: bool,
    },
    /// Show one event by name and year
    Event {
        /// Event name
        name: String,
        /// Event year
        year: i32,
        /// Fetch graph data instead of event details
        #[arg(long)]
        graph: bool,
    },
    /// Show performance rollups for one year
    Performances {
        /// Event year
        year: i32,
        /// Restrict to one sport
        #[arg(short, long, conflicts_with = "top")]
        sport: Option<String>,
        /// Show only the top N performances
        #[arg(short, long)]
        top: Option<u32>,
    },
    /// Check that the backend is up
    Health,
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

use anyhow::Result;

use ultrastats_client::cli::Command;
use ultrastats_client::config::AppConfig;
use ultrastats_client::{
    handle_athlete, handle_athletes, handle_completions, handle_event, handle_events,
    handle_health, handle_performances, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let config = AppConfig::with_base_url(cli.base_url.as_deref());
    execute_command(&cli.command, config)
}

fn execute_command(command: &Command, config: AppConfig) -> Result<()> {
    match command {
        Command::Athletes => handle_athletes(config),
        Command::Athlete { name } => handle_athlete(config, name),
        Command::Events { year, links } => handle_events(config, *year, *links),
        Command::Event { name, year, graph } => handle_event(config, name, *year, *graph),
        Command::Performances { year, sport, top } => {
            handle_performances(config, *year, sport.as_deref(), *top)
        }
        Command::Health => handle_health(config),
        Command::Completions { shell } => handle_completions(*shell),
    }
}

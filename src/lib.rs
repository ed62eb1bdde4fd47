pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod http;
pub mod router;
pub mod services;
pub mod slug;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::AppConfig;
use crate::services::query::QueryService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_athletes(config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = QueryService::new(&config)?;
        service.list_athletes().await
    })
}

pub fn handle_athlete(config: AppConfig, name: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = QueryService::new(&config)?;
        service.show_athlete(name).await
    })
}

pub fn handle_events(config: AppConfig, year: Option<i32>, links: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = QueryService::new(&config)?;
        service.list_events(year, links).await
    })
}

pub fn handle_event(config: AppConfig, name: &str, year: i32, graph: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = QueryService::new(&config)?;
        service.show_event(name, year, graph).await
    })
}

pub fn handle_performances(
    config: AppConfig,
    year: i32,
    sport: Option<&str>,
    top: Option<u32>,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = QueryService::new(&config)?;
        service.show_performances(year, sport, top).await
    })
}

pub fn handle_health(config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = QueryService::new(&config)?;
        service.check_health().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

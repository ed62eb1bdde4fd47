use anyhow::{Context, Result};
use colored::Colorize;
use log::{info, warn};
use serde_json::Value;

use crate::api::events;
use crate::api::models::{AthleteProfile, AthleteStats, PerformanceEntry, TopPerformanceEntry};
use crate::api::{AthletesApi, EventsApi, PerformancesApi, StatusApi};
use crate::config::AppConfig;
use crate::router;
use crate::slug;

/// Runs one query against the backend and renders the result
pub struct QueryService {
    athletes: AthletesApi,
    events: EventsApi,
    performances: PerformancesApi,
    status: StatusApi,
}

impl QueryService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            athletes: AthletesApi::new(&config.api)?,
            events: EventsApi::new(&config.api)?,
            performances: PerformancesApi::new(&config.api)?,
            status: StatusApi::new(&config.api)?,
        })
    }

    pub async fn list_athletes(&self) -> Result<()> {
        let athletes = self.athletes.fetch_all().await?;
        info!("Fetched {} athletes", athletes.len());

        for athlete in &athletes {
            self.render_athlete_row(athlete);
        }
        Ok(())
    }

    pub async fn show_athlete(&self, name: &str) -> Result<()> {
        let profile = self.athletes.fetch_by_name(name).await?;
        self.render_profile(&profile);
        Ok(())
    }

    pub async fn list_events(&self, year: Option<i32>, links: bool) -> Result<()> {
        let payload = match year {
            Some(year) => self.events.fetch_by_year(year).await?,
            None => self.events.fetch_all().await?,
        };

        if let Some(message) = events::error_message(&payload) {
            self.render_backend_error(message);
            return Ok(());
        }

        if links {
            self.render_event_links(&payload);
            return Ok(());
        }
        print_json(&payload)
    }

    pub async fn show_event(&self, name: &str, year: i32, graph: bool) -> Result<()> {
        let payload = if graph {
            self.events.fetch_graph_data(name, year).await?
        } else {
            self.events.fetch_by_name_and_year(name, year).await?
        };

        if let Some(message) = events::error_message(&payload) {
            self.render_backend_error(message);
            return Ok(());
        }
        print_json(&payload)
    }

    pub async fn show_performances(
        &self,
        year: i32,
        sport: Option<&str>,
        top: Option<u32>,
    ) -> Result<()> {
        if let Some(count) = top {
            let rollup = self.performances.fetch_top(year, count).await?;
            info!("Top {} performances for {}", rollup.top_count, rollup.year);
            for entry in &rollup.performances {
                self.render_top_entry(entry);
            }
            return Ok(());
        }

        if let Some(sport) = sport {
            let rollup = self.performances.fetch_by_sport(year, sport).await?;
            info!("{} {} performances for {}", rollup.count, rollup.sport, rollup.year);
            for entry in &rollup.performances {
                self.render_entry(entry);
            }
            return Ok(());
        }

        let rollup = self.performances.fetch_by_year(year).await?;
        info!("{} performances for {}", rollup.performances.len(), rollup.year);
        for entry in &rollup.performances {
            self.render_entry(entry);
        }
        Ok(())
    }

    pub async fn check_health(&self) -> Result<()> {
        let about = self.status.fetch_status().await?;
        let health = self.status.fetch_health().await?;

        let state = if health.status == "healthy" {
            health.status.green()
        } else {
            health.status.yellow()
        };
        println!("{} {}: {}", about.message.bold(), about.version, state);
        Ok(())
    }

    // --- Rendering ---

    fn render_athlete_row(&self, athlete: &AthleteStats) {
        let tag = if athlete.team { " [team]" } else { "" };
        println!(
            "{}{}  {} events  {:.2} mi  {}",
            athlete.name.bold(),
            tag.cyan(),
            athlete.event_count,
            athlete.total_miles,
            athlete.sports.join(", ").dimmed()
        );
    }

    fn render_profile(&self, profile: &AthleteProfile) {
        let tag = if profile.team { " [team]" } else { "" };
        println!("{}{}", profile.name.bold(), tag.cyan());
        println!(
            "{}, {}, {} ({})",
            profile.city, profile.state, profile.country, profile.gender
        );
        println!(
            "{} events, {:.2} mi / {:.2} km",
            profile.event_count, profile.total_miles, profile.total_km
        );

        for performance in &profile.performances {
            println!(
                "  {}  {}  {}  {} laps  {:.2} mi  {}",
                performance.year,
                performance.event_name,
                performance.sport,
                performance.total_laps,
                performance.total_miles,
                performance.total_time_hhmmss
            );
        }
    }

    /// Print one dashboard deep link per event, query-parameter style
    fn render_event_links(&self, payload: &Value) {
        let Some(event_list) = payload.as_array() else {
            warn!("Expected an event list, got a non-array payload");
            return;
        };

        let path = router::find_by_name("EventGrid")
            .map(|route| route.path)
            .unwrap_or("/event");

        for event in event_list {
            match slug::event_slug(event) {
                Some(slug) => println!("{}?event={}", path, slug),
                None => warn!("Event without usable name/date: {}", event),
            }
        }
    }

    fn render_entry(&self, entry: &PerformanceEntry) {
        println!(
            "{}  {}  {} laps  {:.2} mi  {}  {:.2} kph",
            entry.athlete.name.bold(),
            entry.sport,
            entry.total_laps,
            entry.total_miles,
            entry.total_time,
            entry.average_speed_kph
        );
    }

    fn render_top_entry(&self, entry: &TopPerformanceEntry) {
        println!(
            "{:>3}. {}  {}  {} laps  {:.2} mi  {}",
            entry.position,
            entry.athlete.name.bold(),
            entry.sport,
            entry.total_laps,
            entry.total_miles,
            entry.total_time
        );
    }

    fn render_backend_error(&self, message: &str) {
        println!("{} {}", "Backend error:".red().bold(), message);
    }
}

fn print_json(payload: &Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(payload).context("Failed to render JSON payload")?;
    println!("{}", pretty);
    Ok(())
}

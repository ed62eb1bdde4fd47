use anyhow::Result;
use log::debug;

use crate::api::models::{SportPerformances, TopPerformances, YearPerformances};
use crate::config::ApiSettings;
use crate::http::HttpClient;

/// Client for the `/performances` rollup endpoints
pub struct PerformancesApi {
    http: HttpClient,
    base_url: String,
}

impl PerformancesApi {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
        })
    }

    /// Fetch every performance recorded for one year's event
    pub async fn fetch_by_year(&self, year: i32) -> Result<YearPerformances> {
        let url = build_year_url(&self.base_url, year);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }

    /// Fetch one year's performances restricted to a sport
    pub async fn fetch_by_sport(&self, year: i32, sport: &str) -> Result<SportPerformances> {
        let url = build_sport_url(&self.base_url, year, sport);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }

    /// Fetch the top N performances for one year
    pub async fn fetch_top(&self, year: i32, count: u32) -> Result<TopPerformances> {
        let url = build_top_url(&self.base_url, year, count);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }
}

// --- URL Building ---

fn build_year_url(base_url: &str, year: i32) -> String {
    format!("{}/performances/year/{}", base_url, year)
}

/// Sport labels contain spaces ("Paddle Push"), so the segment is
/// percent-encoded.
fn build_sport_url(base_url: &str, year: i32, sport: &str) -> String {
    format!(
        "{}/sport/{}",
        build_year_url(base_url, year),
        urlencoding::encode(sport)
    )
}

fn build_top_url(base_url: &str, year: i32, count: u32) -> String {
    format!("{}/top/{}", build_year_url(base_url, year), count)
}

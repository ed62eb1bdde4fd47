use anyhow::Result;
use log::debug;

use crate::api::models::{AthleteProfile, AthleteStats};
use crate::config::ApiSettings;
use crate::http::HttpClient;

/// Client for the `/athletes` endpoints
pub struct AthletesApi {
    http: HttpClient,
    base_url: String,
}

impl AthletesApi {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
        })
    }

    /// Fetch every athlete with aggregated career stats
    pub async fn fetch_all(&self) -> Result<Vec<AthleteStats>> {
        let url = build_list_url(&self.base_url);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }

    /// Fetch one athlete's profile with per-event performances
    pub async fn fetch_by_name(&self, name: &str) -> Result<AthleteProfile> {
        let url = build_detail_url(&self.base_url, name);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }
}

// --- URL Building ---

/// The list endpoint keeps its trailing slash; the backend routes
/// `/athletes` and `/athletes/` differently.
fn build_list_url(base_url: &str) -> String {
    format!("{}/athletes/", base_url)
}

/// Athlete names contain spaces and accents, so the path segment is
/// percent-encoded.
fn build_detail_url(base_url: &str, name: &str) -> String {
    format!("{}/athletes/{}", base_url, urlencoding::encode(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_keeps_trailing_slash() {
        assert_eq!(
            build_list_url("http://localhost:8000"),
            "http://localhost:8000/athletes/"
        );
    }

    #[test]
    fn test_detail_url_percent_encodes_spaces() {
        assert_eq!(
            build_detail_url("http://localhost:8000", "Courtney Dauwalter"),
            "http://localhost:8000/athletes/Courtney%20Dauwalter"
        );
    }

    #[test]
    fn test_detail_url_percent_encodes_non_ascii() {
        assert_eq!(
            build_detail_url("http://localhost:8000", "José Ángel"),
            "http://localhost:8000/athletes/Jos%C3%A9%20%C3%81ngel"
        );
    }
}

use anyhow::Result;
use log::debug;

use crate::api::models::{HealthStatus, ServiceStatus};
use crate::config::ApiSettings;
use crate::http::HttpClient;

/// Client for the service status and health-check endpoints
pub struct StatusApi {
    http: HttpClient,
    base_url: String,
}

impl StatusApi {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
        })
    }

    /// Fetch the root status banner (name, version, online state)
    pub async fn fetch_status(&self) -> Result<ServiceStatus> {
        let url = build_status_url(&self.base_url);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }

    /// Probe the health endpoint
    pub async fn fetch_health(&self) -> Result<HealthStatus> {
        let url = build_health_url(&self.base_url);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }
}

// --- URL Building ---

fn build_status_url(base_url: &str) -> String {
    format!("{}/", base_url)
}

fn build_health_url(base_url: &str) -> String {
    format!("{}/health", base_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_url_is_service_root() {
        assert_eq!(build_status_url("http://localhost:8000"), "http://localhost:8000/");
    }

    #[test]
    fn test_health_url() {
        assert_eq!(
            build_health_url("http://localhost:8000"),
            "http://localhost:8000/health"
        );
    }
}

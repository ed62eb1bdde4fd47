use anyhow::Result;
use log::debug;
use serde_json::Value;

use crate::config::ApiSettings;
use crate::http::HttpClient;

/// Client for the `/events` endpoints.
///
/// Event payloads are backend-shaped and passed through as raw JSON; the
/// views consuming them own their interpretation.
pub struct EventsApi {
    http: HttpClient,
    base_url: String,
}

impl EventsApi {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
        })
    }

    /// Fetch all events (metadata only)
    pub async fn fetch_all(&self) -> Result<Value> {
        let url = build_list_url(&self.base_url);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }

    /// Fetch the event held in a given year
    pub async fn fetch_by_year(&self, year: i32) -> Result<Value> {
        let url = build_year_url(&self.base_url, year);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }

    /// Fetch one event by name and year
    pub async fn fetch_by_name_and_year(&self, name: &str, year: i32) -> Result<Value> {
        let url = build_event_url(&self.base_url, name, year);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }

    /// Fetch chart-ready graph data for one event
    pub async fn fetch_graph_data(&self, name: &str, year: i32) -> Result<Value> {
        let url = build_graph_url(&self.base_url, name, year);
        debug!("GET {}", url);
        self.http.get_json(&url).await
    }
}

/// The backend reports a missing event as `{"error": "..."}` with a 200
/// status. Returns the message when `payload` is such an object.
pub fn error_message(payload: &Value) -> Option<&str> {
    payload.get("error")?.as_str()
}

// --- URL Building ---

fn build_list_url(base_url: &str) -> String {
    format!("{}/events", base_url)
}

fn build_year_url(base_url: &str, year: i32) -> String {
    format!("{}/events/{}", base_url, year)
}

/// Event names are percent-encoded the same way athlete names are.
fn build_event_url(base_url: &str, name: &str, year: i32) -> String {
    format!("{}/events/{}/{}", base_url, urlencoding::encode(name), year)
}

fn build_graph_url(base_url: &str, name: &str, year: i32) -> String {
    format!("{}/graph", build_event_url(base_url, name, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_url_has_no_trailing_slash() {
        assert_eq!(
            build_list_url("http://localhost:8000"),
            "http://localhost:8000/events"
        );
    }

    #[test]
    fn test_year_url() {
        assert_eq!(
            build_year_url("http://localhost:8000", 2024),
            "http://localhost:8000/events/2024"
        );
    }

    #[test]
    fn test_event_url_percent_encodes_name() {
        assert_eq!(
            build_event_url("http://localhost:8000", "Big Dog Backyard", 2023),
            "http://localhost:8000/events/Big%20Dog%20Backyard/2023"
        );
    }

    #[test]
    fn test_graph_url_appends_subpath() {
        assert_eq!(
            build_graph_url("http://localhost:8000", "homestead", 2024),
            "http://localhost:8000/events/homestead/2024/graph"
        );
    }

    #[test]
    fn test_error_message_detects_error_object() {
        let payload = json!({"error": "Event not found for city 'homestead', year 2031"});
        assert_eq!(
            error_message(&payload),
            Some("Event not found for city 'homestead', year 2031")
        );
    }

    #[test]
    fn test_error_message_ignores_regular_payloads() {
        assert_eq!(error_message(&json!([{"name": "homestead"}])), None);
        assert_eq!(error_message(&json!({"name": "homestead"})), None);
    }
}

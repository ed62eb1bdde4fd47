use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors;

/// Plain HTTP client: one GET per operation, no retries, no backoff.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| errors::fetch_context(url))
    }

    /// Fetch and decode in one step. The body is decoded unconditionally:
    /// status codes are not inspected, so an error response carrying a JSON
    /// body comes back as data and a non-JSON body fails decoding.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url).await?;
        response
            .json::<T>()
            .await
            .with_context(|| errors::parse_context(url))
    }

    fn build_client(user_agent: &str, timeout_secs: Option<u64>) -> Result<Client> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("Failed to build HTTP client")
    }
}

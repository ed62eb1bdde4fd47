/// Default backend origin; deployments override it via `--base-url` or env.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable consulted when no `--base-url` flag is given.
pub const ENV_BASE_URL: &str = "ULTRASTATS_API_URL";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    /// No timeout by default; callers inherit the environment default.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: base_url_from_env(),
            user_agent: "UltrastatsClient/0.1",
            timeout_secs: None,
        }
    }
}

impl ApiSettings {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the config once at startup, applying an optional flag override.
    pub fn with_base_url(base_url: Option<&str>) -> Self {
        match base_url {
            Some(url) => Self {
                api: ApiSettings::default().with_base_url(url),
            },
            None => Self::new(),
        }
    }
}

fn base_url_from_env() -> String {
    std::env::var(ENV_BASE_URL)
        .map(|url| normalize_base_url(&url))
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Trim trailing slashes so path joining stays predictable.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

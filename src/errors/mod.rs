/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to decode errors
pub fn parse_context(url: &str) -> String {
    format!("Failed to parse response from: {}", url)
}

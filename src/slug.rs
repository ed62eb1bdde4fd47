//! Event slug derivation for client-side deep links.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Convert an event's name and date to a URL-friendly token: `name_year`.
///
/// The name is lowercased and every ASCII space becomes a hyphen; nothing is
/// collapsed or stripped, so consecutive spaces yield consecutive hyphens.
/// Date-only strings are read at face value; timestamps carrying an offset
/// are evaluated in UTC. Slugs are a client-side convention only; the
/// backend has no notion of them, and they are not parsed back.
pub fn to_slug(name: &str, date: &str) -> Result<String> {
    let normalized = name.to_lowercase().replace(' ', "-");
    let year = extract_year(date)?;
    Ok(format!("{}_{}", normalized, year))
}

/// Derive a slug from an opaque event payload carrying string `name` and
/// `date` fields. Returns `None` when either field is missing or the date
/// does not parse.
pub fn event_slug(event: &Value) -> Option<String> {
    let name = event.get("name")?.as_str()?;
    let date = event.get("date")?.as_str()?;
    to_slug(name, date).ok()
}

// --- Year Extraction ---

fn extract_year(date: &str) -> Result<i32> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return Ok(timestamp.with_timezone(&Utc).year());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
        return Ok(timestamp.year());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|day| day.year())
        .with_context(|| format!("Unrecognized event date: {}", date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slug_from_normalized_name() {
        assert_eq!(to_slug("homestead", "2024-03-15").unwrap(), "homestead_2024");
    }

    #[test]
    fn test_slug_lowercases_and_hyphenates_spaces() {
        assert_eq!(
            to_slug("Big Dog Backyard", "2023-10-21").unwrap(),
            "big-dog-backyard_2023"
        );
    }

    #[test]
    fn test_slug_keeps_consecutive_hyphens() {
        assert_eq!(to_slug("Big  Dog", "2023-10-21").unwrap(), "big--dog_2023");
    }

    #[test]
    fn test_slug_year_from_utc_timestamp() {
        assert_eq!(to_slug("X", "2022-01-01T00:00:00Z").unwrap(), "x_2022");
    }

    #[test]
    fn test_slug_year_from_naive_timestamp() {
        assert_eq!(to_slug("X", "2022-01-01T00:00:00").unwrap(), "x_2022");
    }

    #[test]
    fn test_slug_rejects_unparseable_date() {
        assert!(to_slug("homestead", "next spring").is_err());
    }

    #[test]
    fn test_event_slug_from_payload() {
        let event = json!({"name": "Miami Ultraskate", "date": "2024-02-16"});
        assert_eq!(event_slug(&event).unwrap(), "miami-ultraskate_2024");
    }

    #[test]
    fn test_event_slug_missing_fields() {
        assert!(event_slug(&json!({"name": "Miami Ultraskate"})).is_none());
        assert!(event_slug(&json!({"date": "2024-02-16"})).is_none());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One athlete grid row with aggregated career stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteStats {
    pub name: String,
    pub gender: String,
    pub city: String,
    pub state: String,
    pub country: String,
    /// Whether the entry is a relay team rather than an individual
    pub team: bool,
    pub event_count: u32,
    pub total_miles: f64,
    pub best_event_miles: f64,
    /// May be empty for athletes with no recorded performances
    pub sports: Vec<String>,
}

/// One row per event an athlete competed in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthletePerformance {
    pub event_name: String,
    pub date: NaiveDate,
    pub year: i32,
    pub sport: String,
    pub category: String,
    /// Zero-padded HH:MM:SS
    pub total_time_hhmmss: String,
    pub total_laps: u32,
    pub total_miles: f64,
    pub total_km: f64,
    pub average_speed_mph: f64,
    pub average_speed_kph: f64,
}

/// Athlete detail view: identity plus every recorded performance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub name: String,
    pub gender: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub team: bool,
    pub event_count: u32,
    pub total_miles: f64,
    pub total_km: f64,
    /// Order is backend-defined
    pub performances: Vec<AthletePerformance>,
}

/// Athlete identity as embedded in performance rollups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteRef {
    pub name: String,
    pub gender: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceEntry {
    pub athlete: AthleteRef,
    pub category: String,
    pub age_group: String,
    pub sport: String,
    pub total_miles: f64,
    pub total_laps: u32,
    pub total_time: String,
    pub average_speed_kph: f64,
}

/// All performances recorded for one year's event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearPerformances {
    pub year: i32,
    /// Track metadata, backend-shaped
    pub track: Value,
    pub performances: Vec<PerformanceEntry>,
}

/// Performances for one year filtered by sport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportPerformances {
    pub year: i32,
    pub sport: String,
    pub count: usize,
    pub performances: Vec<PerformanceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPerformanceEntry {
    /// 1-based ranking position
    pub position: u32,
    pub athlete: AthleteRef,
    pub category: String,
    pub age_group: String,
    pub sport: String,
    pub total_miles: f64,
    pub total_laps: u32,
    pub total_time: String,
    pub average_speed_kph: f64,
}

/// Top N performances for one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPerformances {
    pub year: i32,
    pub top_count: u32,
    pub performances: Vec<TopPerformanceEntry>,
}

/// Root endpoint payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
    pub version: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_athlete_stats_decodes_grid_row() {
        let json = r#"{
            "name": "Courtney Dauwalter",
            "gender": "F",
            "city": "Leadville",
            "state": "CO",
            "country": "USA",
            "team": false,
            "event_count": 3,
            "total_miles": 612.5,
            "best_event_miles": 283.3,
            "sports": ["Skateboard", "Paddle"]
        }"#;

        let stats: AthleteStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.name, "Courtney Dauwalter");
        assert!(!stats.team);
        assert_eq!(stats.event_count, 3);
        assert_eq!(stats.sports.len(), 2);
    }

    #[test]
    fn test_athlete_stats_allows_empty_sports() {
        let json = r#"{
            "name": "Team Rollers",
            "gender": "",
            "city": "",
            "state": "",
            "country": "",
            "team": true,
            "event_count": 0,
            "total_miles": 0.0,
            "best_event_miles": 0.0,
            "sports": []
        }"#;

        let stats: AthleteStats = serde_json::from_str(json).unwrap();
        assert!(stats.team);
        assert!(stats.sports.is_empty());
    }

    #[test]
    fn test_athlete_profile_decodes_performances() {
        let json = r#"{
            "name": "Joe Mazzone",
            "gender": "M",
            "city": "Homestead",
            "state": "FL",
            "country": "USA",
            "team": false,
            "event_count": 1,
            "total_miles": 187.2,
            "total_km": 301.3,
            "performances": [{
                "event_name": "Miami Ultraskate",
                "date": "2024-02-16",
                "year": 2024,
                "sport": "Skateboard",
                "category": "24 Hour",
                "total_time_hhmmss": "23:41:05",
                "total_laps": 132,
                "total_miles": 187.2,
                "total_km": 301.3,
                "average_speed_mph": 7.9,
                "average_speed_kph": 12.7
            }]
        }"#;

        let profile: AthleteProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.performances.len(), 1);
        let performance = &profile.performances[0];
        assert_eq!(performance.year, 2024);
        assert_eq!(performance.date.to_string(), "2024-02-16");
        assert_eq!(performance.total_time_hhmmss, "23:41:05");
    }

    #[test]
    fn test_year_performances_keeps_track_opaque() {
        let json = r#"{
            "year": 2023,
            "track": {"name": "Homestead Speedway", "length_miles": 1.418},
            "performances": [{
                "athlete": {
                    "name": "Andy Andras",
                    "gender": "M",
                    "city": "Miami",
                    "state": "FL",
                    "country": "USA"
                },
                "category": "24 Hour",
                "age_group": "",
                "sport": "Skateboard",
                "total_miles": 309.1,
                "total_laps": 218,
                "total_time": "23:58:12",
                "average_speed_kph": 20.7
            }]
        }"#;

        let rollup: YearPerformances = serde_json::from_str(json).unwrap();
        assert_eq!(rollup.year, 2023);
        assert_eq!(rollup.track["length_miles"], 1.418);
        assert_eq!(rollup.performances[0].athlete.name, "Andy Andras");
    }
}

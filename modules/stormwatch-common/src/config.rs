use std::env;

/// The national CAP alert feed (all US alerts, unfiltered).
pub const NATIONAL_FEED_URL: &str = "https://alerts.weather.gov/cap/us.php?x=0";

/// Rendering chosen for the report sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
/// Every knob has a default; only malformed values panic.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub zones_path: String,
    pub counties_path: String,
    pub report_format: ReportFormat,
    /// When set, re-scan the feed on this interval; otherwise run once.
    pub poll_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        let report_format = match env::var("STORMWATCH_REPORT_FORMAT")
            .unwrap_or_else(|_| "text".to_string())
            .as_str()
        {
            "text" => ReportFormat::Text,
            "json" => ReportFormat::Json,
            other => panic!("STORMWATCH_REPORT_FORMAT must be 'text' or 'json', got '{other}'"),
        };

        Self {
            feed_url: env::var("STORMWATCH_FEED_URL")
                .unwrap_or_else(|_| NATIONAL_FEED_URL.to_string()),
            zones_path: env::var("STORMWATCH_ZONES_PATH")
                .unwrap_or_else(|_| "data/zones.csv".to_string()),
            counties_path: env::var("STORMWATCH_COUNTIES_PATH")
                .unwrap_or_else(|_| "data/counties.csv".to_string()),
            report_format,
            poll_secs: env::var("STORMWATCH_POLL_SECS").ok().map(|v| {
                v.parse()
                    .expect("STORMWATCH_POLL_SECS must be a number of seconds")
            }),
        }
    }
}

//! Runtime settings
//!
//! Layered: built-in defaults, then environment, then CLI flags.
//!
//! Environment variables:
//!   WEATHER_ALERTS_API_URL      - Base URL the state code is appended to
//!   WEATHER_ALERTS_USER_AGENT   - User-Agent sent with every request
//!   WEATHER_ALERTS_TIMEOUT_SECS - Per-request timeout (unset = wait forever)
//!   WEATHER_ALERTS_STRICT_CODES - Only accept codes from the state table
//!   WEATHER_ALERTS_DROP_STALE   - Ignore responses to superseded submissions

use std::time::Duration;
use tracing::warn;

use crate::controller::SubmissionOrdering;

pub const DEFAULT_API_URL: &str = "https://api.weather.gov/alerts/active?area=";
pub const DEFAULT_USER_AGENT: &str = concat!("weather_alerts/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_url: String,
    pub user_agent: String,
    pub request_timeout: Option<Duration>,
    pub strict_codes: bool,
    pub ordering: SubmissionOrdering,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: None,
            strict_codes: false,
            ordering: SubmissionOrdering::ArrivalOrder,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(v) = lookup("WEATHER_ALERTS_API_URL") {
            settings.api_url = v;
        }
        if let Some(v) = lookup("WEATHER_ALERTS_USER_AGENT") {
            settings.user_agent = v;
        }
        if let Some(v) = lookup("WEATHER_ALERTS_TIMEOUT_SECS") {
            match v.trim().parse::<u64>() {
                Ok(secs) => settings.request_timeout = Some(Duration::from_secs(secs)),
                Err(_) => warn!(value = %v, "ignoring unparseable WEATHER_ALERTS_TIMEOUT_SECS"),
            }
        }
        if let Some(v) = lookup("WEATHER_ALERTS_STRICT_CODES") {
            match parse_flag(&v) {
                Some(flag) => settings.strict_codes = flag,
                None => warn!(value = %v, "ignoring unparseable WEATHER_ALERTS_STRICT_CODES"),
            }
        }
        if let Some(v) = lookup("WEATHER_ALERTS_DROP_STALE") {
            match parse_flag(&v) {
                Some(true) => settings.ordering = SubmissionOrdering::LatestSubmission,
                Some(false) => settings.ordering = SubmissionOrdering::ArrivalOrder,
                None => warn!(value = %v, "ignoring unparseable WEATHER_ALERTS_DROP_STALE"),
            }
        }

        settings
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_url, "https://api.weather.gov/alerts/active?area=");
        assert!(settings.request_timeout.is_none());
        assert!(!settings.strict_codes);
        assert_eq!(settings.ordering, SubmissionOrdering::ArrivalOrder);
    }

    #[test]
    fn test_env_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("WEATHER_ALERTS_API_URL", "http://127.0.0.1:9000/alerts?area="),
            ("WEATHER_ALERTS_USER_AGENT", "test-agent"),
            ("WEATHER_ALERTS_TIMEOUT_SECS", "5"),
            ("WEATHER_ALERTS_STRICT_CODES", "yes"),
            ("WEATHER_ALERTS_DROP_STALE", "1"),
        ]));
        assert_eq!(settings.api_url, "http://127.0.0.1:9000/alerts?area=");
        assert_eq!(settings.user_agent, "test-agent");
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(5)));
        assert!(settings.strict_codes);
        assert_eq!(settings.ordering, SubmissionOrdering::LatestSubmission);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("WEATHER_ALERTS_TIMEOUT_SECS", "soon"),
            ("WEATHER_ALERTS_STRICT_CODES", "maybe"),
        ]));
        assert!(settings.request_timeout.is_none());
        assert!(!settings.strict_codes);
    }
}

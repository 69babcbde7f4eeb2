//! Run configuration: credential, endpoint, page-size cap and output locations.
//!
//! Built once at process start (usually via [`Config::from_env`]) and passed by
//! reference into the client and the aggregator. Nothing mutates it afterwards.

use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the YouTube Data API (v3).
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Upper bound the search endpoint accepts for `maxResults`.
pub const MAX_RESULTS_CAP: u32 = 50;

/// Fixed relative path of the rendered document.
pub const DEFAULT_REPORT_PATH: &str = "output.md";

/// Fixed relative path of the ratio chart.
pub const DEFAULT_CHART_PATH: &str = "likes_to_views_ratio.png";

pub const ENV_API_KEY: &str = "YOUTUBE_API_KEY";
pub const ENV_BASE_URL: &str = "YOUTUBE_API_URL";
pub const ENV_MAX_RESULTS: &str = "YOUTUBE_MAX_RESULTS";

/// Where the run writes its artifacts. Both are overwritten on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub report: PathBuf,
    pub chart: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            report: PathBuf::from(DEFAULT_REPORT_PATH),
            chart: PathBuf::from(DEFAULT_CHART_PATH),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// Listing page size, always within `1..=MAX_RESULTS_CAP`.
    pub max_results: u32,
    /// Trend window in days. Not used by any computation yet.
    pub trend_analysis_period_days: u32,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub output: OutputPaths,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Config {
    /// Defaults for everything except the credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            max_results: MAX_RESULTS_CAP,
            trend_analysis_period_days: 30,
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            output: OutputPaths::default(),
            chart_width: 1000,
            chart_height: 600,
        }
    }

    /// Load from `YOUTUBE_API_KEY` (required), `YOUTUBE_API_URL` and
    /// `YOUTUBE_MAX_RESULTS` (both optional).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut cfg = Self::new(api_key);

        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            cfg = cfg.with_base_url(url.trim());
        }
        if let Some(raw) = lookup(ENV_MAX_RESULTS).filter(|v| !v.trim().is_empty()) {
            let n = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidMaxResults(raw.clone()))?;
            cfg = cfg.with_max_results(n);
        }
        Ok(cfg)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the listing page size, clamped into `1..=MAX_RESULTS_CAP`.
    pub fn with_max_results(mut self, n: u32) -> Self {
        self.max_results = n.clamp(1, MAX_RESULTS_CAP);
        self
    }

    pub fn with_output(mut self, output: OutputPaths) -> Self {
        self.output = output;
        self
    }

    pub fn with_chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_width = width;
        self.chart_height = height;
        self
    }

    /// Build the URL for `resource` (e.g. `"channels"`) under the base URL.
    /// Tolerates a base with or without a trailing slash.
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), resource)
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_fixed_paths_and_cap() {
        let cfg = Config::new("k");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.max_results, 50);
        assert_eq!(cfg.trend_analysis_period_days, 30);
        assert_eq!(cfg.output.report, PathBuf::from("output.md"));
        assert_eq!(cfg.output.chart, PathBuf::from("likes_to_views_ratio.png"));
    }

    #[test]
    fn missing_or_blank_key_is_rejected() {
        assert!(matches!(
            Config::from_lookup(lookup_from(&[])),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(ENV_API_KEY, "   ")])),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn env_overrides_and_clamping() {
        let cfg = Config::from_lookup(lookup_from(&[
            (ENV_API_KEY, "secret"),
            (ENV_BASE_URL, "http://localhost:9999/yt"),
            (ENV_MAX_RESULTS, "500"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_key, "secret");
        assert_eq!(cfg.base_url, "http://localhost:9999/yt");
        assert_eq!(cfg.max_results, 50);

        let cfg = Config::new("k").with_max_results(0);
        assert_eq!(cfg.max_results, 1);
    }

    #[test]
    fn non_numeric_max_results_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[
            (ENV_API_KEY, "secret"),
            (ENV_MAX_RESULTS, "lots"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn resource_url_handles_trailing_slash() {
        let a = Config::new("k").with_base_url("http://h/v3/");
        let b = Config::new("k").with_base_url("http://h/v3");
        assert_eq!(a.resource_url("videos"), "http://h/v3/videos");
        assert_eq!(b.resource_url("videos"), "http://h/v3/videos");
    }
}

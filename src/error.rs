//! Error types shared across the crate.

use reqwest::StatusCode;
use thiserror::Error;

/// The three upstream resources this crate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Channels,
    Search,
    Videos,
}

impl Endpoint {
    pub fn resource(self) -> &'static str {
        match self {
            Endpoint::Channels => "channels",
            Endpoint::Search => "search",
            Endpoint::Videos => "videos",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.resource())
    }
}

/// Failure of a single query against the upstream API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response at all (DNS, connect, timeout, ...).
    #[error("{endpoint} request failed: {reason}")]
    Network { endpoint: Endpoint, reason: String },

    /// Response arrived with a non-success status.
    #[error("{endpoint} request returned HTTP {status}")]
    Status {
        endpoint: Endpoint,
        status: StatusCode,
    },

    /// Success status, but the body has no top-level `items` field.
    #[error("{endpoint} response has no `items` field")]
    Malformed { endpoint: Endpoint, body: String },

    /// `items` is present but does not have the expected shape.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    /// `items` is present but empty where one element is required.
    #[error("{endpoint} response contained no items")]
    Empty { endpoint: Endpoint },
}

impl ApiError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            ApiError::Network { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Malformed { endpoint, .. }
            | ApiError::Decode { endpoint, .. }
            | ApiError::Empty { endpoint } => *endpoint,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API key: set the YOUTUBE_API_KEY environment variable")]
    MissingApiKey,

    #[error("invalid YOUTUBE_MAX_RESULTS value `{0}`: expected a whole number")]
    InvalidMaxResults(String),
}

/// Conditions that end a run without writing a report.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("could not fetch channel info for `{channel_id}`")]
    ChannelUnavailable { channel_id: String },

    #[error("no channel found for id `{channel_id}`")]
    ChannelNotFound { channel_id: String },
}

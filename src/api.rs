//! Synchronous client for the **YouTube Data API (v3)**.
//!
//! Three read-only queries are supported: channel metadata (`channels`), a page of
//! a channel's recent uploads (`search`) and per-video statistics (`videos`).
//!
//! ### Notes
//! - Every query carries the API key from [`Config`] as the `key` parameter.
//! - The `fetch_*` methods never fail: a failed query is logged and yields `None`.
//!   Use the `try_*` counterparts to inspect the [`ApiError`].
//! - No retries. Each request is bounded by the configured timeouts.
//! - Log output never contains request URLs because they embed the key.
//!
//! Typical usage:
//! ```no_run
//! # use ytc_rs::{Client, Config};
//! let config = Config::from_env()?;
//! let client = Client::new(&config)?;
//! if let Some(channel) = client.fetch_channel_metadata("UC_x5XG1OV2P6uZZ5FSM9Ttw") {
//!     println!("{} channel(s)", channel.items.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::Config;
use crate::error::{ApiError, Endpoint};
use crate::models::{
    ChannelListResponse, SearchListResponse, SearchResult, VideoListResponse, VideoStatistics,
};
use anyhow::{Context, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Transport seam so the client can run against an in-memory double.
pub trait HttpGet {
    /// Perform a GET request. `Err` means no response was received.
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

impl<T: HttpGet + ?Sized> HttpGet for &T {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url)
    }
}

/// Production transport backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestHttp {
    http: HttpClient,
}

impl ReqwestHttp {
    pub fn new(config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.request_timeout) // total request timeout
            .connect_timeout(config.connect_timeout)
            .redirect(Policy::limited(5))
            .user_agent(concat!("ytc_rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self { http })
    }
}

impl HttpGet for ReqwestHttp {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        let body = resp.text().context("read response body")?;
        Ok(HttpResponse { status, body })
    }
}

// Allow -, _, . unescaped (channel and video ids use these)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string()
}

#[derive(Debug, Clone)]
pub struct Client<'a, H = ReqwestHttp> {
    config: &'a Config,
    http: H,
}

impl<'a> Client<'a, ReqwestHttp> {
    /// Client using the production transport.
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self::with_http(config, ReqwestHttp::new(config)?))
    }
}

impl<'a, H: HttpGet> Client<'a, H> {
    pub fn with_http(config: &'a Config, http: H) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Full request URL for `endpoint` with `params` plus the API key.
    pub fn endpoint_url(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> String {
        let mut url = self.config.resource_url(endpoint.resource());
        url.push('?');
        for (k, v) in params {
            url.push_str(&format!("{}={}&", k, enc(v)));
        }
        url.push_str(&format!("key={}", enc(&self.config.api_key)));
        url
    }

    /// Fetch snippet and statistics for one channel.
    ///
    /// On a non-success status the status is logged; on a success without an
    /// `items` field the full body is logged. Both yield `None`.
    pub fn fetch_channel_metadata(&self, channel_id: &str) -> Option<ChannelListResponse> {
        match self.try_channel_metadata(channel_id) {
            Ok(resp) => Some(resp),
            Err(ApiError::Malformed { endpoint, body }) => {
                log::warn!("no 'items' found in the {endpoint} response. Full response: {body}");
                None
            }
            Err(e) => {
                log::warn!("error fetching channel info: {e}");
                None
            }
        }
    }

    /// Fetch up to `max_results` recent listing entries for a channel.
    /// Entries are returned unfiltered, in upstream order.
    pub fn fetch_item_listing(&self, channel_id: &str, max_results: u32) -> Option<Vec<SearchResult>> {
        self.try_item_listing(channel_id, max_results)
            .map_err(|e| log::warn!("error fetching video details: {e}"))
            .ok()
    }

    /// Fetch statistics for one video.
    pub fn fetch_item_metrics(&self, video_id: &str) -> Option<VideoStatistics> {
        self.try_item_metrics(video_id)
            .map_err(|e| log::warn!("error fetching video metrics for {video_id}: {e}"))
            .ok()
    }

    pub fn try_channel_metadata(&self, channel_id: &str) -> Result<ChannelListResponse, ApiError> {
        let url = self.endpoint_url(
            Endpoint::Channels,
            &[("part", "snippet,statistics"), ("id", channel_id)],
        );
        self.get_items(Endpoint::Channels, &url)
    }

    pub fn try_item_listing(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, ApiError> {
        let max_results = max_results.clamp(1, crate::config::MAX_RESULTS_CAP).to_string();
        let url = self.endpoint_url(
            Endpoint::Search,
            &[
                ("part", "snippet"),
                ("channelId", channel_id),
                ("maxResults", &max_results),
                ("order", "date"),
            ],
        );
        let resp: SearchListResponse = self.get_items(Endpoint::Search, &url)?;
        Ok(resp.items)
    }

    /// Statistics of the first (and only) element of the videos response.
    /// An empty `items` array is [`ApiError::Empty`].
    pub fn try_item_metrics(&self, video_id: &str) -> Result<VideoStatistics, ApiError> {
        let url = self.endpoint_url(Endpoint::Videos, &[("part", "statistics"), ("id", video_id)]);
        let resp: VideoListResponse = self.get_items(Endpoint::Videos, &url)?;
        resp.items
            .into_iter()
            .next()
            .map(|v| v.statistics)
            .ok_or(ApiError::Empty {
                endpoint: Endpoint::Videos,
            })
    }

    /// GET `url`, require a success status and a top-level `items` field, then
    /// decode into `T`.
    fn get_items<T: DeserializeOwned>(&self, endpoint: Endpoint, url: &str) -> Result<T, ApiError> {
        let resp = self.http.get(url).map_err(|e| ApiError::Network {
            endpoint,
            reason: format!("{e:#}"),
        })?;
        if !resp.status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: resp.status,
            });
        }

        let v: Value = serde_json::from_str(&resp.body)
            .map_err(|source| ApiError::Decode { endpoint, source })?;
        if v.get("items").is_none() {
            return Err(ApiError::Malformed {
                endpoint,
                body: serde_json::to_string_pretty(&v).unwrap_or(resp.body),
            });
        }
        serde_json::from_value(v).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

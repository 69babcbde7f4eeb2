//! Drives one run: channel metadata, the recent-upload listing, per-video
//! statistics, then the rendered report on disk.

use crate::api::{Client, HttpGet};
use crate::error::AnalyzeError;
use crate::models::{ChannelSummary, ItemRecord};
use crate::report::{self, RenderedReport};
use crate::storage;
use anyhow::{Context, Result};
use num_format::{Locale, ToFormattedString};

/// Everything fetched for one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAnalysis {
    pub summary: ChannelSummary,
    /// Listing order; only entries that resolved to a video with statistics.
    pub items: Vec<ItemRecord>,
}

/// Fetch the channel summary and one record per listed video.
///
/// Only a failed channel lookup is fatal. A failed listing yields no items;
/// entries that are not videos and videos whose statistics cannot be fetched
/// are dropped.
pub fn collect<H: HttpGet>(
    client: &Client<'_, H>,
    channel_id: &str,
) -> Result<ChannelAnalysis, AnalyzeError> {
    log::info!("Fetching channel information...");
    let channel = client
        .fetch_channel_metadata(channel_id)
        .ok_or_else(|| AnalyzeError::ChannelUnavailable {
            channel_id: channel_id.to_string(),
        })?;
    let summary =
        ChannelSummary::from_response(&channel).ok_or_else(|| AnalyzeError::ChannelNotFound {
            channel_id: channel_id.to_string(),
        })?;

    log::info!("Channel: {}", summary.name);
    log::info!("Subscribers: {}", grouped(summary.subscriber_count));
    log::info!("Total Views: {}", grouped(summary.total_view_count));
    log::info!("Total Videos: {}", grouped(summary.total_video_count));

    log::info!("Fetching video details...");
    let listing = client
        .fetch_item_listing(channel_id, client.config().max_results)
        .unwrap_or_default();
    if listing.is_empty() {
        log::info!("No videos found for this channel.");
    }

    let mut items = Vec::with_capacity(listing.len());
    for entry in &listing {
        let Some(video_id) = entry.video_id() else {
            log::info!("Skipping non-video item: {}", entry.title());
            continue;
        };
        if let Some(stats) = client.fetch_item_metrics(video_id) {
            items.push(ItemRecord::new(entry.title(), video_id, &stats));
        }
    }

    Ok(ChannelAnalysis { summary, items })
}

/// Run the full pipeline for `channel_id` and write the report to the
/// client's configured report path. Nothing is written when the channel
/// lookup fails.
pub fn analyze<H: HttpGet>(client: &Client<'_, H>, channel_id: &str) -> Result<RenderedReport> {
    let config = client.config();
    let analysis = collect(client, channel_id)?;
    let rendered = report::render(&analysis.summary, &analysis.items, config);
    storage::save_report(&rendered, &config.output.report)
        .with_context(|| format!("save report to {}", config.output.report.display()))?;
    log::info!("Analysis saved to {}.", config.output.report.display());
    Ok(rendered)
}

// Console figures only; the report keeps the raw numbers.
fn grouped(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

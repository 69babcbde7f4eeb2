//! Markdown report: channel summary, per-video table and (when there are
//! videos) the likes-to-views ratio chart.

use crate::chart;
use crate::config::Config;
use crate::models::{ChannelSummary, ItemRecord};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Line emitted in place of the table when no video qualified.
pub const EMPTY_ITEMS_LINE: &str = "No valid videos found.";

/// A rendered document plus the chart it references, if one was generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub markdown: String,
    pub chart: Option<PathBuf>,
}

/// Render the report, generating the chart at `config.output.chart` when
/// `items` is non-empty.
///
/// A chart that fails to render is logged and left out of the document.
pub fn render(summary: &ChannelSummary, items: &[ItemRecord], config: &Config) -> RenderedReport {
    let chart_path = if items.is_empty() {
        None
    } else {
        let path = &config.output.chart;
        match chart::plot_ratio_chart(items, path, config.chart_width, config.chart_height) {
            Ok(()) => Some(path.clone()),
            Err(e) => {
                log::warn!("could not generate chart {}: {e:#}", path.display());
                None
            }
        }
    };

    let chart_ref = chart_path
        .as_deref()
        .map(|p| relative_reference(p, &config.output.report));
    RenderedReport {
        markdown: render_markdown(summary, items, chart_ref.as_deref()),
        chart: chart_path,
    }
}

/// Pure Markdown rendering. The chart section is emitted only when `chart_ref`
/// is given and `items` is non-empty.
pub fn render_markdown(
    summary: &ChannelSummary,
    items: &[ItemRecord],
    chart_ref: Option<&str>,
) -> String {
    let mut out = String::new();
    let name = single_line(&summary.name);

    let _ = writeln!(out, "# YouTube Channel Analysis - {name}\n");

    out.push_str("## Channel Information\n");
    let _ = writeln!(out, "- **Channel Name**: {name}");
    let _ = writeln!(out, "- **Subscribers**: {}", summary.subscriber_count);
    let _ = writeln!(out, "- **Total Views**: {}", summary.total_view_count);
    let _ = writeln!(out, "- **Total Videos**: {}\n", summary.total_video_count);

    out.push_str("## Video Details\n\n");

    if items.is_empty() {
        let _ = writeln!(out, "{EMPTY_ITEMS_LINE}");
        return out;
    }

    out.push_str("| Video Title | Video URL | Views | Likes | Comments |\n");
    out.push_str("|-------------|-----------|------:|------:|---------:|\n");
    for item in items {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            table_cell(&item.title),
            table_cell(&item.reference_url),
            item.view_count,
            item.like_count,
            item.comment_count
        );
    }

    if let Some(chart_ref) = chart_ref {
        out.push_str("\n### Likes to Views Ratio (Chart)\n");
        out.push_str("Below is the chart showing the Likes to Views Ratio for each valid video.\n\n");
        let _ = writeln!(out, "![Likes to Views Ratio]({chart_ref})");
    }

    out
}

/// Path of `chart` as seen from the directory containing `report`.
/// Falls back to the chart path as given when it is not below that directory.
pub fn relative_reference(chart: &Path, report: &Path) -> String {
    let base = report.parent().unwrap_or(Path::new(""));
    let rel = if base.as_os_str().is_empty() {
        chart
    } else {
        chart.strip_prefix(base).unwrap_or(chart)
    };
    rel.to_string_lossy().replace('\\', "/")
}

fn single_line(s: &str) -> String {
    s.split(['\r', '\n'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// `|` would end the cell early.
fn table_cell(s: &str) -> String {
    single_line(s).replace('|', "\\|")
}

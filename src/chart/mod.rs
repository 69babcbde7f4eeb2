//! Likes-to-views ratio chart: one horizontal bar per video, rendered to **PNG** or **SVG**.
//!
//! - Bar length is `likes / views`; a video with zero views gets a zero-length bar
//! - Category rows are labelled with the (truncated) video title
//! - Output backend follows the file extension: `.svg` → SVG, anything else → PNG

pub mod fonts;
pub mod text;

use crate::models::ItemRecord;
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;

use text::{label_area_px, truncate_to_width};

pub const CHART_TITLE: &str = "Likes to Views Ratio of YouTube Videos";
pub const X_AXIS_LABEL: &str = "Likes to Views Ratio";

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235); // sky blue
const LABEL_FONT_PX: u32 = 14;
const ROW_PX: u32 = 24;

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioBar {
    pub label: String,
    pub ratio: f64,
}

/// `likes / views` for one video.
///
/// A video with zero views has no meaningful ratio; it is reported as `0.0` so
/// the bar is still drawn (with zero length) instead of carrying NaN/inf into
/// the chart.
pub fn likes_to_views_ratio(item: &ItemRecord) -> f64 {
    if item.view_count == 0 {
        0.0
    } else {
        item.like_count as f64 / item.view_count as f64
    }
}

/// One bar per item, in item order.
pub fn ratio_bars(items: &[ItemRecord]) -> Vec<RatioBar> {
    items
        .iter()
        .map(|item| RatioBar {
            label: item.title.clone(),
            ratio: likes_to_views_ratio(item),
        })
        .collect()
}

/// Render the ratio chart for `items` to `out_path`, replacing any existing file.
///
/// `height` is a minimum: the canvas grows so every bar keeps a readable row.
pub fn plot_ratio_chart<P: AsRef<Path>>(
    items: &[ItemRecord],
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if items.is_empty() {
        return Err(anyhow!("no items to plot"));
    }
    let with_text = fonts::ensure_fonts_registered();

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    let bars = ratio_bars(items);
    let height = height.max(120 + ROW_PX * bars.len() as u32);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_bars(root, &bars, width, with_text)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_bars(root, &bars, width, with_text)?;
    }

    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_bars<DB>(
    root: DrawingArea<DB, Shift>,
    bars: &[RatioBar],
    width: u32,
    with_text: bool,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let n = bars.len();
    let max_ratio = bars.iter().map(|b| b.ratio).fold(0.0f64, f64::max);
    let x_max = if max_ratio > 0.0 { max_ratio * 1.1 } else { 1.0 };

    let max_label_px = (width / 3).max(80);
    let labels: Vec<String> = bars
        .iter()
        .map(|b| truncate_to_width(&b.label, LABEL_FONT_PX, max_label_px - 16))
        .collect();

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if with_text {
        builder
            .caption(CHART_TITLE, ("sans-serif", 24))
            .set_label_area_size(
                LabelAreaPosition::Left,
                label_area_px(&labels, LABEL_FONT_PX, 80, max_label_px),
            )
            .set_label_area_size(LabelAreaPosition::Bottom, 44);
    }
    let mut chart = builder
        .build_cartesian_2d(0f64..x_max, (0..n).into_segmented())
        .map_err(|e| anyhow!("{:?}", e))?;

    if with_text {
        let x_label_fmt = |v: &f64| format!("{:.3}", v);
        let y_label_fmt = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc(X_AXIS_LABEL)
            .x_labels(8)
            .y_labels(n)
            .x_label_formatter(&x_label_fmt)
            .y_label_formatter(&y_label_fmt)
            .label_style(("sans-serif", LABEL_FONT_PX))
            .axis_desc_style(("sans-serif", 16))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    chart
        .draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let mut rect = Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(i)),
                    (bar.ratio, SegmentValue::Exact(i + 1)),
                ],
                BAR_COLOR.filled(),
            );
            rect.set_margin(4, 4, 0, 0);
            rect
        }))
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

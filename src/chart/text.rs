//! Text measurement and truncation for bar labels.

/// Approximate rendered width; plotters offers no measurement before drawing.
/// Sans-serif glyphs average a bit over half the font size.
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Shorten a title to fit `max_px`, ending in a single `…`.
///
/// The cut falls on the last word break when that keeps at least half of the
/// characters that fit; otherwise mid-word. Titles that fit are returned as-is.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    let text = text.trim();
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }

    let glyph_px = ((font_px as f32) * 0.60).max(1.0);
    // Room for the ellipsis itself.
    let budget = ((max_px as f32 / glyph_px).floor() as usize).saturating_sub(1);
    if budget == 0 {
        return "…".to_string();
    }

    let head: String = text.chars().take(budget).collect();
    let cut = match head.rfind(char::is_whitespace) {
        Some(pos) if head[..pos].chars().count() * 2 >= budget => head[..pos].trim_end(),
        _ => head.trim_end(),
    };
    format!("{cut}…")
}

/// Width of the label column: wide enough for the longest label, but never
/// more than `max_px` and never less than `min_px`. Includes a small gutter.
pub fn label_area_px(labels: &[String], font_px: u32, min_px: u32, max_px: u32) -> u32 {
    let widest = labels
        .iter()
        .map(|l| estimate_text_width_px(l, font_px))
        .max()
        .unwrap_or(0);
    (widest + 16).clamp(min_px, max_px)
}

//! Title, subtitle and hashtag extraction.

use crate::markdown::{is_title_heading, truncate_chars};
use crate::patterns::HASHTAG_LINE;
use crate::result::UNTITLED;

/// Substring marking promotional links that never make a good subtitle.
const PROMO_MARKER: &str = "coconala";

/// Lines considered for the subtitle: the 2nd through the 10th.
const SUBTITLE_SCAN_END: usize = 10;

/// Text of the first `# ` line, or the placeholder title when there is none
/// or it is blank. Later H1 lines are never considered.
#[must_use]
pub fn extract_title(lines: &[&str]) -> String {
    lines
        .iter()
        .find(|line| is_title_heading(line))
        .map(|line| line[2..].trim())
        .filter(|text| !text.is_empty())
        .map_or_else(|| UNTITLED.to_string(), str::to_string)
}

/// Tags from the first line that starts with a hashtag.
///
/// Headings never qualify. Every space-separated token starting with `#`
/// on that line becomes a tag (first `#` removed).
#[must_use]
pub fn extract_hashtags(lines: &[&str]) -> Vec<String> {
    let Some(line) = lines.iter().find(|line| {
        HASHTAG_LINE.is_match(line) && !line.starts_with("# ") && !line.starts_with("## ")
    }) else {
        return Vec::new();
    };

    line.split(' ')
        .filter(|token| token.starts_with('#'))
        .map(|token| token.trim_end().replacen('#', "", 1))
        .collect()
}

/// First plain text line among lines 2–10, truncated to `max_chars`.
///
/// Headings, table rows, bare links, bold call-outs and promotional lines
/// are skipped.
#[must_use]
pub fn extract_subtitle(lines: &[&str], max_chars: usize) -> String {
    lines
        .iter()
        .take(SUBTITLE_SCAN_END)
        .skip(1)
        .map(|line| line.trim())
        .find(|line| {
            !line.is_empty()
                && !line.starts_with('#')
                && !line.starts_with('|')
                && !line.starts_with("http")
                && !line.starts_with("**")
                && !line.contains(PROMO_MARKER)
        })
        .map(|line| truncate_chars(line, max_chars))
        .unwrap_or_default()
}

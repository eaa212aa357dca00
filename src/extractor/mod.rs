//! Markdown article extraction pipeline.
//!
//! Each pass reads the raw lines (or the whole text, for the regex passes)
//! and contributes one part of the [`ParsedArticle`]. Pass order matters only
//! for template suggestion, which runs last over the other results.
//!
//! # Module Structure
//!
//! - `heading`: Title, subtitle and hashtag line
//! - `classify`: News / tutorial / comparison flags from the title
//! - `table`: First markdown table as comparison data
//! - `proscons`: Merit and demerit bullet lists
//! - `stats`: Number-with-unit figures
//! - `before_after`: `A → B` change claims
//! - `suggest`: Thumbnail and infographic template suggestions

pub mod before_after;
pub mod classify;
pub mod heading;
pub mod proscons;
pub mod stats;
pub mod suggest;
pub mod table;

use crate::markdown::split_lines;
use crate::result::ParsedArticle;
use crate::Options;

pub use classify::{classify_title, ArticleKind};
pub use suggest::{suggest_templates, SuggestionInput};

/// Runs every pass over `content`.
#[must_use]
pub fn parse_article(content: &str, options: &Options) -> ParsedArticle {
    let lines = split_lines(content);

    let title = heading::extract_title(&lines);
    let hashtags = heading::extract_hashtags(&lines);
    let subtitle = heading::extract_subtitle(&lines, options.subtitle_max_chars);
    let kind = classify_title(&title);

    let comparison_data = table::extract_comparison_table(&lines, options);
    let proscons = proscons::extract_proscons(&lines, options);
    let stats = stats::extract_stats(content, options);
    let before_after = before_after::extract_before_after(content, options);

    let suggested_templates = suggest_templates(&SuggestionInput {
        kind,
        has_hashtags: !hashtags.is_empty(),
        comparison: comparison_data.as_ref(),
        proscons: proscons.as_ref(),
        stats: stats.as_deref(),
    });

    tracing::debug!(
        lines = lines.len(),
        hashtags = hashtags.len(),
        is_news = kind.is_news,
        is_tutorial = kind.is_tutorial,
        is_comparison = kind.is_comparison,
        table_rows = comparison_data.as_ref().map_or(0, |t| t.rows.len()),
        has_proscons = proscons.is_some(),
        stats = stats.as_ref().map_or(0, Vec::len),
        before_after = before_after.as_ref().map_or(0, Vec::len),
        "parsed article"
    );

    ParsedArticle {
        title,
        subtitle,
        hashtags,
        is_news: kind.is_news,
        is_tutorial: kind.is_tutorial,
        is_comparison: kind.is_comparison,
        comparison_data,
        proscons,
        stats,
        before_after,
        suggested_templates,
    }
}

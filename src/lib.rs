//! # article-insight
//!
//! Heuristic analysis of markdown articles for thumbnail and infographic
//! generation.
//!
//! The analyzer reads one article and reports what it can find: title,
//! subtitle, hashtags, article type, a comparison table, pros/cons lists,
//! statistics and before/after changes. From those it suggests which
//! thumbnail and infographic templates suit the article.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_insight::parse;
//!
//! let markdown = "# ChatGPT vs Claude 比較\n\n二つのAIを比べました。\n";
//!
//! let article = parse(markdown);
//! assert_eq!(article.title, "ChatGPT vs Claude 比較");
//! assert!(article.is_comparison);
//! assert_eq!(article.suggested_templates.thumbnail_ids()[0], "comparison");
//! ```
//!
//! ## Features
//!
//! - **Extraction**: Pure, infallible, deterministic; missing structures are `None`
//! - **Template Suggestions**: Derived only from what was detected
//! - **Article Store**: Lists and moves articles between the ready and published folders
//! - **Overrides**: Reads hand-curated image data from sidecar JSON files

mod error;
mod options;
mod patterns;
mod result;

/// Extraction passes (headings, tables, pros/cons, stats, before/after, suggestions).
pub mod extractor;

/// Line-level markdown helpers.
pub mod markdown;

/// Thumbnail and infographic template catalog.
pub mod templates;

/// Character encoding detection for article files.
pub mod encoding;

/// Filesystem article store with ready/published lifecycle folders.
pub mod store;

/// Sidecar JSON image-data overrides.
pub mod overrides;

// Public API - re-exports
pub use error::{Error, Result};
pub use markdown::format_title_for_display;
pub use options::{Options, StoreConfig, PUBLISHED_FOLDER, READY_FOLDER};
pub use overrides::{ImageData, OverrideStore};
pub use result::{
    BeforeAfter, CellValue, ComparisonData, ComparisonRow, ParsedArticle, ProsCons, Stat,
    SuggestedTemplates, UNTITLED,
};
pub use store::{Article, ArticleId, ArticleStore, ArticleSummary, Lifecycle, MoveOutcome};
pub use templates::{InfographicTemplate, TemplateCategory, ThumbnailTemplate};

/// Analyzes a markdown article using default thresholds.
///
/// Never fails: structures that are not found are simply `None`.
///
/// # Example
///
/// ```rust
/// use article_insight::{parse, UNTITLED};
///
/// let article = parse("本文だけの記事");
/// assert_eq!(article.title, UNTITLED);
/// assert!(article.comparison_data.is_none());
/// ```
#[must_use]
pub fn parse(content: &str) -> ParsedArticle {
    parse_with_options(content, &Options::default())
}

/// Analyzes a markdown article with custom thresholds.
///
/// # Example
///
/// ```rust
/// use article_insight::{parse_with_options, Options};
///
/// let options = Options {
///     min_stats: 1,
///     ..Options::default()
/// };
/// let article = parse_with_options("累計120件の実績", &options);
/// assert_eq!(article.stats.map(|s| s.len()), Some(1));
/// ```
#[must_use]
pub fn parse_with_options(content: &str, options: &Options) -> ParsedArticle {
    extractor::parse_article(content, options)
}

/// Decodes raw article bytes (UTF-8, UTF-16 with BOM, or Shift_JIS) and analyzes them.
#[must_use]
pub fn parse_bytes(content: &[u8]) -> ParsedArticle {
    parse(&encoding::decode_article(content))
}

//! Result types for article analysis.
//!
//! `ParsedArticle` is the structured summary produced by [`crate::parse`].
//! Field names serialize in camelCase so the JSON can be handed straight to
//! the rendering layer.

use serde::{Deserialize, Serialize};

use crate::templates::{InfographicTemplate, ThumbnailTemplate};

/// Title used when an article has no `# ` heading.
pub const UNTITLED: &str = "タイトル未設定";

/// Structured summary of one markdown article.
///
/// Every optional field is `Some` only when its detection threshold was met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct ParsedArticle {
    /// Text of the first H1, or [`UNTITLED`].
    pub title: String,

    /// First plain paragraph line near the top, truncated. May be empty.
    pub subtitle: String,

    /// Tags from the first hashtag line, without the leading `#`.
    pub hashtags: Vec<String>,

    pub is_news: bool,
    pub is_tutorial: bool,
    pub is_comparison: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_data: Option<ComparisonData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proscons: Option<ProsCons>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_after: Option<Vec<BeforeAfter>>,

    /// Templates derived from everything above.
    pub suggested_templates: SuggestedTemplates,
}

impl ParsedArticle {
    #[must_use]
    pub fn has_comparison(&self) -> bool {
        self.comparison_data.is_some()
    }

    #[must_use]
    pub fn has_proscons(&self) -> bool {
        self.proscons.is_some()
    }

    #[must_use]
    pub fn has_stats(&self) -> bool {
        self.stats.is_some()
    }
}

/// A markdown table found in the article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonData {
    /// Nearest `##`/`###` heading above the table.
    pub title: String,

    /// Column headers, excluding the label column.
    pub headers: Vec<String>,

    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<CellValue>,
}

/// A table cell: check/cross glyphs become booleans, everything else stays text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Text(String),
}

impl CellValue {
    /// Classifies a trimmed cell.
    #[must_use]
    pub fn from_cell(cell: &str) -> Self {
        let v = cell.trim();
        if matches!(v, "✅" | "○" | "◎") || v.eq_ignore_ascii_case("yes") {
            return Self::Bool(true);
        }
        if matches!(v, "❌" | "×" | "-") || v.eq_ignore_ascii_case("no") {
            return Self::Bool(false);
        }
        Self::Text(v.to_string())
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

/// Merit and demerit bullet lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsCons {
    pub title: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// A number-with-unit figure pulled from the body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// The matched text, e.g. `1,200件`.
    pub value: String,
    /// Label inferred from the unit.
    pub label: String,
    /// Hex display color.
    pub color: String,
}

/// A `before → after` claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeforeAfter {
    pub label: String,
    pub before: String,
    pub after: String,
}

/// Template identifiers suggested for an article, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedTemplates {
    pub thumbnails: Vec<ThumbnailTemplate>,
    pub infographics: Vec<InfographicTemplate>,
}

impl SuggestedTemplates {
    /// Thumbnail ids as strings.
    #[must_use]
    pub fn thumbnail_ids(&self) -> Vec<&'static str> {
        self.thumbnails.iter().map(|t| t.id()).collect()
    }

    /// Infographic ids as strings.
    #[must_use]
    pub fn infographic_ids(&self) -> Vec<&'static str> {
        self.infographics.iter().map(|t| t.id()).collect()
    }
}

//! Article type flags derived from the title.

const NEWS_KEYWORDS: &[&str] = &["速報", "発表", "NEW", "最新"];
const TUTORIAL_KEYWORDS: &[&str] = &["方法", "手順", "ガイド", "入門"];
const COMPARISON_KEYWORDS: &[&str] = &["比較", "VS", "vs"];

/// Independent, non-exclusive type flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ArticleKind {
    pub is_news: bool,
    pub is_tutorial: bool,
    pub is_comparison: bool,
}

#[must_use]
pub fn classify_title(title: &str) -> ArticleKind {
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| title.contains(k));
    ArticleKind {
        is_news: has_any(NEWS_KEYWORDS),
        is_tutorial: has_any(TUTORIAL_KEYWORDS),
        is_comparison: has_any(COMPARISON_KEYWORDS),
    }
}

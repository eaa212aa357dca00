//! Template suggestions derived from the detected structures.

use crate::extractor::classify::ArticleKind;
use crate::result::{ComparisonData, ProsCons, Stat, SuggestedTemplates};
use crate::templates::{InfographicTemplate, ThumbnailTemplate};

/// Structures need at least this many entries to earn an infographic.
const MIN_INFOGRAPHIC_ITEMS: usize = 3;

/// Stats needed for a bar chart on top of the stats card.
const MIN_BAR_CHART_STATS: usize = 4;

/// Everything the suggestion rules look at.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInput<'a> {
    pub kind: ArticleKind,
    pub has_hashtags: bool,
    pub comparison: Option<&'a ComparisonData>,
    pub proscons: Option<&'a ProsCons>,
    pub stats: Option<&'a [Stat]>,
}

#[must_use]
pub fn suggest_templates(input: &SuggestionInput<'_>) -> SuggestedTemplates {
    use InfographicTemplate as I;
    use ThumbnailTemplate as T;

    let mut thumbnails = if input.kind.is_news {
        vec![T::NewsFlash, T::GradientCenter, T::DarkMode]
    } else if input.kind.is_comparison {
        vec![T::Comparison, T::DarkMode, T::GradientCenter]
    } else if input.kind.is_tutorial {
        vec![T::Tutorial, T::StepDisplay, T::ListStyle]
    } else {
        vec![T::GradientCenter, T::DarkMode, T::CircleAccent]
    };
    if input.has_hashtags {
        thumbnails.push(T::TechGrid);
    }

    let mut infographics = Vec::new();
    if input
        .comparison
        .is_some_and(|table| table.rows.len() >= MIN_INFOGRAPHIC_ITEMS)
    {
        infographics.push(I::ComparisonTable);
    }
    if input.proscons.is_some_and(|pc| {
        pc.pros.len() >= MIN_INFOGRAPHIC_ITEMS && pc.cons.len() >= MIN_INFOGRAPHIC_ITEMS
    }) {
        infographics.push(I::ProsCons);
    }
    if let Some(stats) = input.stats.filter(|s| s.len() >= MIN_INFOGRAPHIC_ITEMS) {
        infographics.push(I::Stats);
        if stats.len() >= MIN_BAR_CHART_STATS {
            infographics.push(I::BarChart);
        }
    }

    // A comparison article still gets its table, however short.
    if infographics.is_empty() && input.kind.is_comparison && input.comparison.is_some() {
        infographics.push(I::ComparisonTable);
    }

    SuggestedTemplates {
        thumbnails,
        infographics,
    }
}

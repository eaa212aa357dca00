//! Catalog of thumbnail and infographic template identifiers.
//!
//! Rendering lives elsewhere; this module only knows each template's id,
//! display name and (for thumbnails) category, so suggestions can be
//! type-checked and shown to a person.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Grouping used by the thumbnail picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Tech,
    Business,
    Tutorial,
    News,
    Comparison,
    Infographic,
}

/// Returned when an id matches no known template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template id: {0}")]
pub struct UnknownTemplate(pub String);

/// Thumbnail layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThumbnailTemplate {
    GradientCenter,
    SplitLayout,
    CardStyle,
    DarkMode,
    IconTitle,
    NumberHighlight,
    Minimal,
    DiagonalStripe,
    Comparison,
    NewsFlash,
    Tutorial,
    Quote,
    TechGrid,
    CircleAccent,
    StepDisplay,
    Banner,
    ListStyle,
    GradientBorder,
    StatsStyle,
    SimpleBox,
}

impl ThumbnailTemplate {
    pub const ALL: [Self; 20] = [
        Self::GradientCenter,
        Self::SplitLayout,
        Self::CardStyle,
        Self::DarkMode,
        Self::IconTitle,
        Self::NumberHighlight,
        Self::Minimal,
        Self::DiagonalStripe,
        Self::Comparison,
        Self::NewsFlash,
        Self::Tutorial,
        Self::Quote,
        Self::TechGrid,
        Self::CircleAccent,
        Self::StepDisplay,
        Self::Banner,
        Self::ListStyle,
        Self::GradientBorder,
        Self::StatsStyle,
        Self::SimpleBox,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::GradientCenter => "gradient-center",
            Self::SplitLayout => "split-layout",
            Self::CardStyle => "card-style",
            Self::DarkMode => "dark-mode",
            Self::IconTitle => "icon-title",
            Self::NumberHighlight => "number-highlight",
            Self::Minimal => "minimal",
            Self::DiagonalStripe => "diagonal-stripe",
            Self::Comparison => "comparison",
            Self::NewsFlash => "news-flash",
            Self::Tutorial => "tutorial",
            Self::Quote => "quote",
            Self::TechGrid => "tech-grid",
            Self::CircleAccent => "circle-accent",
            Self::StepDisplay => "step-display",
            Self::Banner => "banner",
            Self::ListStyle => "list-style",
            Self::GradientBorder => "gradient-border",
            Self::StatsStyle => "stats-style",
            Self::SimpleBox => "simple-box",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GradientCenter => "グラデーション中央",
            Self::SplitLayout => "左右分割",
            Self::CardStyle => "カード型",
            Self::DarkMode => "ダークモード",
            Self::IconTitle => "アイコン+タイトル",
            Self::NumberHighlight => "数字強調",
            Self::Minimal => "ミニマル",
            Self::DiagonalStripe => "斜めストライプ",
            Self::Comparison => "比較型",
            Self::NewsFlash => "ニュース速報",
            Self::Tutorial => "チュートリアル",
            Self::Quote => "引用風",
            Self::TechGrid => "テックグリッド",
            Self::CircleAccent => "円形アクセント",
            Self::StepDisplay => "ステップ表示",
            Self::Banner => "バナー風",
            Self::ListStyle => "リスト型",
            Self::GradientBorder => "グラデーションボーダー",
            Self::StatsStyle => "統計データ風",
            Self::SimpleBox => "シンプルボックス",
        }
    }

    #[must_use]
    pub const fn category(self) -> TemplateCategory {
        match self {
            Self::GradientCenter
            | Self::SplitLayout
            | Self::DarkMode
            | Self::DiagonalStripe
            | Self::TechGrid
            | Self::CircleAccent => TemplateCategory::Tech,
            Self::CardStyle
            | Self::NumberHighlight
            | Self::Minimal
            | Self::Quote
            | Self::Banner
            | Self::GradientBorder
            | Self::SimpleBox => TemplateCategory::Business,
            Self::IconTitle | Self::Tutorial | Self::StepDisplay | Self::ListStyle => {
                TemplateCategory::Tutorial
            }
            Self::Comparison => TemplateCategory::Comparison,
            Self::NewsFlash => TemplateCategory::News,
            Self::StatsStyle => TemplateCategory::Infographic,
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for ThumbnailTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThumbnailTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// Infographic layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfographicTemplate {
    ComparisonTable,
    FlowChart,
    Stats,
    Timeline,
    ProsCons,
    Ranking,
    PieChart,
    BarChart,
    GlassProscons,
    MinimalStats,
    FloatingComparison,
    HorizontalBento,
    BeforeAfter,
}

impl InfographicTemplate {
    pub const ALL: [Self; 13] = [
        Self::ComparisonTable,
        Self::FlowChart,
        Self::Stats,
        Self::Timeline,
        Self::ProsCons,
        Self::Ranking,
        Self::PieChart,
        Self::BarChart,
        Self::GlassProscons,
        Self::MinimalStats,
        Self::FloatingComparison,
        Self::HorizontalBento,
        Self::BeforeAfter,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::ComparisonTable => "comparison-table",
            Self::FlowChart => "flow-chart",
            Self::Stats => "stats",
            Self::Timeline => "timeline",
            Self::ProsCons => "pros-cons",
            Self::Ranking => "ranking",
            Self::PieChart => "pie-chart",
            Self::BarChart => "bar-chart",
            Self::GlassProscons => "glass-proscons",
            Self::MinimalStats => "minimal-stats",
            Self::FloatingComparison => "floating-comparison",
            Self::HorizontalBento => "horizontal-bento",
            Self::BeforeAfter => "before-after",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ComparisonTable | Self::FloatingComparison => "比較表",
            Self::FlowChart => "フローチャート",
            Self::Stats => "統計データ",
            Self::Timeline => "タイムライン",
            Self::ProsCons => "メリット・デメリット",
            Self::Ranking => "ランキング",
            Self::PieChart => "円グラフ風",
            Self::BarChart => "棒グラフ",
            Self::GlassProscons => "メリデメ",
            Self::MinimalStats => "統計",
            Self::HorizontalBento => "横ベントー",
            Self::BeforeAfter => "ビフォアフ",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for InfographicTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for InfographicTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

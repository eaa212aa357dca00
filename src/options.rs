//! Configuration for article analysis and the on-disk article layout.
//!
//! `Options` holds the detection thresholds used by the extractor passes.
//! `StoreConfig` describes where the lifecycle folders live.

use std::path::{Path, PathBuf};

/// Folder holding articles that are ready to publish.
pub const READY_FOLDER: &str = "03_公開準備完了";

/// Folder holding articles that have been published.
pub const PUBLISHED_FOLDER: &str = "04_公開済み";

/// Detection thresholds for markdown analysis.
///
/// All fields are public for easy configuration. `Default::default()` gives the
/// canonical behaviour; changing a threshold changes which structures are
/// reported and therefore which templates are suggested.
///
/// # Example
///
/// ```rust
/// use article_insight::Options;
///
/// let options = Options {
///     min_stats: 2,
///     ..Options::default()
/// };
/// assert_eq!(options.max_stats, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum characters kept from the subtitle line.
    ///
    /// Default: `60`
    pub subtitle_max_chars: usize,

    /// Maximum comparison table rows kept.
    ///
    /// Default: `8`
    pub max_table_rows: usize,

    /// Number of lines after a pros/cons heading that are scanned for items.
    ///
    /// Default: `20`
    pub list_scan_window: usize,

    /// Pros/cons items must be longer than this many characters.
    ///
    /// Default: `5`
    pub min_list_item_chars: usize,

    /// Pros/cons items must be shorter than this many characters.
    ///
    /// Default: `60`
    pub max_list_item_chars: usize,

    /// Both the pros and the cons list need at least this many items.
    ///
    /// Default: `3`
    pub min_list_items: usize,

    /// Items kept per pros/cons list.
    ///
    /// Default: `5`
    pub max_list_items: usize,

    /// Unique statistics needed before any are reported.
    ///
    /// Default: `3`
    pub min_stats: usize,

    /// Statistics kept.
    ///
    /// Default: `6`
    pub max_stats: usize,

    /// Smallest numeric value accepted as a statistic.
    ///
    /// Default: `10`
    pub min_stat_value: u64,

    /// Largest numeric value accepted as a statistic.
    ///
    /// Default: `999_999`
    pub max_stat_value: u64,

    /// Before/after pairs needed before any are reported.
    ///
    /// Default: `2`
    pub min_before_after: usize,

    /// Before/after pairs kept.
    ///
    /// Default: `4`
    pub max_before_after: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            subtitle_max_chars: 60,
            max_table_rows: 8,
            list_scan_window: 20,
            min_list_item_chars: 5,
            max_list_item_chars: 60,
            min_list_items: 3,
            max_list_items: 5,
            min_stats: 3,
            max_stats: 6,
            min_stat_value: 10,
            max_stat_value: 999_999,
            min_before_after: 2,
            max_before_after: 4,
        }
    }
}

/// Location of the article lifecycle folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory containing both lifecycle folders.
    pub root: PathBuf,

    /// Folder name (under `root`) for ready articles.
    pub ready_dir: String,

    /// Folder name (under `root`) for published articles.
    pub published_dir: String,
}

impl StoreConfig {
    /// Default folder names under a custom root.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ready_path(&self) -> PathBuf {
        self.root.join(&self.ready_dir)
    }

    #[must_use]
    pub fn published_path(&self) -> PathBuf {
        self.root.join(&self.published_dir)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("..").join("note"),
            ready_dir: READY_FOLDER.to_string(),
            published_dir: PUBLISHED_FOLDER.to_string(),
        }
    }
}

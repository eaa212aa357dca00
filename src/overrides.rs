//! Sidecar JSON overrides for hand-curated images.
//!
//! When automatic extraction is not good enough, a JSON file next to the
//! tool (`<data_dir>/<article name without .md>.json`) supplies the exact
//! thumbnail text and infographic data to render.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::result::{BeforeAfter, CellValue};

/// Curated image data for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub thumbnail: ThumbnailOverride,
    #[serde(default)]
    pub infographics: Vec<InfographicOverride>,
}

impl ImageData {
    /// Title-only data used when no sidecar file exists.
    #[must_use]
    pub fn fallback(title: impl Into<String>) -> Self {
        Self {
            thumbnail: ThumbnailOverride {
                title: title.into(),
                subtitle: None,
                character_image: None,
            },
            infographics: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailOverride {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Path of a character illustration placed on the thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_image: Option<String>,
}

/// A `{ value, label }` figure without a color; colors come from the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOverride {
    pub label: String,
    pub values: Vec<CellValue>,
}

/// One curated infographic, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InfographicOverride {
    #[serde(rename = "proscons")]
    ProsCons {
        title: String,
        pros: Vec<String>,
        cons: Vec<String>,
    },
    #[serde(rename = "stats")]
    Stats { title: String, stats: Vec<StatEntry> },
    #[serde(rename = "comparison")]
    Comparison {
        title: String,
        headers: Vec<String>,
        rows: Vec<RowOverride>,
    },
    #[serde(rename = "beforeAfter")]
    BeforeAfter {
        title: String,
        items: Vec<BeforeAfter>,
    },
    #[serde(rename = "horizontalStats")]
    HorizontalStats {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        stats: Vec<StatEntry>,
    },
}

/// Reads sidecar files from a data directory.
#[derive(Debug, Clone)]
pub struct OverrideStore {
    data_dir: PathBuf,
}

impl OverrideStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Sidecar path for an article file name.
    #[must_use]
    pub fn path_for(&self, article_filename: &str) -> PathBuf {
        let stem = article_filename.replacen(".md", "", 1);
        self.data_dir.join(format!("{stem}.json"))
    }

    /// Curated data for an article; `Ok(None)` when no sidecar exists.
    pub fn load(&self, article_filename: &str) -> Result<Option<ImageData>> {
        let path = self.path_for(article_filename);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no image data override");
            return Ok(None);
        }
        read_image_data(&path).map(Some)
    }
}

fn read_image_data(path: &Path) -> Result<ImageData> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

//! Filesystem-backed article store.
//!
//! Articles are markdown files in one of two lifecycle folders. They are
//! addressed by an [`ArticleId`]: the base64 encoding of the file name, so ids
//! are URL- and shell-safe and decode back to the exact name.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::encoding::decode_article;
use crate::error::{Error, Result};
use crate::options::{StoreConfig, PUBLISHED_FOLDER, READY_FOLDER};
use crate::patterns::H1_LINE;

const MARKDOWN_EXTENSION: &str = ".md";

/// Where an article sits in the publishing workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    Ready,
    Published,
}

impl Lifecycle {
    /// Default folder name for this stage.
    #[must_use]
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Ready => READY_FOLDER,
            Self::Published => PUBLISHED_FOLDER,
        }
    }

    #[must_use]
    pub const fn status(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status())
    }
}

/// Accepts either the status (`ready`) or the folder name (`03_公開準備完了`).
impl FromStr for Lifecycle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ready" | READY_FOLDER => Ok(Self::Ready),
            "published" | PUBLISHED_FOLDER => Ok(Self::Published),
            other => Err(Error::UnknownFolder(other.to_string())),
        }
    }
}

/// Reversible, path-safe article identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    #[must_use]
    pub fn from_filename(filename: &str) -> Self {
        Self(STANDARD.encode(filename.as_bytes()))
    }

    /// Wraps an encoded id without validating it; see [`ArticleId::filename`].
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the file name, rejecting anything that could escape its folder.
    pub fn filename(&self) -> Result<String> {
        let bytes = STANDARD
            .decode(self.0.as_bytes())
            .map_err(|e| Error::InvalidId(format!("{}: {e}", self.0)))?;
        let name =
            String::from_utf8(bytes).map_err(|e| Error::InvalidId(format!("{}: {e}", self.0)))?;

        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(Error::InvalidId(format!("{}: unsafe file name {name:?}", self.0)));
        }
        Ok(name)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of an article listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub filename: String,
    /// First H1, or the file name without `.md`.
    pub title: String,
    pub modified_at: DateTime<Utc>,
    pub status: Lifecycle,
}

/// A loaded article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub filename: String,
    pub content: String,
    pub status: Lifecycle,
}

/// Result of a publish or unpublish move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub filename: String,
    pub from: Lifecycle,
    pub to: Lifecycle,
    pub new_path: PathBuf,
}

/// Reads, lists and moves articles between the lifecycle folders.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    config: StoreConfig,
}

impl ArticleStore {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[must_use]
    pub fn folder_path(&self, stage: Lifecycle) -> PathBuf {
        match stage {
            Lifecycle::Ready => self.config.ready_path(),
            Lifecycle::Published => self.config.published_path(),
        }
    }

    /// Markdown files in the selected folder(s), newest first.
    ///
    /// With no filter both folders are listed. Missing folders are skipped.
    pub fn list(&self, filter: Option<Lifecycle>) -> Result<Vec<ArticleSummary>> {
        let stages = match filter {
            Some(stage) => vec![stage],
            None => vec![Lifecycle::Ready, Lifecycle::Published],
        };

        let mut articles = Vec::new();
        for stage in stages {
            let dir = self.folder_path(stage);
            if !dir.is_dir() {
                tracing::debug!(dir = %dir.display(), "lifecycle folder missing; skipping");
                continue;
            }
            articles.extend(list_folder(&dir, stage)?);
        }

        articles.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        Ok(articles)
    }

    /// Loads an article, looking in the ready folder before the published one.
    pub fn read(&self, id: &ArticleId) -> Result<Article> {
        let filename = id.filename()?;

        for stage in [Lifecycle::Ready, Lifecycle::Published] {
            let path = self.folder_path(stage).join(&filename);
            if path.is_file() {
                let bytes = fs::read(&path).map_err(|e| Error::io(&path, e))?;
                return Ok(Article {
                    id: id.clone(),
                    filename,
                    content: decode_article(&bytes),
                    status: stage,
                });
            }
        }

        Err(Error::NotFound(filename))
    }

    /// Moves an article from ready to published.
    pub fn publish(&self, id: &ArticleId) -> Result<MoveOutcome> {
        self.move_article(id, Lifecycle::Ready, Lifecycle::Published)
    }

    /// Moves an article from published back to ready.
    pub fn unpublish(&self, id: &ArticleId) -> Result<MoveOutcome> {
        self.move_article(id, Lifecycle::Published, Lifecycle::Ready)
    }

    fn move_article(&self, id: &ArticleId, from: Lifecycle, to: Lifecycle) -> Result<MoveOutcome> {
        let filename = id.filename()?;
        let source = self.folder_path(from).join(&filename);
        if !source.is_file() {
            return Err(Error::NotFound(filename));
        }

        let target_dir = self.folder_path(to);
        fs::create_dir_all(&target_dir).map_err(|e| Error::io(&target_dir, e))?;
        let target = target_dir.join(&filename);

        // Copy then delete so a move across filesystems behaves like a rename.
        fs::copy(&source, &target).map_err(|e| Error::io(&target, e))?;
        fs::remove_file(&source).map_err(|e| Error::io(&source, e))?;

        tracing::info!(%filename, %from, %to, "moved article");
        Ok(MoveOutcome {
            filename,
            from,
            to,
            new_path: target,
        })
    }
}

fn list_folder(dir: &Path, stage: Lifecycle) -> Result<Vec<ArticleSummary>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut articles = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let Some(filename) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            continue;
        };
        if !filename.ends_with(MARKDOWN_EXTENSION) || !path.is_file() {
            continue;
        }

        let metadata = entry.metadata().map_err(|e| Error::io(&path, e))?;
        let modified = metadata.modified().map_err(|e| Error::io(&path, e))?;
        let bytes = fs::read(&path).map_err(|e| Error::io(&path, e))?;

        articles.push(ArticleSummary {
            id: ArticleId::from_filename(&filename),
            title: listing_title(&decode_article(&bytes), &filename),
            filename,
            modified_at: DateTime::<Utc>::from(modified),
            status: stage,
        });
    }

    Ok(articles)
}

/// First H1 in the document, else the file name without its extension.
fn listing_title(content: &str, filename: &str) -> String {
    H1_LINE
        .captures(content)
        .map(|caps| caps[1].trim_end_matches('\r').to_string())
        .unwrap_or_else(|| filename.replacen(MARKDOWN_EXTENSION, "", 1))
}

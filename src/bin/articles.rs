//! Command-line front end for the article store.
//!
//! Lists articles, shows their analysis, and moves them between the ready and
//! published folders.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use article_insight::{
    format_title_for_display, parse, ArticleId, ArticleStore, ImageData, Lifecycle, OverrideStore,
    StoreConfig,
};

#[derive(Parser)]
#[command(name = "articles", about = "Manage note articles and preview their infographics")]
struct Cli {
    /// Directory containing the lifecycle folders
    #[arg(long, env = "ARTICLES_ROOT", default_value = "../note")]
    root: PathBuf,

    /// Directory holding image-data override JSON files
    #[arg(long, env = "ARTICLES_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List articles, newest first
    List {
        /// Only this folder (`ready`, `published`, or the folder name)
        #[arg(short, long)]
        folder: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print an article's title, status and suggested templates
    Show {
        /// Article id from `list`
        id: String,
    },
    /// Print the full analysis as JSON
    Parse {
        /// Article id from `list`
        id: Option<String>,
        /// Analyze a markdown file outside the store
        #[arg(long, conflicts_with = "id")]
        file: Option<PathBuf>,
    },
    /// Move an article from ready to published
    Publish { id: String },
    /// Move an article from published back to ready
    Unpublish { id: String },
    /// Print the curated image data for an article (or a title-only fallback)
    Overrides { id: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let store = ArticleStore::new(StoreConfig::with_root(&cli.root));

    match cli.command {
        Commands::List { folder, json } => {
            let filter = folder.map(|f| f.parse::<Lifecycle>()).transpose()?;
            let articles = store.list(filter)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&articles)?);
                return Ok(());
            }
            if articles.is_empty() {
                println!("No articles found under {}", cli.root.display());
                return Ok(());
            }
            for (i, article) in articles.iter().enumerate() {
                println!(
                    "{:>3}. [{}] {}  {}",
                    i + 1,
                    article.status,
                    article.title,
                    article.id
                );
            }
            println!("{} article(s)", articles.len());
        }
        Commands::Show { id } => {
            let article = store.read(&ArticleId::new(id))?;
            let parsed = parse(&article.content);
            println!("{}", format_title_for_display(&parsed.title));
            println!("status:   {}", article.status);
            println!("file:     {}", article.filename);
            if !parsed.subtitle.is_empty() {
                println!("subtitle: {}", parsed.subtitle);
            }
            if !parsed.hashtags.is_empty() {
                println!("tags:     {}", parsed.hashtags.join(", "));
            }
            println!("thumbnails:");
            for template in &parsed.suggested_templates.thumbnails {
                println!("  - {} ({})", template, template.display_name());
            }
            println!("infographics:");
            if parsed.suggested_templates.infographics.is_empty() {
                println!("  (none)");
            }
            for template in &parsed.suggested_templates.infographics {
                println!("  - {} ({})", template, template.display_name());
            }
        }
        Commands::Parse { id, file } => {
            let content = match (id, file) {
                (_, Some(path)) => {
                    let bytes = std::fs::read(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    article_insight::encoding::decode_article(&bytes)
                }
                (Some(id), None) => store.read(&ArticleId::new(id))?.content,
                (None, None) => anyhow::bail!("either an article id or --file is required"),
            };
            println!("{}", serde_json::to_string_pretty(&parse(&content))?);
        }
        Commands::Publish { id } => {
            let outcome = store.publish(&ArticleId::new(id))?;
            println!("Published {} -> {}", outcome.filename, outcome.new_path.display());
        }
        Commands::Unpublish { id } => {
            let outcome = store.unpublish(&ArticleId::new(id))?;
            println!("Returned {} -> {}", outcome.filename, outcome.new_path.display());
        }
        Commands::Overrides { id } => {
            let article = store.read(&ArticleId::new(id))?;
            let overrides = OverrideStore::new(&cli.data_dir);
            let data = match overrides.load(&article.filename)? {
                Some(data) => data,
                None => ImageData::fallback(parse(&article.content).title),
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
    }

    Ok(())
}

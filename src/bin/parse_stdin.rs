//! Reads a markdown article from stdin and prints the analysis as JSON.
//! Used by the thumbnail editor to analyze drafts that are not on disk yet.

use std::io::{self, Read};

use article_insight::parse_bytes;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let mut markdown = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut markdown) {
        tracing::error!(%err, "failed to read from stdin");
        std::process::exit(1);
    }

    let article = parse_bytes(&markdown);

    match serde_json::to_string(&article) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::error!(%err, "failed to serialize analysis");
            std::process::exit(1);
        }
    }
}

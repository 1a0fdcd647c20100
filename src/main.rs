//! patclass CLI - report which documents carry a wanted classification.
//!
//! Usage: `patclass <config.yaml> <document>...`
//!
//! Prints one line per document: its path, `match` or `no-match`, and the
//! explanation of the decision.

use std::fs;

use anyhow::{bail, Context};
use patclass::{ClassificationMatch, CorpusMatch, DocumentKind, LoggingConfig, PatclassConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(config_path) = args.next() else {
        bail!("usage: patclass <config.yaml> <document>...");
    };
    let documents: Vec<String> = args.collect();

    let config = PatclassConfig::from_file(&config_path)
        .with_context(|| format!("loading {config_path}"))?;
    init_tracing(&config.logging);

    let mut matcher = ClassificationMatch::from_config(&config);
    matcher.setup()?;
    tracing::info!(
        config = %config_path,
        name = config.name.as_deref().unwrap_or("unnamed"),
        wanted = matcher.wanted().len(),
        documents = documents.len(),
        "starting"
    );

    let mut matched = 0usize;
    for path in &documents {
        let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
        matcher.bind(text, DocumentKind::Grant);
        let hit = matcher.is_match()?;
        if hit {
            matched += 1;
        }
        println!(
            "{path}\t{}\t{}",
            if hit { "match" } else { "no-match" },
            matcher.explain()
        );
    }

    tracing::info!(documents = documents.len(), matched, "finished");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

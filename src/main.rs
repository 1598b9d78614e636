use anyhow::{Context, Result};
use log::{info, warn};
use register_linker::Corpus;
use std::path::PathBuf;
use std::time::Instant;

/// Corpus diagnostics: segment an archive file into family blocks and
/// optionally search it for a token. Parsing and resolution need the
/// external parser collaborator and are not wired here.
#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        warn!("usage: register-linker <corpus-file> [search-token]");
        return Ok(());
    };
    let token = args.next();

    info!("Loading corpus from: {}", path.display());
    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading corpus file {}", path.display()))?;
    let corpus = Corpus::new(text);

    let start = Instant::now();
    let blocks = corpus.blocks();
    info!(
        "Segmented {} family blocks in {:?}",
        blocks.len(),
        start.elapsed()
    );

    if let Some(token) = token {
        let hits = corpus.find_blocks_containing(&token);
        info!("{} blocks contain \"{token}\"", hits.len());
        let ids: Vec<&str> = hits.iter().map(|b| b.id.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&ids)?);
    } else {
        let ids: Vec<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&ids)?);
    }

    Ok(())
}

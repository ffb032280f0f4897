use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;

use hsn_validator::catalog;
use hsn_validator::config::Config;
use hsn_validator::validation::{BatchProcessor, Verdict};
use hsn_validator::watch::{build_processor, watch_catalog};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse configuration from command line and environment
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    // Catalog construction is the only I/O-bound phase; it runs once, up
    // front, and a load failure is fatal.
    let catalog_path = config.resolve_catalog_path();
    let (catalog, report) = match &catalog_path {
        Some(path) => catalog::load_from_path(path)
            .await
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => {
            log::info!("no catalog file configured, using the embedded sample catalog");
            catalog::load_builtin_sample().context("failed to load the embedded sample catalog")?
        }
    };
    log::info!(
        "loaded {} catalog entries ({} rows skipped)",
        report.entries,
        report.skipped
    );

    let processor = build_processor(catalog, config.check_hierarchy, config.delimiter);

    match &config.codes {
        Some(raw) => print_verdicts(&processor.process(raw), config.json)?,
        None => run_interactive(processor, &config, catalog_path).await?,
    }

    Ok(())
}

fn print_verdicts(verdicts: &[Verdict], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(verdicts)?);
        return Ok(());
    }

    for verdict in verdicts {
        match (&verdict.description, verdict.reason) {
            (Some(description), _) => println!("{}: valid ({})", verdict.code, description),
            (None, Some(reason)) => println!("{}: invalid ({})", verdict.code, reason),
            (None, None) => println!("{}: invalid", verdict.code),
        }
    }
    Ok(())
}

/// Read one batch per stdin line until EOF
///
/// When a catalog file is in use, it is watched for changes; a change
/// rebuilds the engine from scratch and swaps it in atomically.
async fn run_interactive(
    processor: BatchProcessor,
    config: &Config,
    catalog_path: Option<PathBuf>,
) -> Result<()> {
    let shared = Arc::new(RwLock::new(processor));

    // Kept alive for the whole session; dropping it stops the watch.
    let _watcher = match &catalog_path {
        Some(path) => Some(watch_catalog(
            path,
            shared.clone(),
            config.check_hierarchy,
            config.delimiter,
        )?),
        None => None,
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let verdicts = shared.read().await.process(&line);
        print_verdicts(&verdicts, config.json)?;
    }

    Ok(())
}

//! Catalog Hot Reload
//!
//! Watches a catalog file and swaps a freshly built engine into shared state
//! when the file changes. The engine itself has no reload operation; a reload
//! is always a new catalog, a new processor, and an atomic swap, so in-flight
//! batches see a single consistent catalog.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::{RwLock, mpsc};

use crate::catalog::{self, Catalog};
use crate::validation::{BatchProcessor, Validator};

/// Processor slot shared between the request loop and the reload task
pub type SharedProcessor = Arc<RwLock<BatchProcessor>>;

/// Events from the catalog file watcher
#[derive(Debug)]
enum WatcherEvent {
    CatalogChanged,
    WatcherError(notify::Error),
}

/// Assemble the engine for one catalog instance
pub fn build_processor(
    catalog: Catalog,
    check_hierarchy: bool,
    delimiter: char,
) -> BatchProcessor {
    let validator = Validator::new(Arc::new(catalog)).with_hierarchy_check(check_hierarchy);
    BatchProcessor::new(validator).with_delimiter(delimiter)
}

/// Watch the catalog file and swap in a fresh engine when it changes
///
/// A reload failure (unreadable, unparseable or empty rewrite) is logged and
/// the previous catalog stays in service. The returned watcher must be kept
/// alive; dropping it stops the watch.
pub fn watch_catalog(
    path: &Path,
    shared: SharedProcessor,
    check_hierarchy: bool,
    delimiter: char,
) -> Result<RecommendedWatcher> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let watched = path.to_path_buf();
    let file_name = watched.file_name().map(|name| name.to_os_string());

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if let EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) =
                    event.kind
                {
                    let matches = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|name| name.to_os_string()) == file_name);
                    if matches {
                        let _ = tx.send(WatcherEvent::CatalogChanged);
                    }
                }
            }
            Err(e) => {
                let _ = tx.send(WatcherEvent::WatcherError(e));
            }
        },
        notify::Config::default().with_poll_interval(Duration::from_secs(1)),
    )?;

    // Watch the parent directory so replace-by-rename is seen as well.
    let dir = watched.parent().unwrap_or(Path::new(".")).to_path_buf();
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                WatcherEvent::CatalogChanged => {
                    log::info!("catalog file changed: {}", watched.display());
                    match catalog::load_from_path(&watched).await {
                        Ok((new_catalog, report)) => {
                            let processor =
                                build_processor(new_catalog, check_hierarchy, delimiter);
                            *shared.write().await = processor;
                            log::info!(
                                "catalog reloaded: {} entries ({} rows skipped)",
                                report.entries,
                                report.skipped
                            );
                        }
                        Err(e) => {
                            // Keep serving the previous catalog.
                            log::error!("catalog reload failed: {e}");
                        }
                    }
                }
                WatcherEvent::WatcherError(e) => {
                    log::error!("catalog watcher error: {e}");
                }
            }
        }
    });

    Ok(watcher)
}

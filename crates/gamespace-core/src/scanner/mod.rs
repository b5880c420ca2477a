//! Scanner module: finds installed games and measures them.
//!
//! A scan is one bounded fan-out on a dedicated rayon pool:
//! - every existing game root is listed for its immediate subdirectories,
//! - every subdirectory found is sized with a recursive walk,
//!
//! then everything joins before [`scan`] returns. There is no streaming
//! output; the report is only rendered from a finished [`ScanResult`].
//!
//! The only state shared between tasks is the [`WarningCollector`].

pub mod dir_size;
pub mod warnings;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::model::{GameEntry, GameRoot, ScanResult};
pub use dir_size::directory_size;
pub use warnings::WarningCollector;

use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// A game directory found under a root, not yet sized.
struct Candidate<'a> {
    root: &'a GameRoot,
    path: PathBuf,
}

/// Scan every configured game root and size each game directory.
///
/// Roots that do not exist are skipped silently. Access denied on a root
/// becomes a warning in the result; any other failure aborts the scan
/// (subject to [`ScanConfig::file_errors`] for reads beneath a game).
pub fn scan(config: &ScanConfig) -> Result<ScanResult, ScanError> {
    let start = Instant::now();
    let roots: Vec<&GameRoot> = config.roots.existing().collect();
    info!(
        "Scanning {} of {} game roots",
        roots.len(),
        config.roots.len()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .thread_name(|i| format!("gamespace-scan-{i}"))
        .build()?;

    let warnings = WarningCollector::new();

    let entries = pool.install(|| -> Result<Vec<GameEntry>, ScanError> {
        let listed = roots
            .par_iter()
            .map(|root| list_game_dirs(root, &warnings))
            .collect::<Result<Vec<_>, _>>()?;

        let candidates: Vec<Candidate<'_>> = listed.into_iter().flatten().collect();
        debug!("Found {} game directories", candidates.len());

        candidates
            .into_par_iter()
            .map(|candidate| -> Result<GameEntry, ScanError> {
                let size = directory_size(&candidate.path, config.file_errors, &warnings)?;
                Ok(GameEntry::new(candidate.root, candidate.path, size))
            })
            .collect()
    })?;

    debug!(
        "Scan complete: {} games, {} warnings in {:?}",
        entries.len(),
        warnings.len(),
        start.elapsed()
    );

    Ok(ScanResult {
        entries,
        warnings: warnings.into_messages(),
    })
}

/// List the immediate subdirectories of one game root.
///
/// Access denied is recorded as a warning naming the root, and the root
/// contributes no games.
fn list_game_dirs<'a>(
    root: &'a GameRoot,
    warnings: &WarningCollector,
) -> Result<Vec<Candidate<'a>>, ScanError> {
    let list_error = |source: io::Error| ScanError::ListRoot {
        path: root.path.clone(),
        source,
    };

    let read_dir = match fs::read_dir(&root.path) {
        Ok(rd) => rd,
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            warn!("Access denied listing {}", root.path.display());
            warnings.push(access_denied_message(&root.path));
            return Ok(Vec::new());
        }
        Err(err) => return Err(list_error(err)),
    };

    let mut candidates = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(list_error)?;
        let file_type = entry.file_type().map_err(list_error)?;
        if file_type.is_dir() {
            candidates.push(Candidate {
                root,
                path: entry.path(),
            });
        }
    }

    debug!(
        "{} ({}): {} game directories",
        root.path.display(),
        root.label,
        candidates.len()
    );
    Ok(candidates)
}

fn access_denied_message(path: &Path) -> String {
    format!("Access to the path '{}' is denied.", path.display())
}

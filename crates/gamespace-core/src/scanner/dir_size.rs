/// Recursive size of one game directory.
///
/// Walks with `jwalk` in serial mode: the scanner already runs one task per
/// game directory on its own rayon pool, so nesting another parallel walk
/// would only oversubscribe it.
use crate::config::FileErrorPolicy;
use crate::error::{walk_io_error, ScanError};
use crate::scanner::warnings::WarningCollector;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Sum the length of every non-directory entry beneath `dir`.
///
/// Symlinks are not followed; a link contributes its own metadata length.
/// Read failures are handled according to `policy`.
pub fn directory_size(
    dir: &Path,
    policy: FileErrorPolicy,
    warnings: &WarningCollector,
) -> Result<u64, ScanError> {
    let walker = jwalk::WalkDir::new(dir)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    let mut total: u64 = 0;
    let mut files: u64 = 0;

    for entry_result in walker {
        let mut entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf());
                on_read_error(dir, path, walk_io_error(err), policy, warnings)?;
                continue;
            }
        };

        // jwalk yields an unreadable directory as Ok with the failure attached.
        if entry.file_type().is_dir() {
            if let Some(err) = entry.read_children_error.take() {
                on_read_error(dir, entry.path(), walk_io_error(err), policy, warnings)?;
            }
            continue;
        }

        let path = entry.path();
        match std::fs::symlink_metadata(&path) {
            Ok(meta) => {
                total += meta.len();
                files += 1;
            }
            Err(err) => on_read_error(dir, path, err, policy, warnings)?,
        }
    }

    debug!("{}: {files} files, {total} bytes", dir.display());
    Ok(total)
}

fn on_read_error(
    game: &Path,
    path: PathBuf,
    source: io::Error,
    policy: FileErrorPolicy,
    warnings: &WarningCollector,
) -> Result<(), ScanError> {
    match policy {
        FileErrorPolicy::Abort => Err(ScanError::Walk {
            game: game.to_path_buf(),
            path,
            source,
        }),
        FileErrorPolicy::Skip => {
            warn!("Skipping {}: {source}", path.display());
            warnings.push(format!("Skipped {}: {source}", path.display()));
            Ok(())
        }
    }
}

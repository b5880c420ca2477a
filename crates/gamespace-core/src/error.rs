/// Error types for scanning, volume queries, and cleanup.
///
/// Recoverable conditions (access denied on a game root, ambiguous cleanup
/// matches) never surface here; they are reported as warnings or as part of
/// the cleanup outcome. These enums carry the failures that end a run.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failure that aborts a scan before any report is produced.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Listing the immediate children of a game root failed for a reason
    /// other than access being denied.
    #[error("failed to list game root {}", path.display())]
    ListRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a file or directory beneath a game failed while summing its size.
    #[error("failed to read {} while sizing {}", path.display(), game.display())]
    Walk {
        game: PathBuf,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start the scan thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A failure querying a volume's capacity.
#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("failed to query volume space for {}", path.display())]
    Query {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("volume space queries are not supported on this platform")]
    Unsupported,
}

/// A filesystem failure during cleanup. Ambiguous or unsafe targets are not
/// errors; see [`crate::cleanup::CleanupOutcome`].
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("failed to search {}", path.display())]
    Search {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write cleanup status")]
    Output(#[from] io::Error),
}

/// Convert a `jwalk` error into an `io::Error`, keeping the OS error kind
/// when one is available.
pub(crate) fn walk_io_error(err: jwalk::Error) -> io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other(message))
}

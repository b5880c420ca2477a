/// Startup configuration for scans and cleanup.
///
/// Everything here is built once from the command line and read-only
/// afterwards. Defaults reproduce the original `D:` drive setup.
use crate::model::GameRoots;
use compact_str::CompactString;
use std::path::PathBuf;

/// Volume reported in the header when none is given.
pub const DEFAULT_DRIVE: &str = r"D:\";

/// What to do when a file beneath a game directory cannot be read while
/// summing its size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileErrorPolicy {
    /// Stop the whole scan with an error. No report is printed.
    #[default]
    Abort,
    /// Leave the entry out of the total and record a warning.
    Skip,
}

/// Configuration for one report-mode scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub roots: GameRoots,
    /// Volume whose capacity percentages are computed against.
    pub drive: PathBuf,
    pub file_errors: FileErrorPolicy,
    /// Upper bound on concurrent directory walks.
    pub threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: GameRoots::default(),
            drive: PathBuf::from(DEFAULT_DRIVE),
            file_errors: FileErrorPolicy::default(),
            threads: num_cpus::get(),
        }
    }
}

/// Configuration for cleanup mode.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    pub roots: GameRoots,
    /// File extensions (without the dot) that mark a directory as still
    /// holding an installed program. Compared case-insensitively.
    pub executable_extensions: Vec<CompactString>,
}

impl CleanupConfig {
    pub fn new(roots: GameRoots) -> Self {
        Self {
            roots,
            ..Self::default()
        }
    }

    /// `true` if `extension` is one of the configured executable extensions.
    pub fn is_executable_extension(&self, extension: &str) -> bool {
        self.executable_extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            roots: GameRoots::default(),
            executable_extensions: vec![CompactString::new("exe")],
        }
    }
}

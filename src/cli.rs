//! Command-line arguments.
//!
//! Every flag maps onto a field of the core crate's `ScanConfig` or
//! `CleanupConfig`; omitting a flag keeps the built-in default.

use clap::{Parser, ValueEnum};
use gamespace_core::config::{CleanupConfig, FileErrorPolicy, ScanConfig, DEFAULT_DRIVE};
use gamespace_core::model::{GameRoot, GameRoots};
use std::path::PathBuf;

/// Report disk space used by installed games, or remove one orphaned game folder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Remove the game folder with this name (words are joined with spaces)
    /// if it holds no executables, instead of printing the report
    #[arg(long, value_name = "FOLDER", num_args = 1..)]
    pub cleanup: Option<Vec<String>>,

    /// Game library root as PATH=LABEL; repeat to list several.
    /// Replaces the built-in D: drive set
    #[arg(long = "root", value_name = "PATH=LABEL", value_parser = parse_root)]
    pub roots: Vec<GameRoot>,

    /// Volume whose capacity the report is measured against
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DRIVE)]
    pub drive: PathBuf,

    /// What to do when a file under a game cannot be read while sizing it
    #[arg(long, value_enum, default_value_t = FileErrorArg::Abort)]
    pub on_file_error: FileErrorArg,

    /// Log debug output to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileErrorArg {
    /// Stop the scan and print no report
    Abort,
    /// Leave the file out and print a warning after the report
    Skip,
}

impl From<FileErrorArg> for FileErrorPolicy {
    fn from(arg: FileErrorArg) -> Self {
        match arg {
            FileErrorArg::Abort => FileErrorPolicy::Abort,
            FileErrorArg::Skip => FileErrorPolicy::Skip,
        }
    }
}

impl Cli {
    /// Configured roots, or the built-in set when none were given.
    pub fn game_roots(&self) -> GameRoots {
        if self.roots.is_empty() {
            GameRoots::default()
        } else {
            GameRoots::new(self.roots.clone())
        }
    }

    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            roots: self.game_roots(),
            drive: self.drive.clone(),
            file_errors: self.on_file_error.into(),
            ..ScanConfig::default()
        }
    }

    pub fn cleanup_config(&self) -> CleanupConfig {
        CleanupConfig::new(self.game_roots())
    }
}

/// Parse `PATH=LABEL`. The split is on the last `=`, so paths may contain one.
fn parse_root(s: &str) -> Result<GameRoot, String> {
    let (path, label) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected PATH=LABEL, got {s:?}"))?;
    if path.is_empty() || label.is_empty() {
        return Err(format!("expected PATH=LABEL, got {s:?}"));
    }
    Ok(GameRoot::new(path, label))
}

/// Game roots, discovered game entries, and the result of one scan.
use crate::model::size;
use compact_str::CompactString;
use std::path::{Path, PathBuf};

/// A directory that hosts one platform's game installs, e.g.
/// `D:\SteamLibrary\steamapps\common` labelled "Steam".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRoot {
    pub path: PathBuf,
    /// Human-readable platform label shown in the report.
    pub label: CompactString,
}

impl GameRoot {
    pub fn new(path: impl Into<PathBuf>, label: &str) -> Self {
        Self {
            path: path.into(),
            label: CompactString::new(label),
        }
    }

    /// `true` if the root exists on disk and is a directory.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }
}

/// Ordered set of game roots, fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRoots(Vec<GameRoot>);

impl GameRoots {
    pub fn new(roots: Vec<GameRoot>) -> Self {
        Self(roots)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRoot> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[GameRoot] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Roots that currently exist on disk, in configured order.
    pub fn existing(&self) -> impl Iterator<Item = &GameRoot> {
        self.0.iter().filter(|root| root.exists())
    }
}

impl Default for GameRoots {
    /// The game libraries on the `D:` drive of the original setup.
    fn default() -> Self {
        Self(vec![
            GameRoot::new(r"D:\Battle_Net", "Battle.NET"),
            GameRoot::new(r"D:\EA Games", "EA Games"),
            GameRoot::new(r"D:\EA_Games", "EA Games"),
            GameRoot::new(r"D:\EpicGames", "Epic Games"),
            GameRoot::new(r"D:\GOG_Galaxy\Games", "GOG Galaxy"),
            GameRoot::new(r"D:\SteamLibrary\steamapps\common", "Steam"),
            GameRoot::new(r"D:\Ubisoft", "Ubisoft"),
            GameRoot::new(r"D:\XboxGames", "XBOX Games"),
        ])
    }
}

impl<'a> IntoIterator for &'a GameRoots {
    type Item = &'a GameRoot;
    type IntoIter = std::slice::Iter<'a, GameRoot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One installed game: an immediate subdirectory of a [`GameRoot`].
///
/// The owning root's label is copied onto the entry so the platform
/// lookup in the report can never miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// Directory leaf name.
    pub name: CompactString,
    /// Absolute path of the game directory.
    pub path: PathBuf,
    /// Sum of every file's length beneath `path`.
    pub size: u64,
    /// Label of the root this entry was found under.
    pub platform: CompactString,
}

impl GameEntry {
    pub fn new(root: &GameRoot, path: PathBuf, size: u64) -> Self {
        let name = leaf_name(&path);
        Self {
            name,
            path,
            size,
            platform: root.label.clone(),
        }
    }

    /// Human-readable size, e.g. `"12.5 GB"`.
    pub fn size_display(&self) -> String {
        size::format_size(self.size)
    }
}

/// Everything one scan produced: entries in no particular order plus any
/// warnings recorded along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub entries: Vec<GameEntry>,
    pub warnings: Vec<String>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combined size of every entry.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }

    /// Entries ordered largest first. Equal sizes keep scan order.
    pub fn sorted_by_size(&self) -> Vec<&GameEntry> {
        let mut sorted: Vec<&GameEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.size.cmp(&a.size));
        sorted
    }
}

fn leaf_name(path: &Path) -> CompactString {
    path.file_name()
        .map(|n| CompactString::new(n.to_string_lossy()))
        .unwrap_or_else(|| CompactString::new(path.to_string_lossy()))
}

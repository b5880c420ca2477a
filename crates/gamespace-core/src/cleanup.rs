/// Guarded removal of one orphaned game folder.
///
/// The guard walks the configured roots in order, looking for directories
/// whose name equals the target exactly:
///
/// - no match under a root: try the next root,
/// - several matches under a root: record the ambiguity, try the next root,
/// - one match: check it for executables, then either refuse or delete it,
///   and stop. Later roots are never visited.
///
/// At most one directory is removed per run. There is no dry run: a match
/// without executables is deleted immediately.
///
/// Any directory that cannot be read during a walk fails the run with
/// [`CleanupError::Search`] before anything is deleted; an unreadable
/// subtree may hide an executable.
use crate::config::CleanupConfig;
use crate::error::{walk_io_error, CleanupError};
use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

type DirEntry = jwalk::DirEntry<((), ())>;

/// Several directories named like the target under one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousMatch {
    pub root: PathBuf,
    pub matches: Vec<PathBuf>,
}

/// How the guard finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// No root held exactly one matching directory.
    NotFound,
    /// The match still contains executables and was left in place.
    Unsafe {
        path: PathBuf,
        executables: Vec<PathBuf>,
    },
    /// The match was deleted.
    Removed { path: PathBuf },
}

/// Everything the guard decided during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    pub target: String,
    /// Roots skipped because they held more than one match, in visit order.
    pub ambiguous: Vec<AmbiguousMatch>,
    pub outcome: CleanupOutcome,
}

impl CleanupReport {
    /// Path of the deleted directory, if one was deleted.
    pub fn removed(&self) -> Option<&Path> {
        match &self.outcome {
            CleanupOutcome::Removed { path } => Some(path),
            _ => None,
        }
    }
}

/// Join command-line tokens into the folder name to look for.
pub fn cleanup_target<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Run the cleanup guard for `target` across the configured roots.
///
/// One status line per decision is written to `out` as the decision is
/// made, so the path being removed is already printed if removal fails.
pub fn run_cleanup<W: Write>(
    target: &str,
    config: &CleanupConfig,
    out: &mut W,
) -> Result<CleanupReport, CleanupError> {
    info!("Cleanup requested for {target:?}");
    let mut ambiguous = Vec::new();

    for root in config.roots.existing() {
        let mut matches = find_matching_dirs(&root.path, target)?;
        debug!(
            "{}: {} directories named {target:?}",
            root.path.display(),
            matches.len()
        );

        match matches.len() {
            0 => continue,
            1 => {}
            _ => {
                warn!(
                    "{} directories named {target:?} under {}",
                    matches.len(),
                    root.path.display()
                );
                writeln!(
                    out,
                    "Found more than 1 directory matching {target} in {}...",
                    root.path.display()
                )?;
                ambiguous.push(AmbiguousMatch {
                    root: root.path.clone(),
                    matches,
                });
                continue;
            }
        }

        let path = matches.remove(0);
        let outcome = resolve_match(path, config, out)?;
        return Ok(CleanupReport {
            target: target.to_string(),
            ambiguous,
            outcome,
        });
    }

    writeln!(out, "No directory matching {target} was removed.")?;
    Ok(CleanupReport {
        target: target.to_string(),
        ambiguous,
        outcome: CleanupOutcome::NotFound,
    })
}

/// Apply the safety check to a unique match and delete it if it passes.
fn resolve_match<W: Write>(
    path: PathBuf,
    config: &CleanupConfig,
    out: &mut W,
) -> Result<CleanupOutcome, CleanupError> {
    let executables = find_executables(&path, config)?;
    if !executables.is_empty() {
        warn!(
            "Refusing to remove {}: {} executable files",
            path.display(),
            executables.len()
        );
        writeln!(
            out,
            "Some executable files were found. The directory {} may not be safe to remove...",
            path.display()
        )?;
        return Ok(CleanupOutcome::Unsafe { path, executables });
    }

    info!("Removing {}", path.display());
    writeln!(out, "Removing {} directory...", path.display())?;
    out.flush()?;
    remove_directory(&path)?;
    Ok(CleanupOutcome::Removed { path })
}

/// Every directory beneath `root` (at any depth) named exactly `name`.
pub fn find_matching_dirs(root: &Path, name: &str) -> Result<Vec<PathBuf>, CleanupError> {
    let name = OsStr::new(name);
    let mut found = Vec::new();

    for entry in checked_entries(root) {
        let entry = entry?;
        if entry.depth > 0 && entry.file_type().is_dir() && entry.file_name() == name {
            found.push(entry.path());
        }
    }

    found.sort();
    Ok(found)
}

/// Every file beneath `dir` whose extension is configured as executable.
pub fn find_executables(dir: &Path, config: &CleanupConfig) -> Result<Vec<PathBuf>, CleanupError> {
    let mut found = Vec::new();

    for entry in checked_entries(dir) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        let is_executable = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| config.is_executable_extension(ext));
        if is_executable {
            found.push(path);
        }
    }

    found.sort();
    Ok(found)
}

/// Delete `dir` and everything beneath it, including read-only entries.
pub fn remove_directory(dir: &Path) -> Result<(), CleanupError> {
    clear_readonly(dir)?;
    fs::remove_dir_all(dir).map_err(|source| CleanupError::Remove {
        path: dir.to_path_buf(),
        source,
    })
}

/// Make every entry writable by its owner so removal cannot trip over it.
/// Symlinks are left alone since changing their permissions would touch
/// the target.
fn clear_readonly(dir: &Path) -> Result<(), CleanupError> {
    for entry in checked_entries(dir) {
        let entry = entry?;
        if entry.file_type().is_symlink() {
            continue;
        }

        let path = entry.path();
        let remove_error = |source: io::Error| CleanupError::Remove {
            path: path.clone(),
            source,
        };
        let perms = fs::symlink_metadata(&path)
            .map_err(remove_error)?
            .permissions();
        if let Some(perms) = owner_writable(perms) {
            fs::set_permissions(&path, perms).map_err(remove_error)?;
        }
    }
    Ok(())
}

/// `perms` with the owner write bit added, or `None` if already set.
#[cfg(unix)]
fn owner_writable(mut perms: fs::Permissions) -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    let mode = perms.mode();
    if mode & 0o200 != 0 {
        return None;
    }
    perms.set_mode(mode | 0o200);
    Some(perms)
}

/// `perms` with the read-only attribute cleared, or `None` if not set.
#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn owner_writable(mut perms: fs::Permissions) -> Option<fs::Permissions> {
    if !perms.readonly() {
        return None;
    }
    perms.set_readonly(false);
    Some(perms)
}

/// Walk `root` (itself included), failing on any entry or directory
/// listing that could not be read.
fn checked_entries(root: &Path) -> impl Iterator<Item = Result<DirEntry, CleanupError>> + '_ {
    walker(root).into_iter().map(move |entry| {
        let mut entry = entry.map_err(|err| search_error(root, err))?;
        // jwalk yields an unreadable directory as Ok with the failure attached.
        match entry.read_children_error.take() {
            Some(err) => Err(CleanupError::Search {
                path: entry.path(),
                source: walk_io_error(err),
            }),
            None => Ok(entry),
        }
    })
}

fn walker(root: &Path) -> jwalk::WalkDir {
    jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
}

fn search_error(root: &Path, err: jwalk::Error) -> CleanupError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    CleanupError::Search {
        path,
        source: walk_io_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GameRoot, GameRoots};

    fn config_for(roots: &[&Path]) -> CleanupConfig {
        CleanupConfig::new(GameRoots::new(
            roots.iter().map(|p| GameRoot::new(*p, "Test")).collect(),
        ))
    }

    #[test]
    fn test_cleanup_target_joins_tokens() {
        assert_eq!(cleanup_target(&["Half-Life", "2"]), "Half-Life 2");
        assert_eq!(cleanup_target(&["Celeste"]), "Celeste");
    }

    #[test]
    fn test_status_lines_written_in_decision_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        let r1 = tmp.path().join("r1");
        let r2 = tmp.path().join("r2");
        fs::create_dir_all(r1.join("Foo")).unwrap();
        fs::create_dir_all(r1.join("x").join("Foo")).unwrap();
        fs::create_dir_all(r2.join("Foo")).unwrap();

        let mut buf = Vec::new();
        let report = run_cleanup("Foo", &config_for(&[&r1, &r2]), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!("Found more than 1 directory matching Foo in {}...", r1.display())
        );
        assert_eq!(
            lines[1],
            format!("Removing {} directory...", r2.join("Foo").display())
        );
        assert_eq!(report.removed(), Some(r2.join("Foo").as_path()));
    }

    #[test]
    fn test_unsafe_status_line() {
        let tmp = tempfile::TempDir::new().unwrap();
        let foo = tmp.path().join("Foo");
        fs::create_dir_all(&foo).unwrap();
        fs::write(foo.join("game.exe"), b"MZ").unwrap();

        let mut buf = Vec::new();
        let report = run_cleanup("Foo", &config_for(&[tmp.path()]), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("may not be safe to remove"));
        assert!(report.removed().is_none());
    }

    #[test]
    fn test_not_found_status_line() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut buf = Vec::new();
        run_cleanup("Foo", &config_for(&[tmp.path()]), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "No directory matching Foo was removed.\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_owner_writable_only_adds_owner_bit() {
        use std::os::unix::fs::PermissionsExt;

        let perms = owner_writable(fs::Permissions::from_mode(0o444)).unwrap();
        assert_eq!(perms.mode() & 0o777, 0o644);

        let dir = owner_writable(fs::Permissions::from_mode(0o555)).unwrap();
        assert_eq!(dir.mode() & 0o777, 0o755);

        assert!(owner_writable(fs::Permissions::from_mode(0o600)).is_none());
    }
}

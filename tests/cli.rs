use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_bytes(path: &Path, n: usize) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, vec![0u8; n]).unwrap();
}

/// `steam/` holds two games of 1536 and 100 bytes.
fn setup_library() -> TempDir {
    let dir = TempDir::new().unwrap();
    let steam = dir.path().join("steam");
    write_bytes(&steam.join("Hades").join("Content").join("pack.pkg"), 1536);
    write_bytes(&steam.join("Celeste").join("Celeste.dll"), 100);
    dir
}

fn gamespace(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gamespace").unwrap();
    cmd.arg("--drive")
        .arg(dir.path())
        .arg("--root")
        .arg(format!("{}=Steam", dir.path().join("steam").display()));
    cmd
}

#[test]
fn test_report_lists_games_largest_first() {
    let dir = setup_library();

    let output = gamespace(&dir).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total Space:"));
    assert!(stdout.contains("Available Free Space:"));

    let hades = stdout.find("  Hades (Steam): 1.5 KB").expect("Hades row");
    let celeste = stdout.find("Celeste (Steam): 100 B ").expect("Celeste row");
    assert!(hades < celeste, "larger game must be listed first:\n{stdout}");
}

#[test]
fn test_report_with_no_games() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("steam")).unwrap();

    gamespace(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No games found."));
}

#[test]
fn test_report_is_stable_between_runs() {
    let dir = setup_library();

    let first = gamespace(&dir).output().unwrap();
    let second = gamespace(&dir).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_cleanup_removes_safe_folder() {
    let dir = setup_library();
    let celeste = dir.path().join("steam").join("Celeste");

    gamespace(&dir)
        .arg("--cleanup")
        .arg("Celeste")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removing"))
        .stdout(predicate::str::contains("Total Space").not());

    assert!(!celeste.exists());
    assert!(dir.path().join("steam").join("Hades").exists());
}

#[test]
fn test_cleanup_refuses_folder_with_executable() {
    let dir = setup_library();
    let hades = dir.path().join("steam").join("Hades");
    write_bytes(&hades.join("x64").join("Hades.exe"), 10);

    gamespace(&dir)
        .arg("--cleanup")
        .arg("Hades")
        .assert()
        .success()
        .stdout(predicate::str::contains("may not be safe to remove"));

    assert!(hades.exists());
}

#[test]
fn test_cleanup_joins_words() {
    let dir = setup_library();
    let target = dir.path().join("steam").join("Far Cry 5");
    write_bytes(&target.join("readme.txt"), 10);

    gamespace(&dir)
        .args(["--cleanup", "Far", "Cry", "5"])
        .assert()
        .success();

    assert!(!target.exists());
}

#[test]
fn test_invalid_root_is_rejected() {
    Command::cargo_bin("gamespace")
        .unwrap()
        .args(["--root", "no-label-here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATH=LABEL"));
}

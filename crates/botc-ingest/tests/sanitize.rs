use std::fs;

use botc_ingest::{IngestError, SanitizeOptions, sanitize_file};

#[test]
fn removes_control_characters_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ko_KR.csv");
    fs::write(&path, "\u{feff}id,ability\r\nimp,a\u{0001}b\tc\n").unwrap();

    let outcome = sanitize_file(&path, &SanitizeOptions::default()).unwrap();

    assert_eq!(outcome.removed_count, 1);
    assert!(outcome.changed);
    assert!(!outcome.skipped_missing);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "id,ability\r\nimp,ab\tc\n"
    );
}

#[test]
fn dry_run_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ko_KR.csv");
    let original = "id\nimp\u{007f}\n";
    fs::write(&path, original).unwrap();

    let options = SanitizeOptions {
        dry_run: true,
        ..SanitizeOptions::default()
    };
    let outcome = sanitize_file(&path, &options).unwrap();

    assert_eq!(outcome.removed_count, 1);
    assert!(outcome.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn clean_file_is_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scripts.csv");
    fs::write(&path, "\u{feff}id\nimp\n").unwrap();

    let outcome = sanitize_file(&path, &SanitizeOptions::default()).unwrap();

    assert_eq!(outcome.removed_count, 0);
    assert!(!outcome.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), "\u{feff}id\nimp\n");
}

#[test]
fn crlf_line_endings_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scripts.csv");
    let original = "id,name\r\nimp,\"Im\r\np\"\r\n";
    fs::write(&path, original).unwrap();

    let options = SanitizeOptions::default();
    let outcome = sanitize_file(&path, &options).unwrap();

    assert_eq!(outcome.removed_count, 0);
    assert!(!outcome.changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn missing_file_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = sanitize_file(&path, &SanitizeOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));

    let options = SanitizeOptions {
        ignore_missing: true,
        ..SanitizeOptions::default()
    };
    let outcome = sanitize_file(&path, &options).unwrap();
    assert!(outcome.skipped_missing);
    assert!(!outcome.changed);
}

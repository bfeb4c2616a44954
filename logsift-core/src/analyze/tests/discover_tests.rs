use crate::analyze::discover::find_latest_log;

use std::fs;
use tempfile::tempdir;

#[test]
fn picks_the_lexicographically_greatest_filename() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("nginx-access-ui.log-29062017"), "").unwrap();
    fs::write(dir.path().join("nginx-access-ui.log-30062017.gz"), "").unwrap();

    // Act
    let source = find_latest_log(dir.path()).unwrap().unwrap();

    // Assert
    assert_eq!(source.date_code, "30062017");
    assert!(source.gzipped);
    assert_eq!(
        source.path,
        dir.path().join("nginx-access-ui.log-30062017.gz")
    );
}

#[test]
fn plain_files_are_matched_too() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("nginx-access-ui.log-30062017"), "").unwrap();

    // Act
    let source = find_latest_log(dir.path()).unwrap().unwrap();

    // Assert
    assert_eq!(source.date_code, "30062017");
    assert!(!source.gzipped);
}

#[test]
fn ordering_follows_the_raw_date_string() {
    // Arrange: 01072017 is the later day but the smaller string.
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("nginx-access-ui.log-30062017"), "").unwrap();
    fs::write(dir.path().join("nginx-access-ui.log-01072017"), "").unwrap();

    // Act
    let source = find_latest_log(dir.path()).unwrap().unwrap();

    // Assert
    assert_eq!(source.date_code, "30062017");
}

#[test]
fn foreign_filenames_are_ignored() {
    // Arrange
    let dir = tempdir().unwrap();
    for name in [
        "nginx-access-ui.log",
        "nginx-access-ui.log-2017063",
        "nginx-access-ui.log-300620177",
        "nginx-access-ui.log-3006201a",
        "nginx-access-ui.log-30062017.bz2",
        "nginx-access-ui.log-30062017.gz.bak",
        "access.log-30062017",
    ] {
        fs::write(dir.path().join(name), "").unwrap();
    }

    // Act
    let source = find_latest_log(dir.path()).unwrap();

    // Assert
    assert!(source.is_none());
}

#[test]
fn directories_are_not_candidates() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("nginx-access-ui.log-30062017")).unwrap();
    fs::write(dir.path().join("nginx-access-ui.log-29062017"), "").unwrap();

    // Act
    let source = find_latest_log(dir.path()).unwrap().unwrap();

    // Assert
    assert_eq!(source.date_code, "29062017");
}

#[test]
fn empty_directory_yields_none() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let source = find_latest_log(dir.path()).unwrap();

    // Assert
    assert!(source.is_none());
}

#[test]
fn missing_directory_is_an_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let absent = dir.path().join("absent");

    // Act
    let result = find_latest_log(&absent);

    // Assert
    assert!(result.is_err());
}

use std::fs;

use intake_core::partition;
use intake_engine::{read_batch, read_candidate, IntakeError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn candidate_carries_name_size_type_and_source() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("invoice.pdf");
    fs::write(&path, vec![0u8; 3000]).unwrap();

    let candidate = read_candidate(&path).unwrap();
    assert_eq!(candidate.name, "invoice.pdf");
    assert_eq!(candidate.size, 3000);
    assert_eq!(candidate.mime, "application/pdf");
    assert_eq!(candidate.source.as_deref(), Some(path.as_path()));
}

#[test]
fn directories_and_missing_paths_fail_without_stopping_batch() {
    let temp = TempDir::new().unwrap();
    let good = temp.path().join("photo.png");
    fs::write(&good, b"png").unwrap();
    let missing = temp.path().join("gone.jpg");
    let dir = temp.path().join("folder");
    fs::create_dir(&dir).unwrap();

    let (candidates, failures) = read_batch(&[good.clone(), missing.clone(), dir.clone()]);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "photo.png");
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].0, missing);
    assert!(matches!(failures[0].1, IntakeError::Read { .. }));
    assert!(matches!(failures[1].1, IntakeError::NotAFile { .. }));
}

#[test]
fn declared_types_feed_the_validator() {
    let temp = TempDir::new().unwrap();
    let names = ["a.pdf", "b.txt", "c.JPG", "d"];
    let paths: Vec<_> = names
        .iter()
        .map(|name| {
            let path = temp.path().join(name);
            fs::write(&path, b"x").unwrap();
            path
        })
        .collect();

    let (candidates, failures) = read_batch(&paths);
    assert!(failures.is_empty());

    let split = partition(&candidates);
    let accepted: Vec<_> = split.accepted.iter().map(|c| c.name.as_str()).collect();
    let rejected: Vec<_> = split.rejected.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(accepted, vec!["a.pdf", "c.JPG"]);
    assert_eq!(rejected, vec!["b.txt", "d"]);
}

use hashdir::duplicates::{DuplicateFinder, FinderConfig, FinderError};
use hashdir::scanner::ScanError;
use std::fs;
use tempfile::TempDir;

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let root = dir.path().join("root");
    let locked = root.join("locked");
    fs::create_dir_all(&locked).unwrap();
    fs::write(root.join("a.txt"), "same").unwrap();
    fs::write(root.join("b.txt"), "same").unwrap();
    fs::write(locked.join("hidden.txt"), "same").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still read the directory
    let enforced = fs::read_dir(&locked).is_err();

    let mut finder = DuplicateFinder::new(FinderConfig::new(dir.path().join("checksum.txt")));
    let result = finder.scan(&[root]);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let summary = result.unwrap();
    let report = finder.report();
    assert_eq!(report.groups().len(), 1);

    if enforced {
        assert_eq!(summary.scan_errors.len(), 1);
        assert!(summary.scan_errors[0].is_skippable());
        assert_eq!(report.groups()[0].len(), 2);
    } else {
        assert_eq!(report.groups()[0].len(), 3);
    }
}

#[test]
fn test_vanished_entries_are_recorded_and_scan_continues() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "same").unwrap();
    fs::write(root.join("b.txt"), "same").unwrap();
    let gone = dir.path().join("gone");
    let also_gone = dir.path().join("also-gone");

    let index_path = dir.path().join("checksum.txt");
    let mut finder = DuplicateFinder::new(FinderConfig::new(&index_path));
    let summary = finder
        .scan(&[gone.clone(), root, also_gone.clone()])
        .unwrap();

    assert_eq!(summary.roots_scanned, 3);
    assert_eq!(summary.files_indexed, 2);
    assert_eq!(summary.scan_errors.len(), 2);
    assert!(summary.scan_errors.iter().all(ScanError::is_skippable));
    assert_eq!(summary.scan_errors[0].path(), gone.as_path());
    assert_eq!(summary.scan_errors[1].path(), also_gone.as_path());

    let report = finder.report();
    assert_eq!(report.groups().len(), 1);
    assert_eq!(report.groups()[0].len(), 2);
    assert_eq!(fs::read_to_string(&index_path).unwrap().lines().count(), 2);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_left_out() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let root = dir.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "same").unwrap();
    fs::write(root.join("b.txt"), "same").unwrap();
    let secret = root.join("secret.txt");
    fs::write(&secret, "same").unwrap();
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();

    let enforced = fs::File::open(&secret).is_err();

    let mut finder = DuplicateFinder::new(FinderConfig::new(dir.path().join("checksum.txt")));
    let result = finder.scan(&[root]);

    fs::set_permissions(&secret, fs::Permissions::from_mode(0o644)).unwrap();

    let summary = result.unwrap();
    let expected = if enforced { 2 } else { 3 };
    assert_eq!(summary.files_indexed, expected);
    assert_eq!(finder.report().groups()[0].len(), expected);
}

#[cfg(unix)]
#[test]
fn test_fatal_error_stops_remaining_roots() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first");
    let third = dir.path().join("third");
    fs::create_dir(&first).unwrap();
    fs::create_dir(&third).unwrap();
    fs::write(first.join("one.txt"), "first root").unwrap();
    fs::write(third.join("three.txt"), "third root").unwrap();

    // Walking below a regular file fails with "not a directory"
    let plain = dir.path().join("file.txt");
    fs::write(&plain, "not a dir").unwrap();
    let broken = plain.join("child");

    let index_path = dir.path().join("checksum.txt");
    let mut finder = DuplicateFinder::new(FinderConfig::new(&index_path));
    let err = finder.scan(&[first.clone(), broken, third]).unwrap_err();

    match err {
        FinderError::Scan(ref scan_err @ ScanError::Fatal { .. }) => {
            assert!(!scan_err.is_skippable());
        }
        other => panic!("Expected fatal scan error, got {:?}", other),
    }

    // Only the first root made it into the index and the file on disk
    assert_eq!(finder.index().file_count(), 1);
    let content = fs::read_to_string(&index_path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains(&*first.join("one.txt").to_string_lossy()));
    assert!(!content.contains("three.txt"));
}

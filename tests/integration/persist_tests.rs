use hashdir::duplicates::{DuplicateFinder, FinderConfig, FinderError, Index, Report};
use hashdir::persist::{load_index, IndexLine, PersistError};
use hashdir::scanner::Digest;
use std::fs;
use tempfile::TempDir;

fn scanned_tree() -> (TempDir, DuplicateFinder) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("root");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::write(root.join("sub/a-copy.txt"), "alpha").unwrap();
    fs::write(root.join("big.bin"), vec![1u8; 4096]).unwrap();
    fs::write(root.join("sub/big-copy.bin"), vec![1u8; 4096]).unwrap();
    fs::write(root.join("sub/big-copy2.bin"), vec![1u8; 4096]).unwrap();
    fs::write(root.join("lonely.txt"), "lonely").unwrap();

    let mut finder = DuplicateFinder::new(FinderConfig::new(dir.path().join("checksum.txt")));
    finder.scan(&[root]).unwrap();
    (dir, finder)
}

#[test]
fn test_reload_reproduces_report() {
    let (dir, scanned) = scanned_tree();

    let mut reloaded = DuplicateFinder::new(FinderConfig::new(dir.path().join("checksum.txt")));
    let summary = reloaded.load_index().unwrap();

    assert_eq!(summary.entries_loaded, 6);
    assert_eq!(summary.malformed_lines, 0);
    assert_eq!(reloaded.index(), scanned.index());
    assert_eq!(reloaded.report(), scanned.report());
}

#[test]
fn test_reload_survives_rescan_of_deleted_tree() {
    let (dir, scanned) = scanned_tree();
    let expected = scanned.report();
    fs::remove_dir_all(dir.path().join("root")).unwrap();

    let mut reloaded = DuplicateFinder::new(FinderConfig::new(dir.path().join("checksum.txt")));
    reloaded.load_index().unwrap();

    assert_eq!(reloaded.report(), expected);
}

#[test]
fn test_load_skips_malformed_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checksum.txt");

    let good = IndexLine::new(Digest::new(99), 5, "/data/x y.txt").to_string();
    let content = format!("{good}garbage\n\n 0000000001 /data/z\n{good}");
    fs::write(&path, content).unwrap();

    let mut index = Index::new();
    let summary = load_index(&path, &mut index).unwrap();

    assert_eq!(summary.entries_loaded, 2);
    assert_eq!(summary.malformed_lines, 2);
    assert_eq!(index.len(), 1);
    assert_eq!(index.file_count(), 2);
}

#[test]
fn test_load_groups_foreign_tokens_by_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checksum.txt");
    fs::write(&path, "deadbeef 0000000005 /a\ndeadbeef 0000000005 /b\n").unwrap();

    let mut index = Index::new();
    let summary = load_index(&path, &mut index).unwrap();

    assert_eq!(summary.entries_loaded, 2);
    assert_eq!(summary.malformed_lines, 0);
    let report = Report::from_index(&index);
    assert_eq!(report.groups().len(), 1);
    assert_eq!(report.groups()[0].files, vec!["/a".to_string(), "/b".to_string()]);
    assert_eq!(report.groups()[0].digest.as_token(), "deadbeef");
}

#[test]
fn test_load_keeps_differently_written_tokens_apart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checksum.txt");
    // Tokens are compared as text, never decoded
    fs::write(
        &path,
        "3031 0000000005 /a\n31 0000000005 /b\n0031 0000000005 /c\n",
    )
    .unwrap();

    let mut index = Index::new();
    load_index(&path, &mut index).unwrap();

    assert_eq!(index.len(), 3);
    assert!(Report::from_index(&index).is_empty());
}

#[test]
fn test_load_accepts_crlf_line_endings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checksum.txt");

    let line = IndexLine::new(Digest::new(7), 3, "/a.txt").to_string();
    let crlf = line.replace('\n', "\r\n");
    fs::write(&path, format!("{crlf}{crlf}")).unwrap();

    let mut index = Index::new();
    load_index(&path, &mut index).unwrap();

    let group = index.iter().next().unwrap();
    assert_eq!(group.files, vec!["/a.txt".to_string(), "/a.txt".to_string()]);
}

#[test]
fn test_load_bad_size_loads_as_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checksum.txt");
    let token = Digest::new(3).to_token();
    fs::write(&path, format!("{token} 12ab /weird\n")).unwrap();

    let mut index = Index::new();
    let summary = load_index(&path, &mut index).unwrap();

    assert_eq!(summary.entries_loaded, 1);
    assert_eq!(summary.bad_sizes, 1);
    assert_eq!(index.iter().next().unwrap().size, 0);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut finder = DuplicateFinder::new(FinderConfig::new(dir.path().join("nope.txt")));

    match finder.load_index() {
        Err(FinderError::Persist(PersistError::Open { path, .. })) => {
            assert_eq!(path, dir.path().join("nope.txt"));
        }
        other => panic!("Expected Open error, got {:?}", other),
    }
    assert!(finder.index().is_empty());
}

#[test]
fn test_load_adds_to_existing_index() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checksum.txt");
    fs::write(&path, IndexLine::new(Digest::new(1), 10, "/second").to_string()).unwrap();

    let mut index = Index::new();
    index.put(Digest::new(1), 10, "/first");
    load_index(&path, &mut index).unwrap();

    let group = index.iter().next().unwrap();
    assert_eq!(group.files, vec!["/first".to_string(), "/second".to_string()]);
}

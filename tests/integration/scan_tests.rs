use hashdir::duplicates::{DuplicateFinder, FinderConfig};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("root");
    fs::create_dir(&root).unwrap();
    (dir, root)
}

#[test]
fn test_scan_nested_duplicates() {
    let (dir, root) = setup();
    fs::create_dir_all(root.join("a/b/c")).unwrap();
    fs::write(root.join("top.txt"), "duplicate body").unwrap();
    fs::write(root.join("a/mid.txt"), "duplicate body").unwrap();
    fs::write(root.join("a/b/c/deep.txt"), "duplicate body").unwrap();
    fs::write(root.join("a/b/other.txt"), "something else").unwrap();

    let mut finder = DuplicateFinder::new(FinderConfig::new(dir.path().join("checksum.txt")));
    let summary = finder.scan(&[root.clone()]).unwrap();

    assert_eq!(summary.files_indexed, 4);
    assert!(summary.scan_errors.is_empty());

    let report = finder.report();
    assert_eq!(report.groups().len(), 1);
    let group = &report.groups()[0];
    assert_eq!(group.len(), 3);
    assert_eq!(group.size, "duplicate body".len() as u64);

    let mut files = group.files.clone();
    files.sort();
    let mut expected = vec![
        root.join("top.txt").to_string_lossy().into_owned(),
        root.join("a/mid.txt").to_string_lossy().into_owned(),
        root.join("a/b/c/deep.txt").to_string_lossy().into_owned(),
    ];
    expected.sort();
    assert_eq!(files, expected);
}

#[test]
fn test_scan_unique_files_reports_nothing() {
    let (dir, root) = setup();
    for i in 0..5 {
        fs::write(root.join(format!("f{i}.txt")), format!("content {i}")).unwrap();
    }

    let mut finder = DuplicateFinder::new(FinderConfig::new(dir.path().join("checksum.txt")));
    finder.scan(&[root]).unwrap();

    assert_eq!(finder.index().len(), 5);
    assert!(finder.report().is_empty());
}

#[test]
fn test_scan_truncates_existing_index() {
    let (dir, root) = setup();
    let index_path = dir.path().join("checksum.txt");
    fs::write(&index_path, "stale line that must disappear\n").unwrap();
    fs::write(root.join("only.txt"), "x").unwrap();

    let mut finder = DuplicateFinder::new(FinderConfig::new(&index_path));
    finder.scan(&[root]).unwrap();

    let content = fs::read_to_string(&index_path).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_index_line_layout() {
    let (dir, root) = setup();
    let index_path = dir.path().join("checksum.txt");
    fs::write(root.join("file.bin"), vec![7u8; 1234]).unwrap();

    let mut finder = DuplicateFinder::new(FinderConfig::new(&index_path));
    finder.scan(&[root.clone()]).unwrap();

    let content = fs::read_to_string(&index_path).unwrap();
    let line = content.lines().next().unwrap();
    let mut fields = line.splitn(3, ' ');

    let token = fields.next().unwrap();
    assert_eq!(token.len(), 40);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));

    assert_eq!(fields.next().unwrap(), "0000001234");
    assert_eq!(
        fields.next().unwrap(),
        root.join("file.bin").to_string_lossy()
    );
}

#[test]
fn test_same_size_different_content_not_grouped() {
    let (dir, root) = setup();
    fs::write(root.join("a"), "aaaa").unwrap();
    fs::write(root.join("b"), "bbbb").unwrap();

    let mut finder = DuplicateFinder::new(FinderConfig::new(dir.path().join("checksum.txt")));
    finder.scan(&[root]).unwrap();

    assert_eq!(finder.index().len(), 2);
    assert!(finder.report().is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_duplicate_is_not_counted() {
    let (dir, root) = setup();
    fs::write(root.join("real.txt"), "payload").unwrap();
    std::os::unix::fs::symlink(root.join("real.txt"), root.join("link.txt")).unwrap();

    let mut finder = DuplicateFinder::new(FinderConfig::new(dir.path().join("checksum.txt")));
    let summary = finder.scan(&[root]).unwrap();

    assert_eq!(summary.files_indexed, 1);
    assert!(finder.report().is_empty());
}

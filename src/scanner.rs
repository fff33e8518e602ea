use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use globset::GlobSet;
use jwalk::WalkDir;

/// Information about a file found during scanning
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// How a directory scan should behave.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Descend into subdirectories. Off: only direct children are returned.
    pub recursive: bool,
    /// Skip files smaller than this many bytes.
    pub min_size: Option<u64>,
    /// Entries whose own name matches are dropped; matching directories are
    /// pruned together with their entire subtree.
    pub exclude: Option<GlobSet>,
}

/// Scan a directory and return all regular files under it.
///
/// An unreadable root is a fatal error; a failed stat on an individual entry
/// only skips that entry. Symlinks are never followed or returned. The result
/// is sorted by path so downstream keeper selection is stable across runs.
pub fn scan_directory(root: &Path, options: &ScanOptions) -> io::Result<Vec<FileEntry>> {
    // Fail before any walking starts if the root itself is inaccessible.
    fs::read_dir(root)?;

    let min = options.min_size.unwrap_or(0);
    let max_depth = if options.recursive { usize::MAX } else { 1 };

    let mut walk = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false) // Don't follow symlinks to avoid infinite loops
        .sort(true)
        .max_depth(max_depth);

    if let Some(exclude) = options.exclude.clone() {
        walk = walk.process_read_dir(move |_depth, _path, _state, children| {
            children.retain(|entry| match entry {
                Ok(entry) => !exclude.is_match(Path::new(entry.file_name())),
                Err(_) => true,
            });
        });
    }

    let mut files: Vec<FileEntry> = walk
        .into_iter()
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let metadata = entry.metadata().ok()?;

            if !metadata.is_file() {
                return None;
            }

            let size = metadata.len();

            if size < min {
                return None;
            }

            Some(FileEntry {
                path: entry.path(),
                size,
                modified: metadata.modified().ok(),
            })
        })
        .collect();

    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use globset::{Glob, GlobSetBuilder};
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    /// Helper to create a test file with specific content
    fn create_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut file = File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    fn glob_set(patterns: &[&str]) -> GlobSet {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern).unwrap());
        }
        builder.build().unwrap()
    }

    fn recursive() -> ScanOptions {
        ScanOptions {
            recursive: true,
            ..ScanOptions::default()
        }
    }

    #[test]
    fn test_finds_files() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "file1.txt", b"hello");
        create_file(temp.path(), "file2.txt", b"world");

        let files = scan_directory(temp.path(), &recursive()).unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_returns_correct_sizes() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "small.txt", b"hi");
        create_file(temp.path(), "large.txt", b"hello world!");

        let files = scan_directory(temp.path(), &recursive()).unwrap();

        let small = files
            .iter()
            .find(|f| f.path.ends_with("small.txt"))
            .unwrap();
        let large = files
            .iter()
            .find(|f| f.path.ends_with("large.txt"))
            .unwrap();

        assert_eq!(small.size, 2);
        assert_eq!(large.size, 12);
    }

    #[test]
    fn test_scans_subdirectories() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "root.txt", b"root");
        create_file(&temp.path().join("subdir"), "nested.txt", b"nested");

        let files = scan_directory(temp.path(), &recursive()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.path.ends_with("root.txt")));
        assert!(files.iter().any(|f| f.path.ends_with("nested.txt")));
    }

    #[test]
    fn test_non_recursive_skips_subdirectories() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "root.txt", b"root");
        create_file(&temp.path().join("subdir"), "nested.txt", b"nested");

        let files = scan_directory(temp.path(), &ScanOptions::default()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("root.txt"));
    }

    #[test]
    fn test_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("subdir")).unwrap();
        create_file(temp.path(), "file.txt", b"content");

        let files = scan_directory(temp.path(), &recursive()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("file.txt"));
    }

    #[test]
    fn test_min_size_filter() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "tiny.txt", b"hi"); // 2 bytes
        create_file(temp.path(), "small.txt", b"hello"); // 5 bytes
        create_file(temp.path(), "large.txt", b"hello world!"); // 12 bytes

        let options = ScanOptions {
            recursive: true,
            min_size: Some(5),
            ..ScanOptions::default()
        };
        let files = scan_directory(temp.path(), &options).unwrap();

        assert_eq!(files.len(), 2);
        assert!(!files.iter().any(|f| f.path.ends_with("tiny.txt")));
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();

        let files = scan_directory(temp.path(), &recursive()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        assert!(scan_directory(&missing, &recursive()).is_err());
    }

    #[test]
    fn test_handles_symlinks() {
        let temp = TempDir::new().unwrap();
        let file_path = create_file(temp.path(), "real.txt", b"content");

        #[cfg(unix)]
        {
            let link_path = temp.path().join("link.txt");
            std::os::unix::fs::symlink(&file_path, &link_path).unwrap();
        }

        let files = scan_directory(temp.path(), &recursive()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("real.txt"));
    }

    #[test]
    fn test_deeply_nested() {
        let temp = TempDir::new().unwrap();
        let deep = temp.path().join("a").join("b").join("c");
        create_file(&deep, "deep.txt", b"deep content");

        let files = scan_directory(temp.path(), &recursive()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("deep.txt"));
    }

    #[test]
    fn test_excluded_directory_pruned_anywhere() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "keep.txt", b"keep");
        create_file(&temp.path().join("images"), "a.jpg", b"jpg");
        create_file(&temp.path().join("nested").join("images"), "b.jpg", b"jpg");

        let options = ScanOptions {
            recursive: true,
            exclude: Some(glob_set(&["images"])),
            ..ScanOptions::default()
        };
        let files = scan_directory(temp.path(), &options).unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert!(names.contains(&"keep.txt".to_string()));
        assert!(!names.iter().any(|n| n.ends_with(".jpg")));
    }

    #[test]
    fn test_exclude_glob_matches_file_names() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "keep.txt", b"keep");
        create_file(temp.path(), "drop.log", b"drop");

        let options = ScanOptions {
            recursive: true,
            exclude: Some(glob_set(&["*.log"])),
            ..ScanOptions::default()
        };
        let files = scan_directory(temp.path(), &options).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("keep.txt"));
    }

    #[test]
    fn test_result_sorted_by_path() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "b.txt", b"b");
        create_file(temp.path(), "a.txt", b"a");
        create_file(temp.path(), "c.txt", b"c");

        let files = scan_directory(temp.path(), &recursive()).unwrap();

        let paths: Vec<&PathBuf> = files.iter().map(|f| &f.path).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }
}

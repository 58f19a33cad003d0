// Directory listing

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::entry::FileEntry;
use crate::error::NavError;

/// Read the children of `path`.
///
/// Ordering is deterministic: directories first, then case-insensitive by
/// name. Hidden entries are skipped unless `show_hidden`. Any OS error while
/// opening the directory is reported as a single `ListingFailed`.
pub fn list(path: &Path, show_hidden: bool, dirs_first: bool) -> Result<Vec<FileEntry>, NavError> {
    let read_dir = fs::read_dir(path).map_err(|source| NavError::ListingFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir.filter_map(|e| e.ok()) {
        if let Some(file_entry) = FileEntry::from_path(&entry.path()) {
            if show_hidden || !file_entry.is_hidden {
                entries.push(file_entry);
            }
        }
    }

    entries.sort_by(|a, b| compare_entries(a, b, dirs_first));

    debug!(path = %path.display(), count = entries.len(), "listed directory");
    Ok(entries)
}

fn compare_entries(a: &FileEntry, b: &FileEntry, dirs_first: bool) -> Ordering {
    if dirs_first {
        match (a.is_dir(), b.is_dir()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Narrow a listing by case-insensitive substring match on the name
pub fn filter_entries(entries: &[FileEntry], query: &str) -> Vec<FileEntry> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::create_dir(dir.path().join("Assets")).unwrap();
        std::fs::write(dir.path().join("readme.md"), "r").unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "c").unwrap();
        std::fs::write(dir.path().join(".env"), "secret").unwrap();
        dir
    }

    #[test]
    fn directories_sort_before_files() {
        let dir = fixture();
        let entries = list(dir.path(), false, true).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Assets", "src", "Cargo.toml", "readme.md"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
    }

    #[test]
    fn plain_ordering_is_case_insensitive_by_name() {
        let dir = fixture();
        let entries = list(dir.path(), false, false).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Assets", "Cargo.toml", "readme.md", "src"]);
    }

    #[test]
    fn hidden_entries_follow_the_flag() {
        let dir = fixture();

        let without = list(dir.path(), false, true).unwrap();
        assert!(without.iter().all(|e| e.name != ".env"));

        let with = list(dir.path(), true, true).unwrap();
        assert!(with.iter().any(|e| e.name == ".env"));
    }

    #[test]
    fn listing_is_deterministic_without_mutation() {
        let dir = fixture();
        let first: Vec<String> = list(dir.path(), true, true)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        let second: Vec<String> = list(dir.path(), true, true)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_directory_fails_listing() {
        let dir = tempfile::tempdir().unwrap();
        let err = list(&dir.path().join("gone"), false, true).unwrap_err();
        assert!(matches!(err, NavError::ListingFailed { .. }));
    }

    #[test]
    fn file_path_fails_listing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let err = list(&file, false, true).unwrap_err();
        assert!(matches!(err, NavError::ListingFailed { .. }));
    }

    #[test]
    fn filter_matches_substring_case_insensitively() {
        let dir = fixture();
        let entries = list(dir.path(), true, true).unwrap();

        let hits = filter_entries(&entries, "CARGO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Cargo.toml");

        assert!(filter_entries(&entries, "zzz").is_empty());
    }
}

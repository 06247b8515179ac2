//! Finds the documents that need converting.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively collects files under `root` whose extension is in
/// `extensions`. Matching is case-insensitive and accepts extensions
/// written with or without the leading dot. `.git` is never entered.
/// Results are in path order.
///
/// # Errors
/// The first directory-walk error (unreadable directory, broken root).
pub fn scan_files_by_ext<S: AsRef<str>>(
    root: &Path,
    extensions: &[S],
) -> Result<Vec<PathBuf>, crate::Error> {
    let wanted: HashSet<String> = extensions
        .iter()
        .map(|e| normalize_ext(e.as_ref()))
        .filter(|e| !e.is_empty())
        .collect();

    crate::trace!("scanning {} for {:?}", root.display(), wanted);

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_git_dir(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| wanted.contains(&e.to_lowercase()));
        if matches {
            crate::trace!("found {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn normalize_ext(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == ".git"
}

//! Tests for document discovery.

use gitdoc::scan::scan_files_by_ext;
use std::fs;
use tempfile::TempDir;

fn touch(dir: &TempDir, rel: &str) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x").unwrap();
}

#[test]
fn finds_matching_extensions_recursively() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "a.docx");
    touch(&dir, "notes.txt");
    touch(&dir, "sub/b.doc");
    touch(&dir, "sub/deeper/c.DOCX");

    let files = scan_files_by_ext(dir.path(), &["doc", "docx"]).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["a.docx", "sub/b.doc", "sub/deeper/c.DOCX"]);
}

#[test]
fn accepts_dotted_extensions() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "a.docx");

    let files = scan_files_by_ext(dir.path(), &[".docx"]).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn skips_git_directory() {
    let dir = TempDir::new().unwrap();
    touch(&dir, ".git/objects/x.doc");
    touch(&dir, "kept.doc");

    let files = scan_files_by_ext(dir.path(), &["doc"]).unwrap();
    assert_eq!(files, vec![dir.path().join("kept.doc")]);
}

#[test]
fn directories_named_like_documents_are_ignored() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("folder.doc")).unwrap();

    assert!(scan_files_by_ext(dir.path(), &["doc"]).unwrap().is_empty());
}

#[test]
fn empty_extension_list_finds_nothing() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "a.doc");
    let none: [&str; 0] = [];

    assert!(scan_files_by_ext(dir.path(), &none).unwrap().is_empty());
}

#[test]
fn missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    assert!(scan_files_by_ext(&missing, &["doc"]).is_err());
}

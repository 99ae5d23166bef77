//! Interactive Shell Tests
//!
//! Scripted menu sessions against a real catalog file. The shell must:
//! - Route each numbered choice to the matching store operation
//! - Report catalog errors and keep going
//! - Persist mutations so the next session sees them

use libris::catalog::CatalogStore;
use libris::cli::run_shell;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn run_session(path: &Path, script: &str) -> String {
    let mut store = CatalogStore::open(path).expect("Failed to open catalog");
    let mut output = Vec::new();
    run_shell(&mut store, Cursor::new(script.as_bytes()), &mut output)
        .expect("Shell session failed");
    String::from_utf8(output).expect("Shell output must be UTF-8")
}

#[test]
fn test_full_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library.txt");

    let script = concat!(
        "1\nDune\nFrank Herbert\n111\n", // add
        "1\nDune 2\nFrank Herbert\n111\n", // duplicate
        "3\n111\n",                       // checkout
        "3\n111\n",                       // checkout again
        "7\n",                            // stats
        "4\n111\n",                       // return
        "2\nherbert\n",                   // search
        "8\n",
    );
    let output = run_session(&path, script);

    assert!(output.contains("Book added successfully!"));
    assert!(output.contains("Error: A book with identifier '111' already exists"));
    assert!(output.contains("Book checked out successfully!"));
    assert!(output.contains("Error: Book '111' is already checked out"));
    assert!(output.contains("Total Books: 1\nAvailable Books: 0\nChecked Out Books: 1"));
    assert!(output.contains("Book returned successfully!"));
    assert!(output.contains("Search Results for 'herbert':"));
    assert!(output.contains("Status: Available"));
}

#[test]
fn test_sessions_share_the_catalog_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library.txt");

    run_session(&path, "1\nEmma\nJane Austen\nA-1\n3\nA-1\n8\n");
    let output = run_session(&path, "6\n8\n");

    assert!(output.contains("Title: Emma"));
    assert!(output.contains("Status: Checked Out"));
}

#[test]
fn test_delete_in_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library.txt");

    let output = run_session(&path, "1\nA\nB\nX\n5\nx\n5\nx\n6\n8\n");

    assert!(output.contains("Book deleted successfully!"));
    assert!(output.contains("Error: No book with identifier 'x'"));
    assert!(output.contains("No books in the library."));
    assert!(CatalogStore::open(&path).unwrap().is_empty());
}

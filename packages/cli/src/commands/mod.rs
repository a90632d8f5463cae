pub mod report;
pub mod summary;

pub use report::{report, ReportArgs};
pub use summary::{summary, SummaryArgs};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every `*.json` file under a directory, sorted by path
pub fn find_record_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_record_files() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("nested")).unwrap();
        std::fs::write(temp.path().join("b.json"), "{}").unwrap();
        std::fs::write(temp.path().join("a.json"), "{}").unwrap();
        std::fs::write(temp.path().join("nested/c.json"), "{}").unwrap();
        std::fs::write(temp.path().join("notes.txt"), "").unwrap();

        let files = find_record_files(temp.path());
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "nested/c.json"]);
    }

    #[test]
    fn test_missing_directory_has_no_records() {
        let temp = TempDir::new().unwrap();
        assert!(find_record_files(&temp.path().join("missing")).is_empty());
    }
}

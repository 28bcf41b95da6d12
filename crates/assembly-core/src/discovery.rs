//! Discovery of capture files in a source directory

use std::path::Path;
use walkdir::WalkDir;

use crate::errors::{AssemblyError, Result};
use crate::types::CaptureFile;

/// Find capture files directly under `dir` with the given extension,
/// sorted by file name.
///
/// Subdirectories are not searched. The extension is matched
/// case-sensitively against the end of the file name, so a file named
/// just `.md` counts. It may be passed with or without a leading dot.
pub fn find_capture_files(dir: &Path, extension: &str) -> Result<Vec<CaptureFile>> {
    if !dir.is_dir() {
        return Err(AssemblyError::DirectoryNotFound {
            what: "Source",
            path: dir.to_path_buf(),
        });
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| AssemblyError::ListDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(&suffix));
        if matches {
            files.push(CaptureFile::new(path));
        }
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    tracing::debug!(count = files.len(), dir = %dir.display(), "found capture files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_capture_files_empty_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let files = find_capture_files(tmp.path(), "md").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_find_capture_files_sorted_by_name() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("20240101-120500.md"), "b").unwrap();
        fs::write(tmp.path().join("20240101-120000.md"), "a").unwrap();
        fs::write(tmp.path().join("20240102-090000.md"), "c").unwrap();

        let names: Vec<String> = find_capture_files(tmp.path(), "md")
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(
            names,
            vec!["20240101-120000.md", "20240101-120500.md", "20240102-090000.md"]
        );
    }

    #[test]
    fn test_find_capture_files_filters_extension() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.md"), "x").unwrap();
        fs::write(tmp.path().join("b.txt"), "x").unwrap();
        fs::write(tmp.path().join("c.MD"), "x").unwrap();
        fs::create_dir(tmp.path().join("nested.md")).unwrap();

        let files = find_capture_files(tmp.path(), ".md").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "a.md");

        let files = find_capture_files(tmp.path(), "txt").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "b.txt");
    }

    #[test]
    fn test_find_capture_files_includes_bare_extension_name() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(".md"), "x").unwrap();
        fs::write(tmp.path().join("a.md"), "x").unwrap();
        fs::write(tmp.path().join("notes.mdx"), "x").unwrap();

        let names: Vec<String> = find_capture_files(tmp.path(), "md")
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec![".md", "a.md"]);
    }

    #[test]
    fn test_find_capture_files_does_not_recurse() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("older");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("a.md"), "x").unwrap();
        fs::write(tmp.path().join("b.md"), "x").unwrap();

        let files = find_capture_files(tmp.path(), "md").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "b.md");
    }

    #[test]
    fn test_find_capture_files_nonexistent_dir() {
        let err = find_capture_files(Path::new("/nonexistent/captures"), "md").unwrap_err();
        assert!(err.is_missing_directory());
    }
}

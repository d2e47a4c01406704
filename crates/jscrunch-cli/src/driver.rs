//! Directory walking and per-file rewriting around the core minifier.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

/// Outcome of minifying one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub original_bytes: usize,
    pub minified_bytes: usize,
    pub ended_cleanly: bool,
}

impl FileReport {
    /// Percentage reduction relative to the original size.
    pub fn savings(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.minified_bytes as f64 / self.original_bytes as f64;
        (1.0 - ratio) * 100.0
    }
}

/// Minifies every `.{ext}` file under `root`, in place unless `dry_run`.
///
/// Files are processed on the rayon pool — each minification is an
/// independent pure pass — and reports come back in path order.
pub fn run(root: &Path, ext: &str, dry_run: bool) -> Result<Vec<FileReport>> {
    let files = collect_files(root, ext)?;
    debug!(count = files.len(), root = %root.display(), "collected files");
    files
        .par_iter()
        .map(|path| minify_file(path, dry_run))
        .collect()
}

fn collect_files(root: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|e| e == ext) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn minify_file(path: &Path, dry_run: bool) -> Result<FileReport> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let minified = jscrunch::minify(&source);
    if !dry_run {
        fs::write(path, &minified.text).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(FileReport {
        path: path.to_path_buf(),
        original_bytes: source.len(),
        minified_bytes: minified.text.len(),
        ended_cleanly: minified.ended_cleanly,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_matching_files_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("pages");
        fs::create_dir(&nested).unwrap();
        let js = nested.join("app.js");
        let css = dir.path().join("style.css");
        fs::write(&js, "let a = 1;  // counter\nlet b = 2;\n").unwrap();
        fs::write(&css, "body {  }\n").unwrap();

        let reports = run(dir.path(), "js", false).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].path, js);
        assert!(reports[0].ended_cleanly);
        assert_eq!(fs::read_to_string(&js).unwrap(), "let a=1;let b=2;");
        // Non-matching files are untouched.
        assert_eq!(fs::read_to_string(&css).unwrap(), "body {  }\n");
    }

    #[test]
    fn dry_run_leaves_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let js = dir.path().join("app.js");
        let source = "let a = 1;\n";
        fs::write(&js, source).unwrap();

        let reports = run(dir.path(), "js", true).unwrap();

        assert_eq!(reports.len(), 1);
        assert!(reports[0].minified_bytes < reports[0].original_bytes);
        assert_eq!(fs::read_to_string(&js).unwrap(), source);
    }

    #[test]
    fn truncated_file_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let js = dir.path().join("broken.js");
        fs::write(&js, "a='never closed").unwrap();

        let reports = run(dir.path(), "js", false).unwrap();

        assert_eq!(reports.len(), 1);
        assert!(!reports[0].ended_cleanly);
        assert_eq!(fs::read_to_string(&js).unwrap(), "a='never closed");
    }

    #[test]
    fn empty_tree_yields_no_reports() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), "js", false).unwrap().is_empty());
    }
}

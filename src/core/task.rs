//! File task collection.
//!
//! Turns the user's input paths into concrete `(path, extension)` units of
//! work, filtered by the allowed extension set.

use jwalk::WalkDir;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// One unit of work for the file processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub path: PathBuf,
    /// Lower-cased, no leading dot.
    pub extension: String,
}

impl FileTask {
    /// Build a task from a path, if it has an extension.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let extension = extension_of(&path)?;
        Some(Self { path, extension })
    }
}

/// Input path that could not be enumerated.
#[derive(Debug, Clone)]
pub struct WalkFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Tasks discovered from the input paths, plus enumeration failures.
#[derive(Debug, Default)]
pub struct TaskSet {
    pub tasks: Vec<FileTask>,
    pub failures: Vec<WalkFailure>,
}

/// Extension of a file name: text after the last `.`, lower-cased.
///
/// Dotfiles such as `.eslintrc` have no extension.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(str::to_ascii_lowercase)
}

/// Normalize a user-supplied extension: trim, drop a leading `.`, lower-case.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim();
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
}

/// Resolve input paths into tasks whose extension is in `allowed`.
///
/// Files are used as-is, directories are walked recursively (hidden entries
/// included, symlinks not followed). Order follows the inputs; order inside
/// a directory is whatever the walker yields.
pub fn collect_tasks(inputs: &[PathBuf], allowed: &FxHashSet<String>) -> TaskSet {
    let mut set = TaskSet::default();

    for input in inputs {
        if input.is_file() {
            set.push_if_allowed(input.clone(), allowed);
            continue;
        }

        if !input.is_dir() {
            set.failures.push(WalkFailure {
                path: input.clone(),
                message: "no such file or directory".to_string(),
            });
            continue;
        }

        for entry in WalkDir::new(input).skip_hidden(false) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    set.push_if_allowed(entry.path(), allowed);
                }
                Ok(_) => {}
                Err(err) => set.failures.push(WalkFailure {
                    path: err.path().map_or_else(|| input.clone(), Path::to_path_buf),
                    message: err.to_string(),
                }),
            }
        }
    }

    set
}

impl TaskSet {
    fn push_if_allowed(&mut self, path: PathBuf, allowed: &FxHashSet<String>) {
        if let Some(task) = FileTask::from_path(path)
            && allowed.contains(&task.extension)
        {
            self.tasks.push(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn allowed(exts: &[&str]) -> FxHashSet<String> {
        exts.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("a/b/view.JSP")), Some("jsp".into()));
        assert_eq!(extension_of(Path::new("main.min.js")), Some("js".into()));
        assert_eq!(extension_of(Path::new("Makefile")), None);
        assert_eq!(extension_of(Path::new(".eslintrc")), None);
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(" JSP "), Some("jsp".into()));
        assert_eq!(normalize_extension(".css"), Some("css".into()));
        assert_eq!(normalize_extension("  "), None);
        assert_eq!(normalize_extension("."), None);
    }

    #[test]
    fn test_collect_tasks_walks_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docroot/html");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("view.jsp"), "").unwrap();
        fs::write(nested.join("init.jspf"), "").unwrap();
        fs::write(nested.join("main.CSS"), "").unwrap();
        fs::write(nested.join("readme.txt"), "").unwrap();
        fs::write(dir.path().join(".hidden.js"), "").unwrap();

        let set = collect_tasks(
            &[dir.path().to_path_buf()],
            &allowed(&["js", "jsp", "jspf", "css"]),
        );

        let mut names: Vec<_> = set
            .tasks
            .iter()
            .map(|t| t.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, [".hidden.js", "init.jspf", "main.CSS", "view.jsp"]);
        assert!(set.failures.is_empty());

        let css = set.tasks.iter().find(|t| t.path.ends_with("main.CSS")).unwrap();
        assert_eq!(css.extension, "css");
    }

    #[test]
    fn test_collect_tasks_filters_by_allowed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "").unwrap();
        fs::write(dir.path().join("b.jsp"), "").unwrap();

        let set = collect_tasks(&[dir.path().to_path_buf()], &allowed(&["jsp"]));
        assert_eq!(set.tasks.len(), 1);
        assert_eq!(set.tasks[0].extension, "jsp");
    }

    #[test]
    fn test_collect_tasks_direct_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("portlet.js");
        fs::write(&file, "").unwrap();

        let set = collect_tasks(&[file.clone()], &allowed(&["js"]));
        assert_eq!(
            set.tasks,
            vec![FileTask {
                path: file,
                extension: "js".into()
            }]
        );
    }

    #[test]
    fn test_collect_tasks_missing_input() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let set = collect_tasks(&[missing.clone()], &allowed(&["js"]));
        assert!(set.tasks.is_empty());
        assert_eq!(set.failures.len(), 1);
        assert_eq!(set.failures[0].path, missing);
    }
}

//! Discovery of compilation units under the source root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use tracing::warn;
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Extensions of files parsed as compilation units.
pub const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "mts", "cts", "jsx", "js", "mjs", "cjs"];

/// Which parts of the source tree to scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions<'a> {
    /// Directories (or directory globs) relative to the source root.
    /// Empty means the whole root.
    pub includes: &'a [String],
    /// Literal directories or glob patterns to leave out.
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
}

#[derive(Debug, Default)]
pub struct ScanResult {
    /// Unit paths, sorted and deduplicated.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read.
    pub skipped_count: usize,
}

/// Patterns without `*` or `?` are literal paths, so `app/[locale]` works.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

pub fn scan_files(root: &Path, options: &ScanOptions<'_>) -> ScanResult {
    let mut literal_ignores: Vec<PathBuf> = Vec::new();
    let mut ignore_patterns: Vec<Pattern> = Vec::new();

    for ignore in options.ignores {
        if !is_glob_pattern(ignore) {
            literal_ignores.push(root.join(ignore));
            continue;
        }
        match Pattern::new(ignore) {
            Ok(pattern) => ignore_patterns.push(pattern),
            Err(e) => warn!(pattern = %ignore, error = %e, "invalid ignore pattern"),
        }
    }
    if options.ignore_test_files {
        ignore_patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
    }

    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for dir in scan_roots(root, options.includes) {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped_count += 1;
                    warn!(error = %e, "cannot access path");
                    continue;
                }
            };
            let path = entry.path();

            if literal_ignores.iter().any(|ignore| path.starts_with(ignore)) {
                continue;
            }
            let path_str = path.to_string_lossy();
            if ignore_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if entry.file_type().is_file() && is_source_file(path) {
                files.insert(path.to_path_buf());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

/// Directories to walk: the root, or each include resolved against it.
fn scan_roots(root: &Path, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![root.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        let path = root.join(include);
        if !is_glob_pattern(include) {
            if path.exists() {
                roots.push(path);
            } else {
                warn!(path = %path.display(), "include path does not exist");
            }
            continue;
        }

        match glob(&path.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) => warn!(pattern = %include, error = %e, "invalid include pattern"),
        }
    }
    roots
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn names(result: &ScanResult, root: &Path) -> Vec<String> {
        result
            .files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        File::create(path).unwrap();
    }

    #[test]
    fn test_scans_source_files_sorted() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/b.tsx");
        touch(dir.path(), "src/a.js");
        touch(dir.path(), "lib/util.mjs");
        touch(dir.path(), "style.css");
        touch(dir.path(), "messages.json");

        let result = scan_files(dir.path(), &ScanOptions::default());

        assert_eq!(
            names(&result, dir.path()),
            vec!["lib/util.mjs", "src/a.js", "src/b.tsx"]
        );
    }

    #[test]
    fn test_includes_literal_and_glob() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/app/page.tsx");
        touch(dir.path(), "src/components/Button.tsx");
        touch(dir.path(), "app/[locale]/layout.tsx");
        touch(dir.path(), "lib/utils.ts");

        let includes = vec!["src/*".to_string(), "app/[locale]".to_string()];
        let result = scan_files(
            dir.path(),
            &ScanOptions {
                includes: &includes,
                ..Default::default()
            },
        );

        assert_eq!(
            names(&result, dir.path()),
            vec![
                "app/[locale]/layout.tsx",
                "src/app/page.tsx",
                "src/components/Button.tsx"
            ]
        );
    }

    #[test]
    fn test_overlapping_includes_are_deduplicated() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/components/Button.tsx");

        let includes = vec!["src".to_string(), "src/components".to_string()];
        let result = scan_files(
            dir.path(),
            &ScanOptions {
                includes: &includes,
                ..Default::default()
            },
        );

        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_ignores_literal_and_glob() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/Button.tsx");
        touch(dir.path(), "src/Button.stories.tsx");
        touch(dir.path(), "src/generated/types.ts");
        touch(dir.path(), "node_modules/react-intl/index.js");

        let ignores = vec![
            "src/generated".to_string(),
            "**/*.stories.tsx".to_string(),
            "**/node_modules/**".to_string(),
        ];
        let result = scan_files(
            dir.path(),
            &ScanOptions {
                ignores: &ignores,
                ..Default::default()
            },
        );

        assert_eq!(names(&result, dir.path()), vec!["src/Button.tsx"]);
    }

    #[test]
    fn test_test_files_are_optional() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "app.tsx");
        touch(dir.path(), "app.test.tsx");
        touch(dir.path(), "__tests__/helper.ts");

        let skipping = scan_files(
            dir.path(),
            &ScanOptions {
                ignore_test_files: true,
                ..Default::default()
            },
        );
        assert_eq!(names(&skipping, dir.path()), vec!["app.tsx"]);

        let all = scan_files(dir.path(), &ScanOptions::default());
        assert_eq!(all.files.len(), 3);
    }

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file(Path::new("app.tsx")));
        assert!(is_source_file(Path::new("app.cts")));
        assert!(!is_source_file(Path::new("app.d")));
        assert!(!is_source_file(Path::new("README.md")));
    }
}

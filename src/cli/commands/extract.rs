use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, warn};

use super::super::args::ExtractArgs;
use super::{CommandResult, CommandSummary, ExtractSummary, UnitSummary, helper::finish};
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        ExtractOptions, ExtractedUnit,
        emit::catalog_path,
        extract_unit,
        file_scanner::{ScanOptions, ScanResult, is_source_file, scan_files},
        unit::display_path,
    },
    issues::{IoErrorIssue, Issue},
};

/// Extract every unit under the source root (or the given paths), relative
/// to `cwd`.
pub fn extract(args: &ExtractArgs, cwd: &Path) -> Result<CommandResult> {
    let loaded = load_config(cwd)?;
    if !loaded.from_file {
        debug!("no {} found, using default configuration", CONFIG_FILE_NAME);
    }

    let mut config = loaded.config;
    apply_overrides(&mut config, args, cwd);
    config.validate()?;

    let options = config.extract_options(cwd);
    let scan_options = ScanOptions {
        includes: &config.includes,
        ignores: &config.ignores,
        ignore_test_files: config.ignore_test_files,
    };

    let scan = if args.paths.is_empty() {
        scan_files(&cwd.join(&config.source_root), &scan_options)
    } else {
        collect_paths(&args.paths, cwd, &scan_options)
    };
    if scan.skipped_count > 0 {
        warn!(count = scan.skipped_count, "paths skipped due to access errors");
    }

    if let Some(ref messages_dir) = options.messages_dir {
        shared_catalog_paths(&scan.files, cwd, messages_dir);
    }

    let results: Vec<Result<ExtractedUnit, Issue>> = scan
        .files
        .par_iter()
        .map(|path| run_unit(path, &options, cwd))
        .collect();

    let mut issues = Vec::new();
    let mut units = Vec::new();
    for result in results {
        match result {
            Ok(unit) => {
                issues.extend(
                    unit.warnings
                        .into_iter()
                        .map(|w| Issue::UnsupportedComponent(w.into())),
                );
                units.push(UnitSummary {
                    file_path: unit.display_path,
                    metadata: unit.metadata,
                    catalog_path: unit.catalog_path,
                });
            }
            Err(issue) => issues.push(issue),
        }
    }

    let summary = ExtractSummary {
        units,
        json: args.json,
        skipped_count: scan.skipped_count,
    };
    Ok(finish(
        CommandSummary::Extract(summary),
        issues,
        scan.files.len(),
    ))
}

/// CLI flags win over the config file.
fn apply_overrides(config: &mut Config, args: &ExtractArgs, cwd: &Path) {
    if let Some(ref source_root) = args.source_root {
        config.source_root = source_root.to_string_lossy().to_string();
    }
    if let Some(ref messages_dir) = args.messages_dir {
        config.messages_dir = Some(cwd.join(messages_dir).to_string_lossy().to_string());
    }
    if let Some(ref module_source_name) = args.module_source_name {
        config.module_source_name = module_source_name.clone();
    }
    if args.enforce_descriptions {
        config.enforce_descriptions = true;
    }
    if args.extract_source_location {
        config.extract_source_location = true;
    }
}

/// Explicit files are taken as-is; directories are scanned.
fn collect_paths(paths: &[PathBuf], cwd: &Path, options: &ScanOptions<'_>) -> ScanResult {
    let mut result = ScanResult::default();
    for path in paths {
        let path = cwd.join(path);
        if path.is_dir() {
            let scanned = scan_files(&path, options);
            result.files.extend(scanned.files);
            result.skipped_count += scanned.skipped_count;
        } else if is_source_file(&path) {
            result.files.push(path);
        } else {
            warn!(path = %path.display(), "not a source file");
            result.skipped_count += 1;
        }
    }
    result.files.sort();
    result.files.dedup();
    result
}

/// Catalogs are named by file stem, so `a.ts` and `a.tsx` in one directory
/// write to the same catalog. Returns the catalog paths claimed twice.
fn shared_catalog_paths(files: &[PathBuf], cwd: &Path, messages_dir: &Path) -> Vec<PathBuf> {
    let mut owners: HashMap<PathBuf, &Path> = HashMap::new();
    let mut shared = Vec::new();
    for file in files {
        let catalog = catalog_path(file, cwd, messages_dir);
        if let Some(first) = owners.get(&catalog) {
            warn!(
                catalog = %catalog.display(),
                first = %display_path(first, cwd),
                second = %display_path(file, cwd),
                "units share a catalog path, one catalog will overwrite the other"
            );
            shared.push(catalog);
        } else {
            owners.insert(catalog, file);
        }
    }
    shared
}

fn run_unit(path: &Path, options: &ExtractOptions, cwd: &Path) -> Result<ExtractedUnit, Issue> {
    let file_path = display_path(path, cwd);
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
        .map_err(|e| {
            Issue::IoError(IoErrorIssue {
                file_path: file_path.clone(),
                error: format!("{:#}", e),
            })
        })?;

    extract_unit(path, source, options, cwd).map_err(|e| {
        warn!(file = %file_path, "skipping unit");
        Issue::from_unit_error(&file_path, e)
    })
}

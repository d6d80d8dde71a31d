//! One compilation unit, end to end: parse → collect → walk → emit.
//!
//! Units share no state, so callers may run them in parallel. Any fatal error
//! aborts the unit before its catalog is written.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use swc_common::SourceMap;
use swc_ecma_ast::Module;
use thiserror::Error;
use tracing::debug;

use crate::core::collect::UnitCollector;
use crate::core::emit::{self, UnitMetadata};
use crate::core::evaluate::ConstEvaluator;
use crate::core::extract::{ExtractionError, ExtractionWarning, Extractor, ExtractorOptions, walk};
use crate::core::parsers::jsx::parse_jsx_source;

#[derive(Debug, Error)]
pub enum UnitError {
    #[error("{file_path}:{line}:{col}: {message}")]
    Parse {
        file_path: String,
        line: usize,
        col: usize,
        message: String,
    },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Options for a whole extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub extractor: ExtractorOptions,
    /// Persist catalogs under this directory when set.
    pub messages_dir: Option<PathBuf>,
}

/// A successfully extracted unit.
pub struct ExtractedUnit {
    pub path: PathBuf,
    /// `path` relative to the working directory, as shown in diagnostics.
    pub display_path: String,
    /// The tree after extraction, with `description` attributes removed.
    pub module: Module,
    pub metadata: UnitMetadata,
    /// Where the catalog was written, if it was.
    pub catalog_path: Option<PathBuf>,
    pub warnings: Vec<ExtractionWarning>,
}

/// Path of `path` relative to `cwd` for display, falling back to `path` itself.
pub fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

pub fn extract_unit(
    path: &Path,
    source: String,
    options: &ExtractOptions,
    cwd: &Path,
) -> Result<ExtractedUnit, UnitError> {
    let display_path = display_path(path, cwd);
    let parsed = parse_jsx_source(source, &display_path, Arc::new(SourceMap::default()))?;
    let mut module = parsed.module;

    let collected = UnitCollector::collect(&module);
    let evaluator = ConstEvaluator::new(&collected.constants);
    let mut extractor = Extractor::new(
        &options.extractor,
        &evaluator,
        &collected.imports,
        &display_path,
        parsed.source_map.clone(),
    );

    walk(&mut module, &mut extractor)?;
    let (store, warnings) = extractor.finish();
    let metadata = UnitMetadata {
        messages: store.into_messages(),
    };
    debug!(
        file = %display_path,
        messages = metadata.messages.len(),
        "extracted unit"
    );

    let catalog_path = emit::emit(&metadata, path, cwd, options.messages_dir.as_deref())?;

    Ok(ExtractedUnit {
        path: path.to_path_buf(),
        display_path,
        module,
        metadata,
        catalog_path,
        warnings,
    })
}

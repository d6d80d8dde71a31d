//! Catalog Emitter.
//!
//! A unit's metadata is `{ "messages": [...] }` under [`METADATA_KEY`]. When a
//! messages directory is configured, the same list is also written to
//! `<messagesDir>/<dir of unit>/<unit stem>.json`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::data::MessageDescriptor;
use crate::core::unit::UnitError;

/// Key the unit metadata is published under.
pub const METADATA_KEY: &str = "react-intl";

/// Extension of persisted catalogs.
pub const CATALOG_EXTENSION: &str = "json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitMetadata {
    pub messages: Vec<MessageDescriptor>,
}

/// Destination of a unit's catalog.
///
/// The unit path is taken relative to `cwd`; units outside `cwd` keep only
/// their normal path components so they still land inside `messages_dir`.
pub fn catalog_path(unit_path: &Path, cwd: &Path, messages_dir: &Path) -> PathBuf {
    let relative: PathBuf = match unit_path.strip_prefix(cwd) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => unit_path
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect(),
    };

    let mut path = messages_dir.to_path_buf();
    if let Some(parent) = relative.parent()
        && !parent.as_os_str().is_empty()
    {
        path.push(parent);
    }
    let stem = relative.file_stem().unwrap_or(relative.as_os_str());
    path.push(format!("{}.{}", stem.to_string_lossy(), CATALOG_EXTENSION));
    path
}

/// Write `messages` as a 2-space indented JSON array, creating parent
/// directories as needed.
pub fn write_catalog(path: &Path, messages: &[MessageDescriptor]) -> Result<(), UnitError> {
    let mut content = serde_json::to_string_pretty(messages)?;
    content.push('\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| UnitError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| UnitError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = messages.len(), "wrote catalog");
    Ok(())
}

/// Persist the unit's catalog if a directory is configured and there is
/// something to write. Returns the written path.
pub fn emit(
    metadata: &UnitMetadata,
    unit_path: &Path,
    cwd: &Path,
    messages_dir: Option<&Path>,
) -> Result<Option<PathBuf>, UnitError> {
    let Some(messages_dir) = messages_dir else {
        return Ok(None);
    };
    if metadata.messages.is_empty() {
        return Ok(None);
    }

    let path = catalog_path(unit_path, cwd, messages_dir);
    write_catalog(&path, &metadata.messages)?;
    Ok(Some(path))
}

//! Per-unit collection pass.
//!
//! Runs once over a parsed unit before the extraction walk and gathers the
//! facts the host capabilities answer from:
//!
//! - `collector`: `UnitCollector`, the single-pass visitor
//! - `types`: `FileImports` (implements `ReferenceResolver`), `ConstBindings`

pub mod collector;
pub mod types;

pub use collector::UnitCollector;
pub use types::{
    ConstBindings, DEFAULT_IMPORT, FileImports, ImportInfo, NAMESPACE_IMPORT,
    extract_binding_names,
};

//! Core extraction engine.
//!
//! Each compilation unit runs through the same pipeline:
//!
//! 1. `parsers`: parse the source into an swc `Module`
//! 2. `collect`: gather imports and module-level constants
//! 3. `extract`: walk the tree, build, resolve and store descriptors
//! 4. `emit`: publish the unit's metadata and persist its catalog
//!
//! `unit` drives the four steps for one file. `host` declares the
//! capabilities the extractor depends on, with `evaluate` and `collect`
//! providing the default implementations.

pub mod collect;
pub mod data;
pub mod emit;
pub mod evaluate;
pub mod extract;
pub mod file_scanner;
pub mod host;
pub mod message_format;
pub mod parsers;
pub mod unit;

pub use data::{
    COMMENT_SEPARATOR, DescriptorLocation, MessageDescriptor, SourceContext, SourceLocation,
    storage_key,
};
pub use emit::{METADATA_KEY, UnitMetadata};
pub use unit::{ExtractOptions, ExtractedUnit, UnitError, extract_unit};

//! Core data types shared by the extraction pipeline.
//!
//! ## Module Structure
//!
//! - `descriptor`: Catalog records (`MessageDescriptor`, `DescriptorLocation`)
//! - `source`: Source code location types (`SourceContext`, `SourceLocation`)

pub mod descriptor;
pub mod source;

pub use descriptor::{COMMENT_SEPARATOR, DescriptorLocation, MessageDescriptor, storage_key};
pub use source::{SourceContext, SourceLocation};

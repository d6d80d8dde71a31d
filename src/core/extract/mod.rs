//! The extraction engine.
//!
//! Driven by [`walk`], a per-unit [`Extractor`] recognizes message
//! declarations, builds a [`RawDescriptor`] for each one, resolves it into
//! strings, and stores it in the [`ExtractionStore`]:
//!
//! ```text
//! visitor (host walk) → dispatcher → builder → resolver → store
//! ```
//!
//! Recognized shapes:
//!
//! - `<FormattedMessage id=".." description=".." defaultMessage=".." />`
//!   (any of the configured components imported from the configured module)
//! - `<T message=".." comment=".." />`
//! - `t(text, values, comment)`
//! - `defineMessages({ key: { id, description, defaultMessage } })` and
//!   `defineMessage({ .. })`

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod resolver;
pub mod store;
pub mod visitor;


pub use builder::{DescriptorProp, DescriptorShape, RawDescriptor, ValueRef};
pub use dispatcher::{
    DEFAULT_COMPONENT_NAMES, DEFAULT_MODULE_SOURCE_NAME, ExtractionWarning, Extractor,
    ExtractorOptions, PLURAL_COMPONENT, unsupported_component_message,
};
pub use error::{ExtractionError, ExtractionErrorKind, SpannedError};
pub use resolver::{ResolvedDescriptor, resolve};
pub use store::ExtractionStore;
pub use visitor::{ExtractionVisitor, walk};

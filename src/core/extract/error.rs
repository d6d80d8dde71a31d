use swc_common::Span;
use thiserror::Error;

use crate::core::data::SourceContext;
use crate::core::message_format::MessageFormatError;

/// What went wrong while extracting a descriptor.
///
/// Every kind is fatal to the current unit. Unsupported components are not
/// errors at all and are reported as warnings by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionErrorKind {
    #[error("Messages must be statically evaluate-able for extraction (`{property}` is dynamic).")]
    StaticEvaluationFailure { property: String },

    #[error("Message failed to parse. See: https://formatjs.io/docs/core-concepts/icu-syntax\n{0}")]
    MessageSyntaxError(MessageFormatError),

    /// A `MessageSyntaxError` raised for a raw JSX attribute string that uses
    /// backslash escapes, which JSX does not process.
    #[error(
        "Message failed to parse. It looks like `\\`s were used for escaping, this won't work with JSX string literals. Wrap with `{{}}`. See: http://facebook.github.io/react/docs/jsx-gotchas.html\n{0}"
    )]
    JsxEscapeSyntaxError(MessageFormatError),

    #[error("Message Descriptors require an `id` and `defaultMessage` (missing `{field}`).")]
    MissingRequiredField { field: &'static str },

    #[error("Message must have a `description`.")]
    MissingDescription,

    #[error(
        "Duplicate message id: \"{id}\", but the `description` and/or `defaultMessage` are different."
    )]
    DuplicateIdConflict { id: String },
}

impl ExtractionErrorKind {
    /// Attach the span of the node the error belongs to.
    pub fn at(self, span: Span) -> SpannedError {
        SpannedError { kind: self, span }
    }
}

/// An error still pointing into the AST; the dispatcher turns it into an
/// [`ExtractionError`] once it knows the unit's source map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedError {
    pub kind: ExtractionErrorKind,
    pub span: Span,
}

/// A fatal, node-located extraction error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}:{}:{}: {kind}", .context.file_path(), .context.line(), .context.col())]
pub struct ExtractionError {
    pub kind: ExtractionErrorKind,
    pub context: SourceContext,
}

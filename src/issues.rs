//! Diagnostics produced by an extraction run.
//!
//! Every failure or warning a unit can produce becomes an [`Issue`]. The CLI
//! only talks to issues through the [`Report`] trait, so library users can
//! format them however they like.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::extract::{
    ExtractionError, ExtractionErrorKind, ExtractionWarning, unsupported_component_message,
};
use crate::core::{SourceContext, SourceLocation, UnitError};

// ============================================================
// Severity & Rule
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    StaticEvaluation,
    MessageSyntax,
    MissingField,
    MissingDescription,
    DuplicateId,
    UnsupportedComponent,
    ParseError,
    IoError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::StaticEvaluation => write!(f, "static-evaluation"),
            Rule::MessageSyntax => write!(f, "message-syntax"),
            Rule::MissingField => write!(f, "missing-field"),
            Rule::MissingDescription => write!(f, "missing-description"),
            Rule::DuplicateId => write!(f, "duplicate-id"),
            Rule::UnsupportedComponent => write!(f, "unsupported-component"),
            Rule::ParseError => write!(f, "parse-error"),
            Rule::IoError => write!(f, "io-error"),
        }
    }
}

impl From<&ExtractionErrorKind> for Rule {
    fn from(kind: &ExtractionErrorKind) -> Self {
        match kind {
            ExtractionErrorKind::StaticEvaluationFailure { .. } => Rule::StaticEvaluation,
            ExtractionErrorKind::MessageSyntaxError(_)
            | ExtractionErrorKind::JsxEscapeSyntaxError(_) => Rule::MessageSyntax,
            ExtractionErrorKind::MissingRequiredField { .. } => Rule::MissingField,
            ExtractionErrorKind::MissingDescription => Rule::MissingDescription,
            ExtractionErrorKind::DuplicateIdConflict { .. } => Rule::DuplicateId,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A fatal extraction error; the unit produced no catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionIssue {
    pub context: SourceContext,
    pub kind: ExtractionErrorKind,
}

impl ExtractionIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule(&self) -> Rule {
        Rule::from(&self.kind)
    }
}

impl From<ExtractionError> for ExtractionIssue {
    fn from(error: ExtractionError) -> Self {
        Self {
            context: error.context,
            kind: error.kind,
        }
    }
}

/// A recognized component whose default message is not extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedComponentIssue {
    pub context: SourceContext,
    pub component: String,
}

impl UnsupportedComponentIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnsupportedComponent
    }
}

impl From<ExtractionWarning> for UnsupportedComponentIssue {
    fn from(warning: ExtractionWarning) -> Self {
        Self {
            context: warning.context,
            component: warning.component,
        }
    }
}

/// Unit could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub location: SourceLocation,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

/// Unit could not be read, or its catalog could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl IoErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::IoError
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Extraction(ExtractionIssue),
    UnsupportedComponent(UnsupportedComponentIssue),
    ParseError(ParseErrorIssue),
    IoError(IoErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Extraction(_) => ExtractionIssue::severity(),
            Issue::UnsupportedComponent(_) => UnsupportedComponentIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
            Issue::IoError(_) => IoErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Extraction(issue) => issue.rule(),
            Issue::UnsupportedComponent(_) => UnsupportedComponentIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
            Issue::IoError(_) => IoErrorIssue::rule(),
        }
    }

    /// The issue a failed unit is reported as.
    pub fn from_unit_error(file_path: &str, error: UnitError) -> Self {
        match error {
            UnitError::Parse {
                file_path,
                line,
                col,
                message,
            } => Issue::ParseError(ParseErrorIssue {
                location: SourceLocation::new(file_path, line, col),
                error: message,
            }),
            UnitError::Extraction(error) => Issue::Extraction(error.into()),
            UnitError::Io { .. } | UnitError::Serialize(_) => Issue::IoError(IoErrorIssue {
                file_path: file_path.to_string(),
                error: error.to_string(),
            }),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location with the offending line.
    Source(&'a SourceContext),
    /// A position without line context.
    Position(&'a SourceLocation),
    /// File-level only.
    File { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn file_path(&self) -> &str {
        match self {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::Position(loc) => &loc.file_path,
            ReportLocation::File { path } => path,
        }
    }

    /// Line and column; `(0, 0)` for file-level issues.
    pub fn line_col(&self) -> (usize, usize) {
        match self {
            ReportLocation::Source(ctx) => (ctx.line(), ctx.col()),
            ReportLocation::Position(loc) => (loc.line, loc.col),
            ReportLocation::File { .. } => (0, 0),
        }
    }
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary, single-line message.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for ExtractionIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        let text = self.kind.to_string();
        match text.split_once('\n') {
            Some((first, _)) => first.to_string(),
            None => text,
        }
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule()
    }

    fn hint(&self) -> Option<&str> {
        match self.kind {
            ExtractionErrorKind::StaticEvaluationFailure { .. } => {
                Some("use string literals, or `const` bindings of string literals")
            }
            ExtractionErrorKind::DuplicateIdConflict { .. } => {
                Some("give one of the messages a different `id`")
            }
            _ => None,
        }
    }

    /// The message-format diagnostic behind a syntax error.
    fn details(&self) -> Option<String> {
        self.kind
            .to_string()
            .split_once('\n')
            .map(|(_, rest)| rest.to_string())
    }
}

impl Report for UnsupportedComponentIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        unsupported_component_message(&self.component)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Position(&self.location)
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for IoErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let (a, b) = (self.location(), other.location());
        a.file_path()
            .cmp(b.file_path())
            .then_with(|| a.line_col().cmp(&b.line_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================

//! ICU message-format validation.
//!
//! `defaultMessage` values are parsed into a small AST and printed back in a
//! canonical form, which is what ends up in the catalog:
//!
//! ```
//! use intl_extract::core::message_format::canonicalize;
//!
//! let canonical = canonicalize("{count,plural,one{# item}other{# items}}").unwrap();
//! assert_eq!(canonical, "{count, plural, one {# item} other {# items}}");
//! ```

pub mod ast;
mod error;
mod parser;
mod printer;

#[cfg(test)]
mod tests;

pub use ast::{Element, FormatKind, Message, MessageOption, PluralKind};
pub use error::MessageFormatError;
pub use parser::parse;
pub use printer::print;

/// Parse `input` and re-serialize it canonically.
pub fn canonicalize(input: &str) -> Result<String, MessageFormatError> {
    parse(input).map(|message| print(&message))
}

//! intl-extract - react-intl message descriptor extractor
//!
//! Walks JSX/TSX sources, finds message declarations (`<FormattedMessage>`,
//! the `<T>` / `t()` shorthands and `defineMessages`), validates their
//! ICU default messages, and collects them into one catalog per source file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parse, collect, extract, emit)
//! - `issues`: Diagnostic types and the `Report` trait

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;

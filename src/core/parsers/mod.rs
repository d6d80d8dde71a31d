//! Source parsers.
//!
//! - `jsx`: JSX/TSX/JS/TS compilation unit parser (uses swc for AST generation)

pub mod jsx;

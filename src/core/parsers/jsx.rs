use std::path::Path;
use std::sync::Arc;

use swc_common::{FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::unit::UnitError;

/// A parsed compilation unit together with the source map its spans point into.
pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Pick the parser syntax for a file from its extension.
///
/// `.ts` files are parsed without JSX so that `<T>expr` type assertions keep
/// working; everything else accepts JSX.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        }),
        Some("js" | "jsx" | "mjs" | "cjs") => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        _ => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
    }
}

/// Parse JSX/TSX source code string into an AST.
///
/// Accepts a shared SourceMap; each unit normally gets its own so that units
/// can be parsed on different threads.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedJSX, UnitError> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser.parse_module().map_err(|e| {
            let loc = source_map.lookup_char_pos(e.span().lo);
            UnitError::Parse {
                file_path: file_path.to_string(),
                line: loc.line,
                col: loc.col_display + 1,
                message: e.kind().msg().to_string(),
            }
        })?;

        // Recoverable syntax errors still leave a usable module behind, but an
        // extraction over a half-parsed unit could silently miss messages.
        if let Some(e) = parser.take_errors().into_iter().next() {
            let loc = source_map.lookup_char_pos(e.span().lo);
            return Err(UnitError::Parse {
                file_path: file_path.to_string(),
                line: loc.line,
                col: loc.col_display + 1,
                message: e.kind().msg().to_string(),
            });
        }

        Ok(ParsedJSX { module, source_map })
    })
}

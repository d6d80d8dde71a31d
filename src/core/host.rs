//! Capabilities the extraction core consumes but does not implement.
//!
//! The dispatcher never inspects bindings or folds expressions itself. It asks
//! a [`StaticEvaluator`] to collapse an expression to a literal and a
//! [`ReferenceResolver`] whether an identifier names an import. The default
//! implementations live in `core::evaluate` (`ConstEvaluator`) and
//! `core::collect` (`FileImports`); tests substitute their own.

use std::fmt;

use swc_ecma_ast::Expr;

/// A literal value produced by static evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum StaticValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Null,
    Undefined,
}

impl StaticValue {
    /// JavaScript `ToString` semantics for the supported literal kinds.
    pub fn to_js_string(&self) -> String {
        match self {
            StaticValue::Str(s) => s.clone(),
            StaticValue::Num(n) => format_number(*n),
            StaticValue::Bool(b) => b.to_string(),
            StaticValue::Null => "null".to_string(),
            StaticValue::Undefined => "undefined".to_string(),
        }
    }

    /// JavaScript truthiness, used by the `!` operator.
    pub fn is_truthy(&self) -> bool {
        match self {
            StaticValue::Str(s) => !s.is_empty(),
            StaticValue::Num(n) => *n != 0.0 && !n.is_nan(),
            StaticValue::Bool(b) => *b,
            StaticValue::Null | StaticValue::Undefined => false,
        }
    }
}

impl fmt::Display for StaticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js_string())
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Outcome of a static evaluation request.
///
/// `value` is only meaningful when `confident` is true; a non-confident result
/// means the expression depends on something only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub confident: bool,
    pub value: Option<StaticValue>,
}

impl Evaluation {
    pub fn confident(value: StaticValue) -> Self {
        Self {
            confident: true,
            value: Some(value),
        }
    }

    pub fn unknown() -> Self {
        Self {
            confident: false,
            value: None,
        }
    }

    /// The value if, and only if, evaluation was confident.
    pub fn into_value(self) -> Option<StaticValue> {
        if self.confident { self.value } else { None }
    }
}

/// Collapses an expression node to a literal, or reports that it cannot.
pub trait StaticEvaluator {
    fn evaluate(&self, expr: &Expr) -> Evaluation;
}

/// Answers "does this local name refer to import `imported` from `module`?"
pub trait ReferenceResolver {
    fn refers_to_import(&self, local: &str, module: &str, imported: &str) -> bool;

    /// For `<Ns.Member>` tags: is `local` a namespace import of `module`?
    fn is_namespace_import(&self, local: &str, module: &str) -> bool;

    /// The imported name `local` is bound to, if it is a named import of `module`.
    fn imported_name(&self, local: &str, module: &str) -> Option<&str>;
}

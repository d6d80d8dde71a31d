//! Default `StaticEvaluator`: a small constant folder.
//!
//! Supported shapes:
//!
//! ```ignore
//! "text"                     → Str("text")
//! `no ${"sub"}stitution`     → Str("no substitution")
//! "a" + 1 + `b`              → Str("a1b")
//! (("x" as const))           → Str("x")
//! -1, +"2", !0               → Num(-1), Num(2), Bool(true)
//! GREETING                   → value of a module-level `const GREETING = ...`
//! ```
//!
//! Everything else (calls, member access, non-const identifiers, arithmetic
//! beyond `+`) is reported as not confident.

use std::collections::HashSet;

use swc_ecma_ast::{BinaryOp, Expr, Lit, Tpl, UnaryOp};

use crate::core::collect::ConstBindings;
use crate::core::host::{Evaluation, StaticEvaluator, StaticValue};

/// Evaluates expressions against the module-level constants of one unit.
pub struct ConstEvaluator<'a> {
    constants: &'a ConstBindings,
}

impl<'a> ConstEvaluator<'a> {
    pub fn new(constants: &'a ConstBindings) -> Self {
        Self { constants }
    }

    fn eval(&self, expr: &Expr, resolving: &mut HashSet<String>) -> Option<StaticValue> {
        match expr {
            Expr::Lit(lit) => eval_lit(lit),
            Expr::Tpl(tpl) => self.eval_tpl(tpl, resolving),
            Expr::Paren(paren) => self.eval(&paren.expr, resolving),
            Expr::TsAs(ts) => self.eval(&ts.expr, resolving),
            Expr::TsSatisfies(ts) => self.eval(&ts.expr, resolving),
            Expr::TsTypeAssertion(ts) => self.eval(&ts.expr, resolving),
            Expr::TsConstAssertion(ts) => self.eval(&ts.expr, resolving),
            Expr::TsNonNull(ts) => self.eval(&ts.expr, resolving),
            Expr::Bin(bin) if bin.op == BinaryOp::Add => {
                let left = self.eval(&bin.left, resolving)?;
                let right = self.eval(&bin.right, resolving)?;
                Some(add(left, right))
            }
            Expr::Unary(unary) => {
                let arg = self.eval(&unary.arg, resolving)?;
                eval_unary(unary.op, arg)
            }
            Expr::Ident(ident) => {
                let name = ident.sym.as_str();
                if name == "undefined" && self.constants.get(name).is_none() {
                    return Some(StaticValue::Undefined);
                }
                let init = self.constants.get(name)?;
                // Guard against `const a = b; const b = a;`.
                if !resolving.insert(name.to_string()) {
                    return None;
                }
                let value = self.eval(init, resolving);
                resolving.remove(name);
                value
            }
            _ => None,
        }
    }

    fn eval_tpl(&self, tpl: &Tpl, resolving: &mut HashSet<String>) -> Option<StaticValue> {
        let mut out = String::new();
        for (index, quasi) in tpl.quasis.iter().enumerate() {
            let cooked = quasi.cooked.as_ref()?;
            out.push_str(&cooked.to_string_lossy());
            if let Some(expr) = tpl.exprs.get(index) {
                let value = self.eval(expr, resolving)?;
                out.push_str(&value.to_js_string());
            }
        }
        Some(StaticValue::Str(out))
    }
}

impl StaticEvaluator for ConstEvaluator<'_> {
    fn evaluate(&self, expr: &Expr) -> Evaluation {
        match self.eval(expr, &mut HashSet::new()) {
            Some(value) => Evaluation::confident(value),
            None => Evaluation::unknown(),
        }
    }
}

fn eval_lit(lit: &Lit) -> Option<StaticValue> {
    match lit {
        Lit::Str(s) => Some(StaticValue::Str(s.value.to_string_lossy().to_string())),
        Lit::Num(n) => Some(StaticValue::Num(n.value)),
        Lit::Bool(b) => Some(StaticValue::Bool(b.value)),
        Lit::Null(_) => Some(StaticValue::Null),
        _ => None,
    }
}

fn eval_unary(op: UnaryOp, arg: StaticValue) -> Option<StaticValue> {
    match op {
        UnaryOp::Bang => Some(StaticValue::Bool(!arg.is_truthy())),
        UnaryOp::Minus => to_number(&arg).map(|n| StaticValue::Num(-n)),
        UnaryOp::Plus => to_number(&arg).map(StaticValue::Num),
        _ => None,
    }
}

/// JavaScript `+`: string concatenation if either side is a string, else numeric.
fn add(left: StaticValue, right: StaticValue) -> StaticValue {
    match (&left, &right) {
        (StaticValue::Str(_), _) | (_, StaticValue::Str(_)) => {
            StaticValue::Str(format!("{}{}", left.to_js_string(), right.to_js_string()))
        }
        _ => match (to_number(&left), to_number(&right)) {
            (Some(l), Some(r)) => StaticValue::Num(l + r),
            _ => StaticValue::Num(f64::NAN),
        },
    }
}

fn to_number(value: &StaticValue) -> Option<f64> {
    match value {
        StaticValue::Num(n) => Some(*n),
        StaticValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        StaticValue::Null => Some(0.0),
        StaticValue::Undefined => Some(f64::NAN),
        StaticValue::Str(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                Some(trimmed.parse::<f64>().unwrap_or(f64::NAN))
            }
        }
    }
}

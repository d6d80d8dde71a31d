//! Descriptor Resolver: evaluates every value of a [`RawDescriptor`] and runs
//! `defaultMessage` through the message-format validator.

use swc_ecma_ast::{Expr, JSXAttrValue, JSXExpr};

use super::builder::{DescriptorProp, RawDescriptor, ValueRef};
use super::error::{ExtractionErrorKind, SpannedError};
use crate::core::host::{Evaluation, StaticEvaluator, StaticValue};
use crate::core::message_format;

/// A descriptor whose values are all known strings.
///
/// Fields are trimmed; a field that trims to nothing is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDescriptor {
    pub id: Option<String>,
    pub description: Option<String>,
    pub default_message: Option<String>,
    pub comment: Option<String>,
}

pub fn resolve(
    raw: &RawDescriptor<'_>,
    evaluator: &dyn StaticEvaluator,
) -> Result<ResolvedDescriptor, SpannedError> {
    let mut resolved = ResolvedDescriptor::default();

    for (prop, value) in raw.iter() {
        let text = evaluate_text(prop, value, evaluator)?;
        match prop {
            DescriptorProp::Id => resolved.id = text,
            DescriptorProp::Description => resolved.description = text,
            DescriptorProp::Comment => resolved.comment = text,
            DescriptorProp::DefaultMessage => {
                resolved.default_message = match text {
                    Some(text) => Some(canonicalize_message(&text, value)?),
                    None => None,
                }
            }
        }
    }

    Ok(resolved)
}

/// Evaluate a value to trimmed text, failing if it is not a constant.
fn evaluate_text(
    prop: DescriptorProp,
    value: ValueRef<'_>,
    evaluator: &dyn StaticEvaluator,
) -> Result<Option<String>, SpannedError> {
    let Some(value_text) = evaluate(value, evaluator).into_value() else {
        return Err(ExtractionErrorKind::StaticEvaluationFailure {
            property: prop.as_str().to_string(),
        }
        .at(value.span()));
    };

    let text = value_text.to_js_string();
    let trimmed = text.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

fn evaluate(value: ValueRef<'_>, evaluator: &dyn StaticEvaluator) -> Evaluation {
    match value {
        ValueRef::Attr { value: None, .. } => Evaluation::confident(StaticValue::Bool(true)),
        ValueRef::Attr {
            value: Some(JSXAttrValue::Str(s)),
            ..
        } => Evaluation::confident(StaticValue::Str(s.value.to_string_lossy().to_string())),
        ValueRef::Attr {
            value: Some(JSXAttrValue::JSXExprContainer(container)),
            ..
        } => match &container.expr {
            JSXExpr::Expr(expr) => evaluator.evaluate(expr),
            JSXExpr::JSXEmptyExpr(_) => Evaluation::unknown(),
        },
        ValueRef::Attr { .. } => Evaluation::unknown(),
        ValueRef::Expr(expr) => evaluator.evaluate(expr),
        ValueRef::Ident(ident) => evaluator.evaluate(&Expr::Ident(ident.clone())),
    }
}

fn canonicalize_message(text: &str, value: ValueRef<'_>) -> Result<String, SpannedError> {
    message_format::canonicalize(text).map_err(|error| {
        let kind = if is_raw_attr_string(value) && text.contains("\\\\") {
            ExtractionErrorKind::JsxEscapeSyntaxError(error)
        } else {
            ExtractionErrorKind::MessageSyntaxError(error)
        };
        kind.at(value.span())
    })
}

/// `defaultMessage="..."`, as opposed to `defaultMessage={"..."}`.
fn is_raw_attr_string(value: ValueRef<'_>) -> bool {
    matches!(
        value,
        ValueRef::Attr {
            value: Some(JSXAttrValue::Str(_)),
            ..
        }
    )
}

//! Descriptor Builder: turns a recognized node's key/value pairs into a
//! [`RawDescriptor`] using the key mapping of its shape.

use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    Expr, ExprOrSpread, Ident, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, ObjectLit, Prop,
    PropName, PropOrSpread,
};

use super::error::{ExtractionErrorKind, SpannedError};
use crate::core::host::{StaticEvaluator, StaticValue};

/// Tag name of the shorthand element.
pub const SHORTHAND_ELEMENT: &str = "T";
/// Callee name of the shorthand call.
pub const SHORTHAND_CALL: &str = "t";
/// Shorthand key providing both `id` and `defaultMessage`.
pub const SHORTHAND_MESSAGE_KEY: &str = "message";
/// Shorthand key providing the disambiguation comment.
pub const SHORTHAND_COMMENT_KEY: &str = "comment";
/// Translator metadata stripped from the tree after extraction.
pub const DESCRIPTION_KEY: &str = "description";

/// The descriptor fields a key can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorProp {
    Id,
    Description,
    DefaultMessage,
    Comment,
}

impl DescriptorProp {
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptorProp::Id => "id",
            DescriptorProp::Description => "description",
            DescriptorProp::DefaultMessage => "defaultMessage",
            DescriptorProp::Comment => "comment",
        }
    }
}

/// How a node's keys map onto descriptor fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorShape {
    /// `<T message="..." comment="..." />`
    Shorthand,
    /// `<FormattedMessage id=".." description=".." defaultMessage=".." />` and
    /// descriptor objects.
    Standard,
}

impl DescriptorShape {
    pub fn map_key(&self, key: &str) -> &'static [DescriptorProp] {
        match (self, key) {
            (DescriptorShape::Shorthand, SHORTHAND_MESSAGE_KEY) => {
                &[DescriptorProp::Id, DescriptorProp::DefaultMessage]
            }
            (DescriptorShape::Shorthand, SHORTHAND_COMMENT_KEY) => &[DescriptorProp::Comment],
            (DescriptorShape::Standard, "id") => &[DescriptorProp::Id],
            (DescriptorShape::Standard, DESCRIPTION_KEY) => &[DescriptorProp::Description],
            (DescriptorShape::Standard, "defaultMessage") => &[DescriptorProp::DefaultMessage],
            _ => &[],
        }
    }
}

/// An unresolved pointer to a value in the tree.
#[derive(Debug, Clone, Copy)]
pub enum ValueRef<'a> {
    /// A JSX attribute value; `None` for a bare attribute like `<T message />`.
    Attr {
        value: Option<&'a JSXAttrValue>,
        span: Span,
    },
    Expr(&'a Expr),
    /// The value of a shorthand object property (`{ id }`).
    Ident(&'a Ident),
}

impl ValueRef<'_> {
    pub fn span(&self) -> Span {
        match self {
            ValueRef::Attr { span, .. } => *span,
            ValueRef::Expr(expr) => expr.span(),
            ValueRef::Ident(ident) => ident.span,
        }
    }
}

/// Descriptor fields mapped to the tree nodes holding their values.
///
/// A repeated key replaces the earlier value, like a repeated object key.
#[derive(Debug, Clone, Default)]
pub struct RawDescriptor<'a> {
    props: Vec<(DescriptorProp, ValueRef<'a>)>,
}

impl<'a> RawDescriptor<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, prop: DescriptorProp, value: ValueRef<'a>) {
        match self.props.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.props.push((prop, value)),
        }
    }

    pub fn get(&self, prop: DescriptorProp) -> Option<ValueRef<'a>> {
        self.props
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, value)| *value)
    }

    pub fn has(&self, prop: DescriptorProp) -> bool {
        self.get(prop).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DescriptorProp, ValueRef<'a>)> + '_ {
        self.props.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    fn insert_key(&mut self, shape: DescriptorShape, key: &str, value: ValueRef<'a>) {
        for prop in shape.map_key(key) {
            self.insert(*prop, value);
        }
    }

    /// Build from an element's direct attributes. Spread attributes are skipped.
    pub fn from_jsx_attrs(attrs: &'a [JSXAttrOrSpread], shape: DescriptorShape) -> Self {
        let mut raw = Self::new();
        for attr in attrs {
            let JSXAttrOrSpread::JSXAttr(attr) = attr else {
                continue;
            };
            let key = jsx_attr_name(&attr.name);
            raw.insert_key(
                shape,
                &key,
                ValueRef::Attr {
                    value: attr.value.as_ref(),
                    span: attr.span,
                },
            );
        }
        raw
    }

    /// Build from a descriptor object literal (`{ id, description, defaultMessage }`).
    ///
    /// Non-identifier keys are statically evaluated, so `{ ["id"]: "x" }` works.
    pub fn from_object(
        object: &'a ObjectLit,
        shape: DescriptorShape,
        evaluator: &dyn StaticEvaluator,
    ) -> Result<Self, SpannedError> {
        let mut raw = Self::new();
        for prop in &object.props {
            let PropOrSpread::Prop(prop) = prop else {
                continue;
            };
            match &**prop {
                Prop::KeyValue(kv) => {
                    let key = prop_key(&kv.key, evaluator)?;
                    raw.insert_key(shape, &key, ValueRef::Expr(&kv.value));
                }
                Prop::Shorthand(ident) => {
                    raw.insert_key(shape, ident.sym.as_str(), ValueRef::Ident(ident));
                }
                _ => {}
            }
        }
        Ok(raw)
    }

    /// Build from the arguments of `t(text, values, comment)`.
    pub fn from_call_args(args: &'a [ExprOrSpread]) -> Self {
        let mut raw = Self::new();
        let positional = |index: usize| {
            args.get(index)
                .filter(|arg| arg.spread.is_none())
                .map(|arg| ValueRef::Expr(&arg.expr))
        };

        if let Some(text) = positional(0) {
            raw.insert(DescriptorProp::Id, text);
            raw.insert(DescriptorProp::DefaultMessage, text);
        }
        if let Some(comment) = positional(2) {
            raw.insert(DescriptorProp::Comment, comment);
        }
        raw
    }
}

pub fn jsx_attr_name(name: &JSXAttrName) -> String {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

/// Resolve an object key to its name.
pub fn prop_key(key: &PropName, evaluator: &dyn StaticEvaluator) -> Result<String, SpannedError> {
    match key {
        PropName::Ident(ident) => Ok(ident.sym.to_string()),
        PropName::Str(s) => Ok(s.value.to_string_lossy().to_string()),
        PropName::Num(n) => Ok(StaticValue::Num(n.value).to_js_string()),
        PropName::BigInt(b) => Ok(b.value.to_string()),
        PropName::Computed(computed) => evaluator
            .evaluate(&computed.expr)
            .into_value()
            .map(|value| value.to_js_string())
            .ok_or_else(|| {
                ExtractionErrorKind::StaticEvaluationFailure {
                    property: "key".to_string(),
                }
                .at(computed.span)
            }),
    }
}

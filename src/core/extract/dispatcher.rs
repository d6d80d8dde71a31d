//! Traversal Dispatcher: the two entry points the host walk calls.
//!
//! - [`Extractor::on_element`] for opening tags (`<FormattedMessage>`, `<T>`)
//! - [`Extractor::on_call`] for calls (`t(...)`, `defineMessages(...)`)
//!
//! Both are idempotent: a node that was extracted once is remembered by its
//! identity and skipped when the walk reaches it again.

use std::collections::HashSet;
use std::sync::Arc;

use swc_common::{BytePos, SourceMap, Span};
use swc_ecma_ast::{
    CallExpr, Callee, Expr, JSXAttrOrSpread, JSXElementName, JSXObject, JSXOpeningElement,
    ObjectLit, Prop, PropOrSpread,
};
use tracing::warn;

use super::builder::{
    DESCRIPTION_KEY, DescriptorProp, DescriptorShape, RawDescriptor, SHORTHAND_CALL,
    SHORTHAND_ELEMENT, jsx_attr_name, prop_key,
};
use super::error::{ExtractionError, SpannedError};
use super::resolver::{self, ResolvedDescriptor};
use super::store::ExtractionStore;
use crate::core::data::{DescriptorLocation, SourceContext};
use crate::core::host::{ReferenceResolver, StaticEvaluator};

pub const DEFAULT_MODULE_SOURCE_NAME: &str = "react-intl";
pub const DEFAULT_COMPONENT_NAMES: &[&str] = &["FormattedMessage", "FormattedHTMLMessage"];
/// Recognized but never extracted; using it only produces a warning.
pub const PLURAL_COMPONENT: &str = "FormattedPlural";
pub const DEFINE_MESSAGES: &str = "defineMessages";
pub const DEFINE_MESSAGE: &str = "defineMessage";

/// Extraction behaviour shared by every unit of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Module whose exports identify recognized components.
    pub module_source_name: String,
    /// Component exports extracted with the standard key mapping.
    pub component_names: Vec<String>,
    pub enforce_descriptions: bool,
    pub extract_source_location: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            module_source_name: DEFAULT_MODULE_SOURCE_NAME.to_string(),
            component_names: DEFAULT_COMPONENT_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            enforce_descriptions: false,
            extract_source_location: false,
        }
    }
}

/// Non-fatal: a recognized component whose messages are not extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionWarning {
    pub component: String,
    pub context: SourceContext,
}

impl ExtractionWarning {
    pub fn message(&self) -> String {
        unsupported_component_message(&self.component)
    }
}

pub fn unsupported_component_message(component: &str) -> String {
    format!(
        "Default messages are not extracted from <{}>, use <FormattedMessage> instead.",
        component
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum NodeKind {
    Element,
    Call,
}

/// Identity of a tree node: its kind and span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId {
    kind: NodeKind,
    lo: BytePos,
    hi: BytePos,
}

impl NodeId {
    fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            lo: span.lo,
            hi: span.hi,
        }
    }
}

enum ElementMatch {
    Shorthand,
    Component,
    Unsupported(String),
}

enum DefineCall {
    Many,
    One,
}

/// Per-unit extraction state.
pub struct Extractor<'a> {
    options: &'a ExtractorOptions,
    evaluator: &'a dyn StaticEvaluator,
    resolver: &'a dyn ReferenceResolver,
    /// Display path of the unit, used in diagnostics and source locations.
    file_path: &'a str,
    source_map: Arc<SourceMap>,
    store: ExtractionStore,
    processed: HashSet<NodeId>,
    warnings: Vec<ExtractionWarning>,
}

impl<'a> Extractor<'a> {
    pub fn new(
        options: &'a ExtractorOptions,
        evaluator: &'a dyn StaticEvaluator,
        resolver: &'a dyn ReferenceResolver,
        file_path: &'a str,
        source_map: Arc<SourceMap>,
    ) -> Self {
        Self {
            options,
            evaluator,
            resolver,
            file_path,
            source_map,
            store: ExtractionStore::new(options.enforce_descriptions),
            processed: HashSet::new(),
            warnings: Vec::new(),
        }
    }

    pub fn store(&self) -> &ExtractionStore {
        &self.store
    }

    pub fn warnings(&self) -> &[ExtractionWarning] {
        &self.warnings
    }

    pub fn finish(self) -> (ExtractionStore, Vec<ExtractionWarning>) {
        (self.store, self.warnings)
    }

    pub fn on_element(&mut self, node: &mut JSXOpeningElement) -> Result<(), ExtractionError> {
        let node_id = NodeId::new(NodeKind::Element, node.span);
        if self.processed.contains(&node_id) {
            return Ok(());
        }

        let shape = match self.classify_element(&node.name) {
            Some(ElementMatch::Shorthand) => DescriptorShape::Shorthand,
            Some(ElementMatch::Component) => DescriptorShape::Standard,
            Some(ElementMatch::Unsupported(component)) => {
                self.warn_unsupported(component, node.span);
                return Ok(());
            }
            None => return Ok(()),
        };

        let raw = RawDescriptor::from_jsx_attrs(&node.attrs, shape);
        // Completed elsewhere (e.g. `{...messages.greeting}`); not an error.
        if !raw.has(DescriptorProp::DefaultMessage) {
            return Ok(());
        }
        let descriptor = resolver::resolve(&raw, self.evaluator).map_err(|e| self.locate(e))?;

        node.attrs.retain(|attr| match attr {
            JSXAttrOrSpread::JSXAttr(attr) => jsx_attr_name(&attr.name) != DESCRIPTION_KEY,
            JSXAttrOrSpread::SpreadElement(_) => true,
        });

        self.store_descriptor(descriptor, node.span)?;
        self.processed.insert(node_id);
        Ok(())
    }

    pub fn on_call(&mut self, node: &mut CallExpr) -> Result<(), ExtractionError> {
        let node_id = NodeId::new(NodeKind::Call, node.span);
        if self.processed.contains(&node_id) {
            return Ok(());
        }

        let Callee::Expr(callee) = &node.callee else {
            return Ok(());
        };
        let Expr::Ident(callee) = &**callee else {
            return Ok(());
        };

        if callee.sym == SHORTHAND_CALL {
            let raw = RawDescriptor::from_call_args(&node.args);
            let descriptor =
                resolver::resolve(&raw, self.evaluator).map_err(|e| self.locate(e))?;
            self.store_descriptor(descriptor, node.span)?;
            self.processed.insert(node_id);
            return Ok(());
        }

        let define = match self
            .resolver
            .imported_name(&callee.sym, &self.options.module_source_name)
        {
            Some(DEFINE_MESSAGES) => DefineCall::Many,
            Some(DEFINE_MESSAGE) => DefineCall::One,
            _ => return Ok(()),
        };

        let Some(arg) = node.args.first_mut() else {
            return Ok(());
        };
        if arg.spread.is_some() {
            return Ok(());
        }
        let Expr::Object(object) = &mut *arg.expr else {
            return Ok(());
        };

        match define {
            DefineCall::Many => {
                for prop in object.props.iter_mut() {
                    if let PropOrSpread::Prop(prop) = prop
                        && let Prop::KeyValue(kv) = &mut **prop
                        && let Expr::Object(descriptor) = &mut *kv.value
                    {
                        self.on_descriptor_object(descriptor)?;
                    }
                }
            }
            DefineCall::One => self.on_descriptor_object(object)?,
        }

        self.processed.insert(node_id);
        Ok(())
    }

    fn on_descriptor_object(&mut self, object: &mut ObjectLit) -> Result<(), ExtractionError> {
        let raw = RawDescriptor::from_object(object, DescriptorShape::Standard, self.evaluator)
            .map_err(|e| self.locate(e))?;
        if !raw.has(DescriptorProp::DefaultMessage) {
            return Ok(());
        }
        let descriptor = resolver::resolve(&raw, self.evaluator).map_err(|e| self.locate(e))?;

        let evaluator = self.evaluator;
        object.props.retain(|prop| match prop {
            PropOrSpread::Prop(prop) => match &**prop {
                Prop::KeyValue(kv) => {
                    prop_key(&kv.key, evaluator).ok().as_deref() != Some(DESCRIPTION_KEY)
                }
                Prop::Shorthand(ident) => ident.sym != DESCRIPTION_KEY,
                _ => true,
            },
            PropOrSpread::Spread(_) => true,
        });

        self.store_descriptor(descriptor, object.span)
    }

    fn classify_element(&self, name: &JSXElementName) -> Option<ElementMatch> {
        let module = self.options.module_source_name.as_str();
        let exported = match name {
            JSXElementName::Ident(ident) => {
                match self.resolver.imported_name(&ident.sym, module) {
                    Some(imported) => imported,
                    None if ident.sym == SHORTHAND_ELEMENT => {
                        return Some(ElementMatch::Shorthand);
                    }
                    None => return None,
                }
            }
            JSXElementName::JSXMemberExpr(member) => match &member.obj {
                JSXObject::Ident(ns) if self.resolver.is_namespace_import(&ns.sym, module) => {
                    member.prop.sym.as_str()
                }
                _ => return None,
            },
            JSXElementName::JSXNamespacedName(_) => return None,
        };

        if self.options.component_names.iter().any(|c| c == exported) {
            Some(ElementMatch::Component)
        } else if exported == PLURAL_COMPONENT {
            Some(ElementMatch::Unsupported(exported.to_string()))
        } else {
            None
        }
    }

    fn store_descriptor(
        &mut self,
        descriptor: ResolvedDescriptor,
        span: Span,
    ) -> Result<(), ExtractionError> {
        let context = SourceContext::from_span(self.file_path, &self.source_map, span);
        let location = self
            .options
            .extract_source_location
            .then(|| DescriptorLocation {
                file: self.file_path.to_string(),
                line: context.line(),
                column: context.col(),
            });

        match self.store.insert(descriptor, location) {
            Ok(_) => Ok(()),
            Err(kind) => Err(ExtractionError { kind, context }),
        }
    }

    fn warn_unsupported(&mut self, component: String, span: Span) {
        let context = SourceContext::from_span(self.file_path, &self.source_map, span);
        let warning = ExtractionWarning { component, context };
        warn!(
            file = %warning.context.file_path(),
            line = warning.context.line(),
            "{}",
            warning.message()
        );
        self.warnings.push(warning);
    }

    fn locate(&self, error: SpannedError) -> ExtractionError {
        ExtractionError {
            kind: error.kind,
            context: SourceContext::from_span(self.file_path, &self.source_map, error.span),
        }
    }
}

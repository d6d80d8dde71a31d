use swc_ecma_ast::{CallExpr, JSXOpeningElement, Module};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use super::dispatcher::Extractor;
use super::error::ExtractionError;

/// Depth-first walk that feeds opening tags and calls to the dispatcher in
/// document order. The first fatal error stops all further dispatching.
pub struct ExtractionVisitor<'e, 'a> {
    extractor: &'e mut Extractor<'a>,
    error: Option<ExtractionError>,
}

impl<'e, 'a> ExtractionVisitor<'e, 'a> {
    pub fn new(extractor: &'e mut Extractor<'a>) -> Self {
        Self {
            extractor,
            error: None,
        }
    }

    pub fn into_result(self) -> Result<(), ExtractionError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl VisitMut for ExtractionVisitor<'_, '_> {
    fn visit_mut_jsx_opening_element(&mut self, node: &mut JSXOpeningElement) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.extractor.on_element(node) {
            self.error = Some(error);
            return;
        }
        node.visit_mut_children_with(self);
    }

    fn visit_mut_call_expr(&mut self, node: &mut CallExpr) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.extractor.on_call(node) {
            self.error = Some(error);
            return;
        }
        node.visit_mut_children_with(self);
    }
}

/// Run the extractor over a whole module.
pub fn walk(module: &mut Module, extractor: &mut Extractor<'_>) -> Result<(), ExtractionError> {
    let mut visitor = ExtractionVisitor::new(extractor);
    module.visit_mut_with(&mut visitor);
    visitor.into_result()
}

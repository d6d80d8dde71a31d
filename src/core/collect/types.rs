//! Type definitions for the per-unit collection pass.
//!
//! All types in this module are **created** by `UnitCollector` before the
//! extraction walk and **consumed** by the dispatcher (through the
//! `ReferenceResolver` capability) and by `ConstEvaluator`.

use std::collections::{HashMap, HashSet};

use swc_ecma_ast::{Expr, ObjectPatProp, Pat};

use crate::core::host::ReferenceResolver;

/// Imported name recorded for `import * as ns from "..."`.
pub const NAMESPACE_IMPORT: &str = "*";

/// Imported name recorded for `import x from "..."`.
pub const DEFAULT_IMPORT: &str = "default";

/// Import statement information used to resolve JSX tags and callees.
///
/// Tracks how names are imported so we can answer questions like:
/// ```typescript
/// import { FormattedMessage as FM } from "react-intl";
/// <FM id="a" defaultMessage="A" /> // `FM` refers to `FormattedMessage`
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportInfo {
    /// Local name in the importing file (e.g., "FM").
    pub local_name: String,
    /// Original exported name (e.g., "FormattedMessage", "default" or "*").
    pub imported_name: String,
    /// Import source (e.g., "react-intl").
    pub module_path: String,
}

/// All imports for a single unit, in declaration order.
pub type FileImports = Vec<ImportInfo>;

impl ReferenceResolver for FileImports {
    fn refers_to_import(&self, local: &str, module: &str, imported: &str) -> bool {
        self.imported_name(local, module) == Some(imported)
    }

    fn is_namespace_import(&self, local: &str, module: &str) -> bool {
        self.iter().any(|info| {
            info.local_name == local
                && info.module_path == module
                && info.imported_name == NAMESPACE_IMPORT
        })
    }

    fn imported_name(&self, local: &str, module: &str) -> Option<&str> {
        self.iter()
            .find(|info| {
                info.local_name == local
                    && info.module_path == module
                    && info.imported_name != NAMESPACE_IMPORT
            })
            .map(|info| info.imported_name.as_str())
    }
}

/// Module-level `const` bindings whose initializers may be statically evaluated.
///
/// Names that are also bound anywhere in a nested scope (parameters, local
/// declarations) or re-declared with `let`/`var` are recorded in `shadowed`
/// and never resolved: the evaluator does not track lexical scope, so an
/// ambiguous name is treated as runtime-only.
#[derive(Debug, Clone, Default)]
pub struct ConstBindings {
    initializers: HashMap<String, Expr>,
    shadowed: HashSet<String>,
}

impl ConstBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a module-level `const name = init`.
    pub fn insert(&mut self, name: impl Into<String>, init: Expr) {
        self.initializers.insert(name.into(), init);
    }

    /// Mark a name as bound somewhere other than a module-level const.
    pub fn shadow(&mut self, name: impl Into<String>) {
        self.shadowed.insert(name.into());
    }

    /// Initializer for `name`, unless the name is ambiguous.
    pub fn get(&self, name: &str) -> Option<&Expr> {
        if self.shadowed.contains(name) {
            return None;
        }
        self.initializers.get(name)
    }

    pub fn len(&self) -> usize {
        self.initializers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.initializers.is_empty()
    }
}

/// Collect every identifier a binding pattern introduces.
pub fn extract_binding_names(pat: &Pat) -> Vec<String> {
    match pat {
        Pat::Ident(ident) => vec![ident.id.sym.to_string()],
        Pat::Object(obj) => obj
            .props
            .iter()
            .flat_map(|prop| match prop {
                ObjectPatProp::KeyValue(kv) => extract_binding_names(&kv.value),
                ObjectPatProp::Assign(assign) => vec![assign.key.sym.to_string()],
                ObjectPatProp::Rest(rest) => extract_binding_names(&rest.arg),
            })
            .collect(),
        Pat::Array(arr) => arr
            .elems
            .iter()
            .flatten()
            .flat_map(extract_binding_names)
            .collect(),
        Pat::Assign(assign) => extract_binding_names(&assign.left),
        Pat::Rest(rest) => extract_binding_names(&rest.arg),
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use swc_common::DUMMY_SP;
    use swc_ecma_ast::Invalid;

    use super::*;

    fn import(local: &str, imported: &str, module: &str) -> ImportInfo {
        ImportInfo {
            local_name: local.to_string(),
            imported_name: imported.to_string(),
            module_path: module.to_string(),
        }
    }

    #[test]
    fn test_refers_to_aliased_import() {
        let imports: FileImports = vec![import("FM", "FormattedMessage", "react-intl")];

        assert!(imports.refers_to_import("FM", "react-intl", "FormattedMessage"));
        assert!(!imports.refers_to_import("FormattedMessage", "react-intl", "FormattedMessage"));
        assert!(!imports.refers_to_import("FM", "other-lib", "FormattedMessage"));
    }

    #[test]
    fn test_namespace_import() {
        let imports: FileImports = vec![import("Intl", NAMESPACE_IMPORT, "react-intl")];

        assert!(imports.is_namespace_import("Intl", "react-intl"));
        assert!(!imports.is_namespace_import("Intl", "other-lib"));
        assert_eq!(imports.imported_name("Intl", "react-intl"), None);
    }

    #[test]
    fn test_shadowed_const_is_not_resolved() {
        let mut bindings = ConstBindings::new();
        bindings.insert("GREETING", Expr::Invalid(Invalid { span: DUMMY_SP }));
        assert!(bindings.get("GREETING").is_some());

        bindings.shadow("GREETING");
        assert!(bindings.get("GREETING").is_none());
        assert_eq!(bindings.len(), 1);
    }
}

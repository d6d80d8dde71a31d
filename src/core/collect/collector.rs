use swc_ecma_ast::{
    ArrowExpr, BlockStmt, CatchClause, ClassDecl, ClassExpr, Constructor, Decl, FnDecl, FnExpr,
    ForInStmt, ForOfStmt, ForStmt, Function, ImportDecl, ImportSpecifier, Module, ModuleDecl,
    ModuleExportName, ModuleItem, ParamOrTsParamProp, Pat, SetterProp, Stmt, TsParamPropParam,
    VarDecl, VarDeclKind,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::types::{
    ConstBindings, DEFAULT_IMPORT, FileImports, ImportInfo, NAMESPACE_IMPORT,
    extract_binding_names,
};

/// Single-pass collector for the data the extraction walk needs up front.
///
/// # Usage
///
/// ```ignore
/// let collected = UnitCollector::collect(&module);
/// collected.imports;   // every import specifier in the unit
/// collected.constants; // module-level const initializers
/// ```
#[derive(Debug, Default)]
pub struct UnitCollector {
    /// Tracks nesting depth: 0 = module level, >0 = inside function/arrow/class.
    scope_depth: usize,
    /// Collected import declarations.
    pub imports: FileImports,
    /// Collected module-level const bindings.
    pub constants: ConstBindings,
}

impl UnitCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the collector over a whole module.
    pub fn collect(module: &Module) -> Self {
        let mut collector = Self::new();
        module.visit_with(&mut collector);
        collector
    }

    fn collect_import(&mut self, node: &ImportDecl) {
        let Some(module_path) = node.src.value.as_str() else {
            return;
        };

        for specifier in &node.specifiers {
            let (local_name, imported_name) = match specifier {
                ImportSpecifier::Named(named) => {
                    let local_name = named.local.sym.to_string();
                    let imported_name = named
                        .imported
                        .as_ref()
                        .map(|i| match i {
                            ModuleExportName::Ident(ident) => ident.sym.to_string(),
                            ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
                        })
                        .unwrap_or_else(|| local_name.clone());
                    (local_name, imported_name)
                }
                ImportSpecifier::Default(default) => {
                    (default.local.sym.to_string(), DEFAULT_IMPORT.to_string())
                }
                ImportSpecifier::Namespace(ns) => {
                    (ns.local.sym.to_string(), NAMESPACE_IMPORT.to_string())
                }
            };

            self.imports.push(ImportInfo {
                local_name,
                imported_name,
                module_path: module_path.to_string(),
            });
        }
    }

    /// Record the declarators of a `var`/`let`/`const` declaration.
    ///
    /// Only module-level `const name = init` declarations become resolvable;
    /// every other binding shadows a same-named constant.
    fn check_var_decl(&mut self, node: &VarDecl) {
        let is_module_const = self.scope_depth == 0 && node.kind == VarDeclKind::Const;

        for decl in &node.decls {
            if is_module_const
                && let Pat::Ident(binding) = &decl.name
                && let Some(init) = &decl.init
            {
                self.constants
                    .insert(binding.id.sym.to_string(), (**init).clone());
                continue;
            }

            self.shadow_pattern(&decl.name);
        }
    }

    fn shadow_pattern(&mut self, pat: &Pat) {
        for name in extract_binding_names(pat) {
            self.constants.shadow(name);
        }
    }

    fn with_nested_scope<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.scope_depth += 1;
        f(self);
        self.scope_depth -= 1;
    }
}

impl Visit for UnitCollector {
    fn visit_module(&mut self, node: &Module) {
        // Top-level statements are handled here so that `export const` and
        // plain `const` share one code path.
        for item in &node.body {
            match item {
                ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => self.collect_import(import),
                ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                    if let Decl::Var(var_decl) = &export.decl {
                        self.check_var_decl(var_decl);
                        for init in var_decl.decls.iter().filter_map(|d| d.init.as_ref()) {
                            init.visit_with(self);
                        }
                    } else {
                        export.decl.visit_with(self);
                    }
                }
                ModuleItem::Stmt(Stmt::Decl(Decl::Var(var_decl))) => {
                    self.check_var_decl(var_decl);
                    for init in var_decl.decls.iter().filter_map(|d| d.init.as_ref()) {
                        init.visit_with(self);
                    }
                }
                other => other.visit_with(self),
            }
        }
    }

    fn visit_var_decl(&mut self, node: &VarDecl) {
        // Reached only for nested declarations.
        self.check_var_decl(node);
        node.visit_children_with(self);
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        self.constants.shadow(node.ident.sym.to_string());
        node.function.visit_with(self);
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        self.constants.shadow(node.ident.sym.to_string());
        self.with_nested_scope(|this| node.class.visit_with(this));
    }

    fn visit_class_expr(&mut self, node: &ClassExpr) {
        if let Some(ident) = &node.ident {
            self.constants.shadow(ident.sym.to_string());
        }
        self.with_nested_scope(|this| node.class.visit_with(this));
    }

    fn visit_fn_expr(&mut self, node: &FnExpr) {
        if let Some(ident) = &node.ident {
            self.constants.shadow(ident.sym.to_string());
        }
        node.function.visit_with(self);
    }

    fn visit_function(&mut self, node: &Function) {
        for param in &node.params {
            self.shadow_pattern(&param.pat);
        }
        self.with_nested_scope(|this| node.visit_children_with(this));
    }

    /// Constructors keep their own parameter list, including TS parameter
    /// properties, outside of `Function`.
    fn visit_constructor(&mut self, node: &Constructor) {
        for param in &node.params {
            match param {
                ParamOrTsParamProp::Param(param) => self.shadow_pattern(&param.pat),
                ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
                    TsParamPropParam::Ident(binding) => {
                        self.constants.shadow(binding.id.sym.to_string())
                    }
                    TsParamPropParam::Assign(assign) => self.shadow_pattern(&assign.left),
                },
            }
        }
        self.with_nested_scope(|this| node.visit_children_with(this));
    }

    fn visit_setter_prop(&mut self, node: &SetterProp) {
        self.shadow_pattern(&node.param);
        self.with_nested_scope(|this| node.visit_children_with(this));
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        for param in &node.params {
            self.shadow_pattern(param);
        }
        self.with_nested_scope(|this| node.visit_children_with(this));
    }

    fn visit_block_stmt(&mut self, node: &BlockStmt) {
        self.with_nested_scope(|this| node.visit_children_with(this));
    }

    fn visit_for_stmt(&mut self, node: &ForStmt) {
        self.with_nested_scope(|this| node.visit_children_with(this));
    }

    fn visit_for_in_stmt(&mut self, node: &ForInStmt) {
        self.with_nested_scope(|this| node.visit_children_with(this));
    }

    fn visit_for_of_stmt(&mut self, node: &ForOfStmt) {
        self.with_nested_scope(|this| node.visit_children_with(this));
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        if let Some(param) = &node.param {
            self.shadow_pattern(param);
        }
        self.with_nested_scope(|this| node.body.visit_with(this));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::host::ReferenceResolver;
    use crate::core::parsers::jsx::parse_jsx_source;

    fn collect(code: &str) -> UnitCollector {
        let parsed =
            parse_jsx_source(code.to_string(), "test.tsx", Arc::new(Default::default())).unwrap();
        UnitCollector::collect(&parsed.module)
    }

    #[test]
    fn test_collects_named_default_and_namespace_imports() {
        let collected = collect(
            r#"
            import React from "react";
            import { FormattedMessage, FormattedPlural as Plural } from "react-intl";
            import * as Intl from "react-intl";
            "#,
        );

        assert_eq!(collected.imports.len(), 4);
        assert!(
            collected
                .imports
                .refers_to_import("React", "react", DEFAULT_IMPORT)
        );
        assert!(collected.imports.refers_to_import(
            "FormattedMessage",
            "react-intl",
            "FormattedMessage"
        ));
        assert!(
            collected
                .imports
                .refers_to_import("Plural", "react-intl", "FormattedPlural")
        );
        assert!(collected.imports.is_namespace_import("Intl", "react-intl"));
    }

    #[test]
    fn test_collects_module_level_consts() {
        let collected = collect(
            r#"
            const GREETING = "Hello";
            export const FAREWELL = "Bye";
            let mutable = "no";
            "#,
        );

        assert!(collected.constants.get("GREETING").is_some());
        assert!(collected.constants.get("FAREWELL").is_some());
        assert!(collected.constants.get("mutable").is_none());
    }

    #[test]
    fn test_nested_bindings_shadow_module_consts() {
        let collected = collect(
            r#"
            const label = "Hello";
            const other = "World";
            function App({ label }) {
                const inner = "x";
                return label;
            }
            "#,
        );

        assert!(collected.constants.get("label").is_none());
        assert!(collected.constants.get("other").is_some());
        assert!(collected.constants.get("inner").is_none());
    }

    #[test]
    fn test_constructor_params_shadow_module_consts() {
        let collected = collect(
            r#"
            const label = "Hello";
            const title = "Title";
            const other = "World";
            class A {
                constructor(label, private readonly title = "t") {}
            }
            "#,
        );

        assert!(collected.constants.get("label").is_none());
        assert!(collected.constants.get("title").is_none());
        assert!(collected.constants.get("other").is_some());
    }

    #[test]
    fn test_setter_param_shadows_module_const() {
        let collected = collect(
            r#"
            const label = "Hello";
            const o = { set value(label) {} };
            "#,
        );

        assert!(collected.constants.get("label").is_none());
        assert!(collected.constants.get("o").is_some());
    }

    #[test]
    fn test_named_function_and_class_expressions_shadow_module_consts() {
        let collected = collect(
            r#"
            const label = "Hello";
            const Widget = "Widget";
            const f = function label() {};
            const C = class Widget {};
            "#,
        );

        assert!(collected.constants.get("label").is_none());
        assert!(collected.constants.get("Widget").is_none());
        assert!(collected.constants.get("f").is_some());
    }
}

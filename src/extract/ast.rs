use tree_sitter::Node;

use crate::lang::Language;
use crate::model::{ExportKind, ExportRecord, ImportKind, ImportRecord};
use crate::parser;
use crate::util::{trim_quotes, txt};

/// AST-backed extraction capability for one language.
///
/// `None` from either method means the capability could not run (no parser,
/// parse failure) and the caller should fall back to the regex pipeline.
pub(crate) trait LanguageSupport: Sync {
    fn find_imports(&self, source: &str) -> Option<Vec<ImportRecord>>;
    fn find_exports(&self, source: &str) -> Option<Vec<ExportRecord>>;
}

/// Registered capability for a language, if any.
///
/// The whole JS family shares one implementation; only the grammar differs.
pub(crate) fn support_for(language: Language) -> Option<&'static dyn LanguageSupport> {
    match language {
        Language::TypeScript | Language::JavaScript => Some(&JS_SUPPORT),
        Language::Tsx => Some(&TSX_SUPPORT),
        Language::Python | Language::Go | Language::Java | Language::Rust => None,
    }
}

struct JsFamilySupport {
    grammar: Language,
}

static JS_SUPPORT: JsFamilySupport = JsFamilySupport {
    grammar: Language::TypeScript,
};
static TSX_SUPPORT: JsFamilySupport = JsFamilySupport {
    grammar: Language::Tsx,
};

impl JsFamilySupport {
    fn parse(&self, source: &str) -> Option<tree_sitter::Tree> {
        let mut parser = parser::acquire(self.grammar)?;
        parser.parse(source, None)
    }
}

impl LanguageSupport for JsFamilySupport {
    fn find_imports(&self, source: &str) -> Option<Vec<ImportRecord>> {
        let tree = self.parse(source)?;
        let root = tree.root_node();
        let src = source.as_bytes();

        let mut imports = Vec::new();
        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            match node.kind() {
                "import_statement" => {
                    if let Some(rec) = import_record(node, src) {
                        imports.push(rec);
                    }
                }
                "export_statement" => {
                    if let Some(rec) = reexport_record(node, src) {
                        imports.push(rec);
                    }
                }
                _ => {}
            }
        }
        collect_dynamic_imports(root, src, &mut imports);
        Some(imports)
    }

    fn find_exports(&self, source: &str) -> Option<Vec<ExportRecord>> {
        let tree = self.parse(source)?;
        let root = tree.root_node();
        let src = source.as_bytes();

        let mut exports = Vec::new();
        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            if node.kind() == "export_statement" {
                export_records(node, src, &mut exports);
            }
        }
        Some(exports)
    }
}

// ── Imports ──

fn import_record(stmt: Node, src: &[u8]) -> Option<ImportRecord> {
    let source = stmt.child_by_field_name("source")?;
    let module = trim_quotes(txt(source, src)).to_string();

    let mut names = Vec::new();
    let mut has_default = false;
    let mut has_named = false;
    let mut has_namespace = false;

    let mut cursor = stmt.walk();
    for child in stmt.children(&mut cursor) {
        if child.kind() != "import_clause" {
            continue;
        }
        let mut parts = child.walk();
        for part in child.children(&mut parts) {
            match part.kind() {
                "identifier" => {
                    has_default = true;
                    names.push(txt(part, src).to_string());
                }
                "named_imports" => {
                    has_named = true;
                    collect_specifier_names(part, "import_specifier", src, &mut names);
                }
                "namespace_import" => {
                    has_namespace = true;
                    let mut inner = part.walk();
                    for sub in part.children(&mut inner) {
                        if sub.kind() == "identifier" {
                            names.push(txt(sub, src).to_string());
                        }
                    }
                }
                _ => {}
            }
        }
    }

    let kind = if has_namespace {
        ImportKind::Namespace
    } else if has_named {
        ImportKind::Named
    } else if has_default {
        ImportKind::Default
    } else {
        ImportKind::SideEffect
    };

    Some(
        ImportRecord::new(module, kind)
            .with_names(names)
            .at_line(stmt.start_position().row + 1),
    )
}

/// `export ... from 'mod'` re-imports the source module.
fn reexport_record(stmt: Node, src: &[u8]) -> Option<ImportRecord> {
    let source = stmt.child_by_field_name("source")?;
    let module = trim_quotes(txt(source, src)).to_string();

    let mut names = Vec::new();
    let mut cursor = stmt.walk();
    for child in stmt.children(&mut cursor) {
        if child.kind() == "export_clause" {
            collect_specifier_names(child, "export_specifier", src, &mut names);
        }
    }
    if names.is_empty() {
        // export * from 'mod'
        names.push("*".to_string());
    }

    Some(
        ImportRecord::new(module, ImportKind::ReExport)
            .with_names(names)
            .at_line(stmt.start_position().row + 1),
    )
}

/// Local binding name of each specifier: the alias when present, else the
/// imported name.
fn collect_specifier_names(clause: Node, specifier_kind: &str, src: &[u8], out: &mut Vec<String>) {
    let mut cursor = clause.walk();
    for spec in clause.children(&mut cursor) {
        if spec.kind() != specifier_kind {
            continue;
        }
        let name = spec
            .child_by_field_name("alias")
            .or_else(|| spec.child_by_field_name("name"));
        if let Some(n) = name {
            let text = txt(n, src);
            if !text.is_empty() {
                out.push(text.to_string());
            }
        }
    }
}

/// Walk the whole tree for `import('mod')` call expressions.
fn collect_dynamic_imports(node: Node, src: &[u8], out: &mut Vec<ImportRecord>) {
    if node.kind() == "call_expression" {
        if let (Some(func), Some(args)) = (
            node.child_by_field_name("function"),
            node.child_by_field_name("arguments"),
        ) {
            if txt(func, src) == "import" {
                let mut cursor = args.walk();
                for arg in args.children(&mut cursor) {
                    if arg.kind() == "string" {
                        out.push(
                            ImportRecord::new(trim_quotes(txt(arg, src)), ImportKind::Dynamic)
                                .at_line(node.start_position().row + 1),
                        );
                        break;
                    }
                }
            }
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_dynamic_imports(child, src, out);
    }
}

// ── Exports ──

fn export_records(stmt: Node, src: &[u8], out: &mut Vec<ExportRecord>) {
    if stmt.child_by_field_name("source").is_some() {
        let mut names = Vec::new();
        let mut cursor = stmt.walk();
        for child in stmt.children(&mut cursor) {
            if child.kind() == "export_clause" {
                collect_specifier_names(child, "export_specifier", src, &mut names);
            }
        }
        if names.is_empty() {
            names.push("*".to_string());
        }
        for name in names {
            out.push(ExportRecord {
                name,
                kind: ExportKind::ReExport,
            });
        }
        return;
    }

    let is_default = txt(stmt, src).starts_with("export default");
    let before = out.len();

    let mut cursor = stmt.walk();
    for child in stmt.children(&mut cursor) {
        match child.kind() {
            "function_declaration" | "generator_function_declaration" => {
                push_named(child, src, pick(is_default, ExportKind::Function), out);
            }
            "class_declaration" => {
                push_named(child, src, pick(is_default, ExportKind::Class), out);
            }
            "interface_declaration" | "type_alias_declaration" | "enum_declaration" => {
                push_named(child, src, pick(is_default, ExportKind::Type), out);
            }
            "lexical_declaration" | "variable_declaration" => {
                let mut decls = child.walk();
                for decl in child.children(&mut decls) {
                    if decl.kind() == "variable_declarator" {
                        push_named(decl, src, ExportKind::Const, out);
                    }
                }
            }
            "export_clause" => {
                let mut names = Vec::new();
                collect_specifier_names(child, "export_specifier", src, &mut names);
                for name in names {
                    out.push(ExportRecord {
                        name,
                        kind: ExportKind::Named,
                    });
                }
            }
            "identifier" if is_default => {
                out.push(ExportRecord {
                    name: txt(child, src).to_string(),
                    kind: ExportKind::Default,
                });
            }
            _ => {}
        }
    }

    // Anonymous default export (`export default function () {}` and friends).
    if is_default && out.len() == before {
        out.push(ExportRecord {
            name: "default".to_string(),
            kind: ExportKind::Default,
        });
    }
}

fn pick(is_default: bool, kind: ExportKind) -> ExportKind {
    if is_default {
        ExportKind::Default
    } else {
        kind
    }
}

fn push_named(node: Node, src: &[u8], kind: ExportKind, out: &mut Vec<ExportRecord>) {
    if let Some(name) = node.child_by_field_name("name") {
        let text = txt(name, src);
        if !text.is_empty() {
            out.push(ExportRecord {
                name: text.to_string(),
                kind,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imports(src: &str) -> Vec<ImportRecord> {
        JS_SUPPORT.find_imports(src).unwrap()
    }

    fn exports(src: &str) -> Vec<ExportRecord> {
        JS_SUPPORT.find_exports(src).unwrap()
    }

    #[test]
    fn default_import_binds_one_name() {
        let recs = imports("import React from 'react';\n");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].module, "react");
        assert_eq!(recs[0].names, vec!["React"]);
        assert_eq!(recs[0].kind, ImportKind::Default);
        assert_eq!(recs[0].line, Some(1));
    }

    #[test]
    fn named_imports_use_local_aliases() {
        let recs = imports("import { readFile, join as joinPath } from 'node:path';\n");
        assert_eq!(recs[0].kind, ImportKind::Named);
        assert_eq!(recs[0].names, vec!["readFile", "joinPath"]);
    }

    #[test]
    fn namespace_import_is_tagged() {
        let recs = imports("import * as fs from 'fs';\n");
        assert_eq!(recs[0].kind, ImportKind::Namespace);
        assert_eq!(recs[0].names, vec!["fs"]);
    }

    #[test]
    fn side_effect_import_has_no_names() {
        let recs = imports("import './polyfill';\n");
        assert_eq!(recs[0].kind, ImportKind::SideEffect);
        assert!(recs[0].names.is_empty());
    }

    #[test]
    fn dynamic_import_is_found_inside_functions() {
        let recs = imports("async function load() {\n  const m = await import('./lazy');\n}\n");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].module, "./lazy");
        assert_eq!(recs[0].kind, ImportKind::Dynamic);
        assert_eq!(recs[0].line, Some(2));
    }

    #[test]
    fn reexport_records_source_and_names() {
        let recs = imports("export { helper } from './util';\nexport * from './all';\n");
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].module, "./util");
        assert_eq!(recs[0].kind, ImportKind::ReExport);
        assert_eq!(recs[0].names, vec!["helper"]);
        assert_eq!(recs[1].names, vec!["*"]);
    }

    #[test]
    fn declaration_exports_are_kinded() {
        let src = "export function go() {}\nexport class Box {}\nexport const LIMIT = 3;\nexport interface Shape {}\n";
        let recs = exports(src);
        let kinds: Vec<(&str, ExportKind)> =
            recs.iter().map(|r| (r.name.as_str(), r.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("go", ExportKind::Function),
                ("Box", ExportKind::Class),
                ("LIMIT", ExportKind::Const),
                ("Shape", ExportKind::Type),
            ]
        );
    }

    #[test]
    fn default_export_of_named_function() {
        let recs = exports("export default function main() {}\n");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "main");
        assert_eq!(recs[0].kind, ExportKind::Default);
    }

    #[test]
    fn anonymous_default_export_is_recorded() {
        let recs = exports("export default function () {}\n");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "default");
        assert_eq!(recs[0].kind, ExportKind::Default);
    }

    #[test]
    fn export_list_yields_named_records() {
        let recs = exports("const a = 1;\nconst b = 2;\nexport { a, b as c };\n");
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert!(recs.iter().all(|r| r.kind == ExportKind::Named));
    }

    #[test]
    fn tsx_grammar_handles_jsx() {
        let recs = TSX_SUPPORT
            .find_imports("import Button from './button';\nconst x = <Button />;\n")
            .unwrap();
        assert_eq!(recs[0].module, "./button");
    }
}

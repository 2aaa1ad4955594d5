//! Regex-based extraction, used when a language has no AST capability or the
//! capability fails. Line-oriented and deliberately approximate: multi-line
//! statements and string-literal edge cases are not handled. Kept as a
//! degraded mode, never the primary pathway for languages with a parser.

use std::sync::LazyLock;

use regex::Regex;

use crate::lang::Language;
use crate::model::{ExportKind, ExportRecord, Extraction, ImportKind, ImportRecord};

// Patterns are compile-time constants, so initialization is infallible in
// practice; the Option keeps a bad edit from panicking at runtime.
macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($re).ok());
    };
}

// JS family
pattern!(JS_NAMESPACE, r#"^\s*import\s+\*\s+as\s+(\w+)\s+from\s+['"]([^'"]+)['"]"#);
pattern!(
    JS_DEFAULT_NAMED,
    r#"^\s*import\s+(\w+)\s*,\s*\{([^}]*)\}\s*from\s+['"]([^'"]+)['"]"#
);
pattern!(
    JS_NAMED,
    r#"^\s*import\s+(?:type\s+)?\{([^}]*)\}\s*from\s+['"]([^'"]+)['"]"#
);
pattern!(
    JS_DEFAULT,
    r#"^\s*import\s+(?:type\s+)?(\w+)\s+from\s+['"]([^'"]+)['"]"#
);
pattern!(JS_SIDE_EFFECT, r#"^\s*import\s+['"]([^'"]+)['"]"#);
pattern!(JS_DYNAMIC, r#"import\(\s*['"]([^'"]+)['"]\s*\)"#);
pattern!(
    JS_REEXPORT,
    r#"^\s*export\s+(?:\*|\{([^}]*)\})\s*from\s+['"]([^'"]+)['"]"#
);
pattern!(
    JS_EXPORT_DECL,
    r"^\s*export\s+(default\s+)?(?:async\s+)?(function\*?|class|const|let|var|interface|type|enum)\s+(\w+)"
);
pattern!(JS_EXPORT_LIST, r"^\s*export\s+\{([^}]*)\}\s*;?\s*$");
pattern!(JS_EXPORT_DEFAULT_IDENT, r"^\s*export\s+default\s+(\w+)\s*;?\s*$");

// Python
pattern!(PY_FROM, r"^\s*from\s+([.\w]+)\s+import\s+(.+)");
pattern!(PY_IMPORT, r"^\s*import\s+(.+)");
pattern!(PY_ALL, r"__all__\s*=\s*\[([^\]]*)\]");

// Go
pattern!(GO_IMPORT_SINGLE, r#"^\s*import\s+(?:(\w+|\.)\s+)?"([^"]+)""#);
pattern!(GO_IMPORT_OPEN, r"^\s*import\s*\(");
pattern!(GO_IMPORT_ENTRY, r#"^\s*(?:(\w+|\.)\s+)?"([^"]+)""#);
pattern!(GO_EXPORT_FUNC, r"^func\s+(?:\([^)]*\)\s+)?([A-Z]\w*)");
pattern!(GO_EXPORT_TYPE, r"^type\s+([A-Z]\w*)");
pattern!(GO_EXPORT_VAR, r"^(?:var|const)\s+([A-Z]\w*)");

// Java
pattern!(JAVA_IMPORT, r"^\s*import\s+(?:static\s+)?([\w.]+(?:\.\*)?)\s*;");
pattern!(
    JAVA_EXPORT_CLASS,
    r"^\s*(?:public\s+)?(?:(?:final|abstract|static)\s+)*(class|interface|enum)\s+([A-Z]\w*)"
);

// Rust
pattern!(RS_USE, r"^\s*(?:pub(?:\([^)]*\))?\s+)?use\s+([^;]+);");
pattern!(RS_MOD, r"^\s*(?:pub(?:\([^)]*\))?\s+)?mod\s+(\w+)\s*;");
pattern!(
    RS_EXPORT_FN,
    r#"^\s*pub\s+(?:(?:async|unsafe|const)\s+|extern\s+"[^"]*"\s+)*fn\s+(\w+)"#
);
pattern!(
    RS_EXPORT_TYPE,
    r"^\s*pub\s+(struct|enum|trait|type|union)\s+(\w+)"
);
pattern!(RS_EXPORT_CONST, r"^\s*pub\s+(?:const|static)\s+(\w+)");

/// Run the fallback pipeline for a (canonical) language.
pub(crate) fn extract(content: &str, language: Language) -> Extraction {
    match language.canonical() {
        Language::JavaScript => extract_js(content),
        Language::Python => extract_python(content),
        Language::Go => extract_go(content),
        Language::Java => extract_java(content),
        Language::Rust => extract_rust(content),
        // canonical() never returns these
        Language::TypeScript | Language::Tsx => Extraction::default(),
    }
}

/// Split a `{ a, b as c }` interior into local binding names.
fn binding_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|item| {
            let item = item.strip_prefix("type ").unwrap_or(item);
            match item.rsplit_once(" as ") {
                Some((_, local)) => local.trim().to_string(),
                None => item.to_string(),
            }
        })
        .filter(|s| !s.is_empty())
        .collect()
}

fn captures<'a>(
    re: &'static LazyLock<Option<Regex>>,
    line: &'a str,
) -> Option<regex::Captures<'a>> {
    re.as_ref()?.captures(line)
}

// ── JS family ──

fn extract_js(content: &str) -> Extraction {
    let mut out = Extraction::default();

    for (idx, line) in content.lines().enumerate() {
        let lineno = idx + 1;

        if let Some(c) = captures(&JS_NAMESPACE, line) {
            out.imports.push(
                ImportRecord::new(&c[2], ImportKind::Namespace)
                    .with_names(vec![c[1].to_string()])
                    .at_line(lineno),
            );
        } else if let Some(c) = captures(&JS_DEFAULT_NAMED, line) {
            let mut names = vec![c[1].to_string()];
            names.extend(binding_names(&c[2]));
            out.imports.push(
                ImportRecord::new(&c[3], ImportKind::Named)
                    .with_names(names)
                    .at_line(lineno),
            );
        } else if let Some(c) = captures(&JS_NAMED, line) {
            out.imports.push(
                ImportRecord::new(&c[2], ImportKind::Named)
                    .with_names(binding_names(&c[1]))
                    .at_line(lineno),
            );
        } else if let Some(c) = captures(&JS_DEFAULT, line) {
            out.imports.push(
                ImportRecord::new(&c[2], ImportKind::Default)
                    .with_names(vec![c[1].to_string()])
                    .at_line(lineno),
            );
        } else if let Some(c) = captures(&JS_SIDE_EFFECT, line) {
            out.imports
                .push(ImportRecord::new(&c[1], ImportKind::SideEffect).at_line(lineno));
        } else if let Some(c) = captures(&JS_REEXPORT, line) {
            let names = match c.get(1) {
                Some(list) => binding_names(list.as_str()),
                None => vec!["*".to_string()],
            };
            out.imports.push(
                ImportRecord::new(&c[2], ImportKind::ReExport)
                    .with_names(names.clone())
                    .at_line(lineno),
            );
            for name in names {
                out.exports.push(ExportRecord {
                    name,
                    kind: ExportKind::ReExport,
                });
            }
        } else if let Some(c) = captures(&JS_EXPORT_DECL, line) {
            let kind = if c.get(1).is_some() {
                ExportKind::Default
            } else {
                match &c[2] {
                    "function" | "function*" => ExportKind::Function,
                    "class" => ExportKind::Class,
                    "interface" | "type" | "enum" => ExportKind::Type,
                    _ => ExportKind::Const,
                }
            };
            out.exports.push(ExportRecord {
                name: c[3].to_string(),
                kind,
            });
        } else if let Some(c) = captures(&JS_EXPORT_DEFAULT_IDENT, line) {
            out.exports.push(ExportRecord {
                name: c[1].to_string(),
                kind: ExportKind::Default,
            });
        } else if let Some(c) = captures(&JS_EXPORT_LIST, line) {
            for name in binding_names(&c[1]) {
                out.exports.push(ExportRecord {
                    name,
                    kind: ExportKind::Named,
                });
            }
        }

        if let Some(c) = captures(&JS_DYNAMIC, line) {
            out.imports
                .push(ImportRecord::new(&c[1], ImportKind::Dynamic).at_line(lineno));
        }
    }

    out
}

// ── Python ──

fn extract_python(content: &str) -> Extraction {
    let mut out = Extraction::default();

    for (idx, line) in content.lines().enumerate() {
        let lineno = idx + 1;

        if let Some(c) = captures(&PY_FROM, line) {
            let names: Vec<String> = c[2]
                .trim()
                .trim_start_matches('(')
                .trim_end_matches(')')
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty() && *s != "\\")
                .map(|item| match item.rsplit_once(" as ") {
                    Some((_, local)) => local.trim().to_string(),
                    None => item.to_string(),
                })
                .collect();
            out.imports.push(
                ImportRecord::new(&c[1], ImportKind::From)
                    .with_names(names)
                    .at_line(lineno),
            );
        } else if let Some(c) = captures(&PY_IMPORT, line) {
            for module in c[1].split(',') {
                let module = module.trim();
                if module.is_empty() {
                    continue;
                }
                let (module, names) = match module.rsplit_once(" as ") {
                    Some((m, local)) => (m.trim(), vec![local.trim().to_string()]),
                    None => (module, Vec::new()),
                };
                out.imports.push(
                    ImportRecord::new(module, ImportKind::Module)
                        .with_names(names)
                        .at_line(lineno),
                );
            }
        }

        if let Some(c) = captures(&PY_ALL, line) {
            for name in c[1].split(',') {
                let name = name
                    .trim()
                    .trim_matches(|ch: char| ch == '\'' || ch == '"');
                if !name.is_empty() {
                    out.exports.push(ExportRecord {
                        name: name.to_string(),
                        kind: ExportKind::Named,
                    });
                }
            }
        }
    }

    out
}

// ── Go ──

fn extract_go(content: &str) -> Extraction {
    let mut out = Extraction::default();
    let mut in_block = false;

    for (idx, line) in content.lines().enumerate() {
        let lineno = idx + 1;

        if in_block {
            if line.trim_start().starts_with(')') {
                in_block = false;
            } else if let Some(c) = captures(&GO_IMPORT_ENTRY, line) {
                let names = c.get(1).map_or(Vec::new(), |a| vec![a.as_str().to_string()]);
                out.imports.push(
                    ImportRecord::new(&c[2], ImportKind::Block)
                        .with_names(names)
                        .at_line(lineno),
                );
            }
            continue;
        }

        if let Some(c) = captures(&GO_IMPORT_SINGLE, line) {
            let names = c.get(1).map_or(Vec::new(), |a| vec![a.as_str().to_string()]);
            out.imports.push(
                ImportRecord::new(&c[2], ImportKind::Single)
                    .with_names(names)
                    .at_line(lineno),
            );
        } else if GO_IMPORT_OPEN.as_ref().is_some_and(|re| re.is_match(line)) {
            in_block = true;
        } else if let Some(c) = captures(&GO_EXPORT_FUNC, line) {
            out.exports.push(ExportRecord {
                name: c[1].to_string(),
                kind: ExportKind::Function,
            });
        } else if let Some(c) = captures(&GO_EXPORT_TYPE, line) {
            out.exports.push(ExportRecord {
                name: c[1].to_string(),
                kind: ExportKind::Type,
            });
        } else if let Some(c) = captures(&GO_EXPORT_VAR, line) {
            out.exports.push(ExportRecord {
                name: c[1].to_string(),
                kind: ExportKind::Const,
            });
        }
    }

    out
}

// ── Java ──

fn extract_java(content: &str) -> Extraction {
    let mut out = Extraction::default();

    for (idx, line) in content.lines().enumerate() {
        let lineno = idx + 1;

        if let Some(c) = captures(&JAVA_IMPORT, line) {
            let path = c[1].to_string();
            let names = match path.rsplit_once('.') {
                Some((_, leaf)) if leaf != "*" => vec![leaf.to_string()],
                _ => Vec::new(),
            };
            out.imports.push(
                ImportRecord::new(path, ImportKind::Single)
                    .with_names(names)
                    .at_line(lineno),
            );
        } else if let Some(c) = captures(&JAVA_EXPORT_CLASS, line) {
            let kind = if &c[1] == "class" {
                ExportKind::Class
            } else {
                ExportKind::Type
            };
            out.exports.push(ExportRecord {
                name: c[2].to_string(),
                kind,
            });
        }
    }

    out
}

// ── Rust ──

fn extract_rust(content: &str) -> Extraction {
    let mut out = Extraction::default();

    for (idx, line) in content.lines().enumerate() {
        let lineno = idx + 1;

        if let Some(c) = captures(&RS_USE, line) {
            let path = c[1].trim().to_string();
            let (module, names) = split_use_path(&path);
            out.imports.push(
                ImportRecord::new(module, ImportKind::Use)
                    .with_names(names)
                    .at_line(lineno),
            );
        } else if let Some(c) = captures(&RS_MOD, line) {
            out.imports.push(
                ImportRecord::new(&c[1], ImportKind::Mod)
                    .with_names(vec![c[1].to_string()])
                    .at_line(lineno),
            );
        }

        if let Some(c) = captures(&RS_EXPORT_FN, line) {
            out.exports.push(ExportRecord {
                name: c[1].to_string(),
                kind: ExportKind::Function,
            });
        } else if let Some(c) = captures(&RS_EXPORT_TYPE, line) {
            out.exports.push(ExportRecord {
                name: c[2].to_string(),
                kind: ExportKind::Type,
            });
        } else if let Some(c) = captures(&RS_EXPORT_CONST, line) {
            out.exports.push(ExportRecord {
                name: c[1].to_string(),
                kind: ExportKind::Const,
            });
        }
    }

    out
}

/// `a::b::{X, Y}` splits into module `a::b` and names `[X, Y]`; a plain path
/// binds its last segment.
fn split_use_path(path: &str) -> (String, Vec<String>) {
    if let Some((prefix, rest)) = path.split_once("::{") {
        let inner = rest.trim_end_matches('}');
        let names = inner
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|item| match item.rsplit_once(" as ") {
                Some((_, local)) => local.trim().to_string(),
                None => item.rsplit("::").next().unwrap_or(item).to_string(),
            })
            .collect();
        return (prefix.to_string(), names);
    }

    let (module, leaf) = match path.rsplit_once(" as ") {
        Some((m, local)) => (m.trim(), Some(local.trim().to_string())),
        None => (path, path.rsplit("::").next().map(String::from)),
    };
    let names = leaf.into_iter().filter(|n| n != "*" && n != module).collect();
    (module.to_string(), names)
}

use std::path::PathBuf;

use crate::lang::Language;

/// Surface form of an import statement, across all supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// JS family: `import x from 'mod'`.
    Default,
    /// JS family: `import { a, b } from 'mod'`.
    Named,
    /// JS family: `import * as ns from 'mod'`.
    Namespace,
    /// JS family: `import 'mod'`.
    SideEffect,
    /// JS family: `import('mod')`.
    Dynamic,
    /// JS family: `export ... from 'mod'`.
    ReExport,
    /// Python: `import mod`.
    Module,
    /// Python: `from mod import a, b`.
    From,
    /// Go/Java: a single import statement.
    Single,
    /// Go: an entry inside `import ( ... )`.
    Block,
    /// Rust: `use path::to::item;`.
    Use,
    /// Rust: `mod name;`.
    Mod,
}

/// Surface form of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Default,
    Named,
    Function,
    Class,
    Type,
    Const,
    ReExport,
}

/// One import statement as written in the source.
///
/// `module` is the raw specifier; resolution happens separately. Immutable
/// once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub module: String,
    pub names: Vec<String>,
    pub kind: ImportKind,
    pub line: Option<usize>,
}

/// One exported binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub name: String,
    pub kind: ExportKind,
}

/// Everything extracted from a single source file.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub imports: Vec<ImportRecord>,
    pub exports: Vec<ExportRecord>,
}

/// Per-call resolution configuration.
///
/// `aliases` is an ordered list: the first entry whose prefix matches a
/// specifier wins, regardless of later, longer prefixes. Callers that need
/// longest-match semantics must order the table accordingly.
#[derive(Debug, Clone)]
pub struct ResolutionConfig {
    /// Alias-prefix to target-path-fragment, tried in declared order.
    pub aliases: Vec<(String, String)>,
    /// Candidate suffixes (with leading dot); language default when `None`.
    pub extensions: Option<Vec<String>>,
    pub language: Language,
    /// Project-root boundary for the tsconfig upward search, and the base
    /// directory for alias targets.
    pub root: Option<PathBuf>,
}

impl ResolutionConfig {
    pub fn for_language(language: Language) -> Self {
        Self {
            aliases: Vec::new(),
            extensions: None,
            language,
            root: None,
        }
    }
}

impl ImportRecord {
    pub fn new(module: impl Into<String>, kind: ImportKind) -> Self {
        Self {
            module: module.into(),
            names: Vec::new(),
            kind,
            line: None,
        }
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

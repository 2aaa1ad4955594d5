//! `modmap` — cross-language module resolution for dependency graphs.
//!
//! Given an import specifier discovered in a source file, determine the
//! on-disk file it refers to, or decide it is an external package. Four
//! strategies are reconciled into one deterministic, cached lookup: a
//! configured alias table, tsconfig path mapping, Go module-path rewriting,
//! and filesystem extension/index probing. Extraction of the specifiers
//! themselves runs through a per-language AST capability with a regex
//! fallback.
//!
//! Resolution never fails: malformed configs, unreadable files, and parse
//! errors all degrade to "external", so a caller building a dependency graph
//! keeps making progress across a heterogeneously configured codebase.
//! Config lookups are cached for the lifetime of a [`ResolutionContext`]
//! (including negative results); build a fresh context to observe on-disk
//! config changes.

mod context;
mod error;
mod extract;
mod lang;
mod model;
mod parser;
mod resolve;
mod util;

pub use context::{CompiledPattern, CompiledTsConfig, GoModule, ResolutionContext};
pub use error::ModmapError;
pub use extract::{extract, extract_file};
pub use lang::Language;
pub use model::{
    ExportKind, ExportRecord, Extraction, ImportKind, ImportRecord, ResolutionConfig,
};
pub use resolve::resolve;

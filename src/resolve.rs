mod alias;
mod gomod;
mod probe;
mod ts_paths;

use std::path::{Path, PathBuf};

use crate::context::ResolutionContext;
use crate::lang::Language;
use crate::model::ResolutionConfig;

/// Resolve an import specifier to a file path on disk.
///
/// Returns `None` for external or unresolvable specifiers — the signal the
/// caller uses to separate "local file to analyze" from "third-party
/// dependency to ignore". Strategy order is fixed: relative/absolute
/// specifiers go straight to the path probe; bare specifiers try the alias
/// table, then tsconfig path mapping (JS family only), then the Go module
/// rewrite (Go only). The first hit wins; strategies are never merged.
pub fn resolve(
    specifier: &str,
    from_file: &Path,
    config: &ResolutionConfig,
    ctx: &mut ResolutionContext,
) -> Option<PathBuf> {
    // Asset-loader query suffixes (`./logo.svg?raw`) do not affect identity.
    let specifier = specifier
        .split_once('?')
        .map_or(specifier, |(head, _)| head);

    let owned_exts: Vec<&str>;
    let extensions: &[&str] = match &config.extensions {
        Some(list) => {
            owned_exts = list.iter().map(String::as_str).collect();
            &owned_exts
        }
        None => config.language.default_extensions(),
    };

    if specifier.starts_with('.') || specifier.starts_with('/') {
        let base = if specifier.starts_with('/') {
            PathBuf::from(specifier)
        } else {
            from_file.parent()?.join(specifier)
        };
        return probe::probe(&base, extensions);
    }

    if !config.aliases.is_empty() {
        if let Some(hit) = alias::resolve(specifier, from_file, config, extensions) {
            return Some(hit);
        }
    }
    if config.language.is_js_family() {
        if let Some(hit) = ts_paths::resolve(specifier, from_file, config, extensions, ctx) {
            return Some(hit);
        }
    }
    if config.language == Language::Go {
        if let Some(hit) = gomod::resolve(specifier, from_file, ctx) {
            return Some(hit);
        }
    }
    None
}

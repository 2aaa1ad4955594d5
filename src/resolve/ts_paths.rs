use std::path::{Path, PathBuf};

use crate::context::ResolutionContext;
use crate::model::ResolutionConfig;

use super::probe;

/// Resolve a bare specifier through tsconfig path mapping.
///
/// Patterns are tried in compiled order. Within a matched pattern every
/// target template is exhausted before giving up on it, but a matched
/// pattern with no resolvable template does not stop later patterns from
/// matching the same specifier.
pub(crate) fn resolve(
    specifier: &str,
    from_file: &Path,
    config: &ResolutionConfig,
    extensions: &[&str],
    ctx: &mut ResolutionContext,
) -> Option<PathBuf> {
    let start_dir = from_file.parent()?;
    let compiled = ctx.tsconfig_for(start_dir, config.root.as_deref())?;

    for pattern in &compiled.paths {
        let Some(caps) = pattern.regex.captures(specifier) else {
            continue;
        };
        let star = caps.get(1).map_or("", |m| m.as_str());

        for template in &pattern.targets {
            let filled = template.replacen('*', star, 1);
            let base_dir = match &compiled.base_url {
                Some(url) => url.as_path(),
                None => compiled.config_path.parent()?,
            };
            if let Some(hit) = probe::probe(&base_dir.join(&filled), extensions) {
                return Some(hit);
            }
        }
    }
    None
}

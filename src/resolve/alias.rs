use std::path::{Path, PathBuf};

use crate::model::ResolutionConfig;

use super::probe;

/// Resolve a bare specifier through the configured alias table.
///
/// Entries are tried in declared order and the first prefix match is
/// committed to: there is no longest-prefix logic and no fallthrough to a
/// later alias when the chosen one probes to nothing. Table order is part of
/// the caller's contract.
pub(crate) fn resolve(
    specifier: &str,
    from_file: &Path,
    config: &ResolutionConfig,
    extensions: &[&str],
) -> Option<PathBuf> {
    for (prefix, target) in &config.aliases {
        if let Some(rest) = specifier.strip_prefix(prefix.as_str()) {
            let base_dir = match &config.root {
                Some(root) => root.clone(),
                None => from_file.parent()?.to_path_buf(),
            };
            let rest = rest.trim_start_matches('/');
            let base = if rest.is_empty() {
                base_dir.join(target)
            } else {
                base_dir.join(target).join(rest)
            };
            return probe::probe(&base, extensions);
        }
    }
    None
}

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, warn};

/// Compiled tsconfig path-mapping, cached per starting directory.
#[derive(Debug)]
pub struct CompiledTsConfig {
    pub config_path: PathBuf,
    /// `compilerOptions.baseUrl` resolved against the config's directory.
    pub base_url: Option<PathBuf>,
    pub paths: Vec<CompiledPattern>,
}

/// One `compilerOptions.paths` entry with its precompiled matcher.
///
/// The matcher anchors the whole specifier and turns the first `*` into a
/// capture group; nothing else is escaped and additional wildcards are not
/// treated specially. This mirrors common build-tool behavior, not the full
/// TypeScript algorithm.
#[derive(Debug)]
pub struct CompiledPattern {
    pub source: String,
    pub regex: Regex,
    pub targets: Vec<String>,
}

/// `go.mod` module record, cached per starting directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoModule {
    /// Declared import-path prefix (`module example.com/proj`).
    pub module_path: String,
    /// Directory containing the `go.mod`.
    pub root: PathBuf,
}

static MODULE_DIRECTIVE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^module\s+(\S+)").ok());
static TRAILING_COMMA: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").ok());

/// Process-lifetime caches backing one analysis run.
///
/// Both tables are keyed by the directory an upward search started from (not
/// by the file the search found) and store negative results too, so repeated
/// misses never re-walk the tree. Entries are never evicted: callers that
/// mutate project config mid-run must build a fresh context to see it.
#[derive(Debug, Default)]
pub struct ResolutionContext {
    tsconfigs: HashMap<PathBuf, Option<Arc<CompiledTsConfig>>>,
    go_modules: HashMap<PathBuf, Option<Arc<GoModule>>>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nearest compiled tsconfig for `start_dir`, bounded by `root` if given.
    ///
    /// A missing or undecodable config is cached as `None` for the directory.
    pub(crate) fn tsconfig_for(
        &mut self,
        start_dir: &Path,
        root: Option<&Path>,
    ) -> Option<Arc<CompiledTsConfig>> {
        if let Some(cached) = self.tsconfigs.get(start_dir) {
            return cached.clone();
        }
        let compiled = find_tsconfig(start_dir, root)
            .and_then(|path| load_tsconfig(&path))
            .map(Arc::new);
        if let Some(cfg) = &compiled {
            debug!(config = %cfg.config_path.display(), "compiled tsconfig");
        }
        self.tsconfigs
            .insert(start_dir.to_path_buf(), compiled.clone());
        compiled
    }

    /// Nearest `go.mod` module record for `start_dir`.
    ///
    /// Unlike the tsconfig search, this walk is not bounded by the configured
    /// root; it stops only at the filesystem root.
    pub(crate) fn go_module_for(&mut self, start_dir: &Path) -> Option<Arc<GoModule>> {
        if let Some(cached) = self.go_modules.get(start_dir) {
            return cached.clone();
        }
        let module = find_go_module(start_dir).map(Arc::new);
        self.go_modules
            .insert(start_dir.to_path_buf(), module.clone());
        module
    }
}

/// Walk up directories from `start` looking for tsconfig.json.
///
/// Stops at the filesystem root, or upon leaving `root` when one is given.
fn find_tsconfig(start: &Path, root: Option<&Path>) -> Option<PathBuf> {
    let mut dir = if start.is_dir() {
        start.to_path_buf()
    } else {
        start.parent()?.to_path_buf()
    };

    loop {
        if let Some(boundary) = root {
            if !dir.starts_with(boundary) {
                return None;
            }
        }
        let candidate = dir.join("tsconfig.json");
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Read and compile a tsconfig.json into matchable path patterns.
fn load_tsconfig(tsconfig_path: &Path) -> Option<CompiledTsConfig> {
    let content = std::fs::read_to_string(tsconfig_path).ok()?;
    let stripped = strip_jsonc(&content);

    let val: serde_json::Value = match serde_json::from_str(&stripped) {
        Ok(v) => v,
        Err(e) => {
            warn!(config = %tsconfig_path.display(), error = %e, "failed to parse tsconfig");
            return None;
        }
    };

    let compiler = val.get("compilerOptions")?;
    let tsconfig_dir = tsconfig_path.parent()?;

    let base_url = compiler
        .get("baseUrl")
        .and_then(serde_json::Value::as_str)
        .map(|b| tsconfig_dir.join(b));

    let raw_paths = compiler.get("paths").and_then(|p| p.as_object());
    let mut paths = Vec::new();
    if let Some(map) = raw_paths {
        for (pattern, targets) in map {
            let targets: Vec<String> = targets
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(|v| v.as_str().map(String::from))
                .collect();
            if targets.is_empty() {
                continue;
            }
            if let Some(regex) = compile_pattern(pattern) {
                paths.push(CompiledPattern {
                    source: pattern.clone(),
                    regex,
                    targets,
                });
            }
        }
    }

    Some(CompiledTsConfig {
        config_path: tsconfig_path.to_path_buf(),
        base_url,
        paths,
    })
}

/// Turn a path-mapping pattern into an anchored regex.
///
/// Only the first `*` becomes a capture group; the rest of the pattern is
/// passed through as-is. Patterns that fail to compile are dropped.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    let body = pattern.replacen('*', "(.*)", 1);
    Regex::new(&format!("^{body}$")).ok()
}

/// Strip JSONC comments (`//` line and `/* */` block) while respecting
/// strings, then drop trailing commas before `}` / `]`.
///
/// The trailing-comma pass is a best-effort regex rewrite, not a JSON5
/// parser; a literal `,}` inside a string value would be corrupted.
fn strip_jsonc(input: &str) -> String {
    let stripped = strip_comments(input);
    match TRAILING_COMMA.as_ref() {
        Some(re) => re.replace_all(&stripped, "$1").into_owned(),
        None => stripped,
    }
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        let ch = bytes[i];

        // String literal — copy verbatim until closing quote
        if ch == b'"' {
            out.push('"');
            i += 1;
            while i < len {
                let c = bytes[i];
                out.push(c as char);
                i += 1;
                if c == b'\\' && i < len {
                    out.push(bytes[i] as char);
                    i += 1;
                } else if c == b'"' {
                    break;
                }
            }
            continue;
        }

        // Line comment
        if ch == b'/' && i + 1 < len && bytes[i + 1] == b'/' {
            while i < len && bytes[i] != b'\n' {
                i += 1;
            }
            continue;
        }

        // Block comment
        if ch == b'/' && i + 1 < len && bytes[i + 1] == b'*' {
            i += 2;
            while i + 1 < len && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                i += 1;
            }
            if i + 1 < len {
                i += 2; // skip */
            }
            continue;
        }

        out.push(ch as char);
        i += 1;
    }

    out
}

/// Walk up directories from `start` looking for a `go.mod` module directive.
fn find_go_module(start: &Path) -> Option<GoModule> {
    let mut dir = if start.is_dir() {
        start.to_path_buf()
    } else {
        start.parent()?.to_path_buf()
    };

    loop {
        let candidate = dir.join("go.mod");
        if candidate.is_file() {
            if let Some(module_path) = read_module_directive(&candidate) {
                return Some(GoModule {
                    module_path,
                    root: dir,
                });
            }
            // Unreadable or directive-less go.mod: treated as no module.
            return None;
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Extract the first `module <path>` line from a go.mod file.
fn read_module_directive(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let re = MODULE_DIRECTIVE.as_ref()?;
    for line in content.lines() {
        if let Some(caps) = re.captures(line) {
            return Some(caps[1].to_string());
        }
    }
    None
}

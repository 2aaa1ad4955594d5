/// Supported language ecosystems in modmap.
///
/// This is the central isolation boundary used by extraction and dependency
/// resolution codepaths. New languages should plug in here rather than adding
/// `if ext == ...` checks across the codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    Tsx,
    JavaScript,
    Python,
    Go,
    Java,
    Rust,
}

const JS_FAMILY_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx", ".mts", ".mjs", ".cjs"];

impl Language {
    /// Resolve a file extension (without the dot) to a language ecosystem.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ts" | "mts" => Some(Self::TypeScript),
            "tsx" | "jsx" => Some(Self::Tsx),
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "py" => Some(Self::Python),
            "go" => Some(Self::Go),
            "java" => Some(Self::Java),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    /// Collapse TypeScript/TSX onto the JavaScript-family pathway.
    ///
    /// Their import/export syntax is extraction-compatible, so capability
    /// lookup and the regex fallback key on the normalized family.
    pub fn canonical(self) -> Self {
        match self {
            Self::TypeScript | Self::Tsx => Self::JavaScript,
            other => other,
        }
    }

    /// Whether this language resolves through tsconfig path mapping.
    pub fn is_js_family(self) -> bool {
        matches!(self, Self::TypeScript | Self::Tsx | Self::JavaScript)
    }

    /// Candidate file suffixes tried by the path probe, in preference order.
    ///
    /// Used when the caller's `ResolutionConfig` does not supply its own list.
    pub fn default_extensions(self) -> &'static [&'static str] {
        match self {
            Self::TypeScript | Self::Tsx | Self::JavaScript => JS_FAMILY_EXTENSIONS,
            Self::Python => &[".py"],
            Self::Go => &[".go"],
            Self::Java => &[".java"],
            Self::Rust => &[".rs"],
        }
    }

    /// Human-facing language name for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::Tsx => "TSX",
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Go => "Go",
            Self::Java => "Java",
            Self::Rust => "Rust",
        }
    }
}

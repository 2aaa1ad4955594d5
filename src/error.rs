/// Errors produced by modmap's file-reading entry points.
///
/// Resolution itself never fails: every internal problem (missing config,
/// unreadable directory, parse failure) degrades to "unresolved" per the
/// crate's external-specifier contract.
#[derive(Debug, thiserror::Error)]
pub enum ModmapError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("unsupported extension: .{0}")]
    UnsupportedExtension(String),
}

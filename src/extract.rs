mod ast;
mod fallback;

use std::path::Path;

use crate::error::ModmapError;
use crate::lang::Language;
use crate::model::Extraction;

/// Extract import and export records from source text.
///
/// Pure function of the text: a registered AST capability is tried first and
/// any failure inside it (parser unavailable, parse error) silently degrades
/// to the per-language regex pipeline. Never fails; the worst outcome is an
/// empty extraction.
pub fn extract(content: &str, language: Language) -> Extraction {
    if let Some(support) = ast::support_for(language) {
        let imports = support.find_imports(content);
        let exports = support.find_exports(content);
        if let (Some(imports), Some(exports)) = (imports, exports) {
            return Extraction { imports, exports };
        }
    }
    fallback::extract(content, language.canonical())
}

/// Read a file, detect its language from the extension, and extract.
pub fn extract_file(path: &Path) -> Result<Extraction, ModmapError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let language = Language::from_extension(ext)
        .ok_or_else(|| ModmapError::UnsupportedExtension(ext.to_string()))?;

    let content = std::fs::read_to_string(path).map_err(|e| ModmapError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(extract(&content, language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExportKind, ImportKind};
    use std::fs;

    #[test]
    fn typescript_goes_through_the_ast_capability() {
        let src = "import { a } from './a';\nexport const b = a;\n";
        let out = extract(src, Language::TypeScript);
        assert_eq!(out.imports.len(), 1);
        assert_eq!(out.imports[0].module, "./a");
        assert_eq!(out.exports[0].name, "b");
        assert_eq!(out.exports[0].kind, ExportKind::Const);
    }

    #[test]
    fn tsx_normalizes_onto_the_js_pathway() {
        let src = "import Button from './button';\nexport default function App() { return <Button />; }\n";
        let out = extract(src, Language::Tsx);
        assert_eq!(out.imports[0].module, "./button");
        assert_eq!(out.exports[0].name, "App");
    }

    #[test]
    fn python_uses_the_regex_fallback() {
        let out = extract("from .service import DataService\n", Language::Python);
        assert_eq!(out.imports[0].module, ".service");
        assert_eq!(out.imports[0].kind, ImportKind::From);
    }

    #[test]
    fn extraction_never_fails_on_malformed_source() {
        // Broken syntax in every language still yields a (possibly empty)
        // extraction rather than an error.
        for lang in [
            Language::TypeScript,
            Language::Python,
            Language::Go,
            Language::Java,
            Language::Rust,
        ] {
            let _ = extract("{{{{ ~~~ unterminated \"", lang);
        }
    }

    #[test]
    fn extract_file_detects_language_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.py");
        fs::write(&path, "import os\n").unwrap();

        let out = extract_file(&path).unwrap();
        assert_eq!(out.imports[0].module, "os");
    }

    #[test]
    fn extract_file_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.sql");
        fs::write(&path, "select 1;\n").unwrap();

        assert!(matches!(
            extract_file(&path),
            Err(ModmapError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn extract_file_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.ts");
        assert!(matches!(
            extract_file(&missing),
            Err(ModmapError::Io { .. })
        ));
    }
}

use tree_sitter::Parser;

use crate::lang::Language;

/// Acquire a ready tree-sitter parser for a language, if one is registered.
///
/// `None` means the language has no AST capability (or the grammar failed to
/// load) and extraction should fall back to the regex pipeline.
pub(crate) fn acquire(language: Language) -> Option<Parser> {
    let grammar: tree_sitter::Language = match language {
        Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        Language::TypeScript | Language::JavaScript => {
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
        }
        Language::Python | Language::Go | Language::Java | Language::Rust => return None,
    };

    let mut parser = Parser::new();
    parser.set_language(&grammar).ok()?;
    Some(parser)
}

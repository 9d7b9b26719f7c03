//! Syntax highlighting collaborator used by the `codeblock` tag.

mod languages;
mod engine;

pub use self::languages::find_syntax;
pub use self::engine::{stylesheet, syntax_exists, theme_exists, theme_names, SyntectHighlighter};

use std::fmt::Debug;

/// Errors raised while turning source text into highlighted HTML
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// No lexer could be resolved for the filetype hint
    #[error("no lexer found for filetype '{0}'")]
    NoLexer(String),

    /// The configured theme is not bundled
    #[error("unknown highlighting theme '{0}'")]
    UnknownTheme(String),

    /// The highlighting engine itself failed
    #[error("syntax highlighting failed: {0}")]
    Syntect(#[from] ::syntect::Error),
}

/// Turns source text into an embeddable HTML fragment.
///
/// Implementations pick the lexer. A missing filetype must still produce
/// output (plain text at worst).
pub trait Highlighter: Send + Sync + Debug {
    fn highlight(&self, source: &str, filetype: Option<&str>) -> Result<String, HighlightError>;
}

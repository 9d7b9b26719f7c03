use std::io;

use crate::highlight::HighlightError;

/// Error types for figcode operations
#[derive(Debug, thiserror::Error)]
pub enum FigcodeError {
    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Liquid parsing or rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Syntax highlighting failure surfaced outside a template
    #[error("Highlight error: {0}")]
    Highlight(#[from] HighlightError),

    /// Generic error message
    #[error("{0}")]
    Generic(String),
}

impl From<liquid::Error> for FigcodeError {
    fn from(err: liquid::Error) -> Self {
        FigcodeError::Template(err.to_string())
    }
}

impl From<String> for FigcodeError {
    fn from(msg: String) -> Self {
        FigcodeError::Generic(msg)
    }
}

impl From<&str> for FigcodeError {
    fn from(msg: &str) -> Self {
        FigcodeError::Generic(msg.to_string())
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Site configuration, as far as figcode is concerned.
///
/// Only the `codeblock` section is read; every other key of a Jekyll
/// `_config.yml` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub codeblock: CodeBlockConfig,
}

/// How highlighted tokens are styled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    /// CSS classes, paired with a stylesheet from `figcode css`
    #[default]
    Classes,
    /// Theme colours inlined as `style` attributes
    Inline,
}

/// The `codeblock:` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlockConfig {
    #[serde(default)]
    pub style: HighlightStyle,

    /// Theme used for inline styles and the generated stylesheet
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default)]
    pub line_numbers: bool,

    /// Fail on unknown filetype hints instead of falling back to plain text
    #[serde(default)]
    pub strict: bool,

    /// Extra filetype hint -> syntect syntax name mappings
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Default highlighting theme
fn default_theme() -> String {
    "InspiredGitHub".to_string()
}

impl Default for CodeBlockConfig {
    fn default() -> Self {
        CodeBlockConfig {
            style: HighlightStyle::default(),
            theme: default_theme(),
            line_numbers: false,
            strict: false,
            aliases: BTreeMap::new(),
        }
    }
}

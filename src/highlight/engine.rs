use log::{debug, warn};
use once_cell::sync::Lazy;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{
    css_for_theme_with_class_style, styled_line_to_highlighted_html, ClassStyle,
    ClassedHTMLGenerator, IncludeBackground,
};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use super::languages::find_syntax;
use super::{HighlightError, Highlighter};
use crate::config::{CodeBlockConfig, HighlightStyle};

// Load syntax and theme sets once at startup
static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Names of the bundled themes
pub fn theme_names() -> Vec<String> {
    THEME_SET.themes.keys().cloned().collect()
}

pub fn theme_exists(name: &str) -> bool {
    THEME_SET.themes.contains_key(name)
}

/// Whether `name` resolves to a bundled syntax (alias, extension or name)
pub fn syntax_exists(name: &str) -> bool {
    find_syntax(&SYNTAX_SET, name).is_some()
}

/// CSS for the class-based output of [`SyntectHighlighter`]
pub fn stylesheet(theme_name: &str) -> Result<String, HighlightError> {
    let theme = lookup_theme(theme_name)?;
    Ok(css_for_theme_with_class_style(theme, ClassStyle::Spaced)?)
}

fn lookup_theme(name: &str) -> Result<&'static Theme, HighlightError> {
    THEME_SET
        .themes
        .get(name)
        .ok_or_else(|| HighlightError::UnknownTheme(name.to_string()))
}

/// [`Highlighter`] backed by syntect's bundled syntaxes and themes
#[derive(Debug, Clone, Default)]
pub struct SyntectHighlighter {
    config: CodeBlockConfig,
}

impl SyntectHighlighter {
    pub fn new(config: CodeBlockConfig) -> Self {
        Self { config }
    }

    /// Pick a syntax for the hint, honouring configured aliases first
    fn resolve_syntax(&self, filetype: &str) -> Result<&'static SyntaxReference, HighlightError> {
        let aliased = self
            .config
            .aliases
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(filetype))
            .and_then(|(_, name)| find_syntax(&SYNTAX_SET, name));

        if let Some(syntax) = aliased.or_else(|| find_syntax(&SYNTAX_SET, filetype)) {
            debug!("Filetype '{}' resolved to syntax '{}'", filetype, syntax.name);
            return Ok(syntax);
        }

        if self.config.strict {
            return Err(HighlightError::NoLexer(filetype.to_string()));
        }

        warn!("Unknown language '{}', falling back to plain text", filetype);
        Ok(SYNTAX_SET.find_syntax_plain_text())
    }

    /// Highlight with CSS classes (Jekyll/Rouge compatible)
    fn highlight_with_classes(&self, code: &str, syntax: &SyntaxReference) -> Result<String, HighlightError> {
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);

        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(generator.finalize())
    }

    /// Highlight with the theme's colours inlined
    fn highlight_inline(&self, code: &str, syntax: &SyntaxReference) -> Result<String, HighlightError> {
        let theme = lookup_theme(&self.config.theme)?;
        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut html = String::new();

        for line in LinesWithEndings::from(code) {
            let regions = highlighter.highlight_line(line, &SYNTAX_SET)?;
            html.push_str(&styled_line_to_highlighted_html(&regions[..], IncludeBackground::No)?);
        }

        Ok(html)
    }

    fn pre_open_tag(&self) -> Result<String, HighlightError> {
        if self.config.style == HighlightStyle::Inline {
            let theme = lookup_theme(&self.config.theme)?;
            if let Some(bg) = theme.settings.background {
                return Ok(format!(
                    "<pre class=\"highlight\" style=\"background-color:#{:02x}{:02x}{:02x}\">",
                    bg.r, bg.g, bg.b
                ));
            }
        }
        Ok("<pre class=\"highlight\">".to_string())
    }
}

fn code_open_tag(filetype: Option<&str>) -> String {
    match filetype {
        Some(lang) => {
            let lang = html_escape::encode_double_quoted_attribute(lang);
            format!("<code class=\"language-{}\" data-lang=\"{}\">", lang, lang)
        }
        None => "<code>".to_string(),
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, source: &str, filetype: Option<&str>) -> Result<String, HighlightError> {
        let syntax = match filetype {
            Some(filetype) => self.resolve_syntax(filetype)?,
            None => SYNTAX_SET.find_syntax_plain_text(),
        };

        let body = match self.config.style {
            HighlightStyle::Classes => self.highlight_with_classes(source, syntax)?,
            HighlightStyle::Inline => self.highlight_inline(source, syntax)?,
        };

        let pre = self.pre_open_tag()?;
        let code = code_open_tag(filetype);

        let mut result = String::with_capacity(body.len() + 256);
        result.push_str(r#"<div class="highlight">"#);

        if self.config.line_numbers {
            result.push_str(r#"<table class="highlighttable"><tbody><tr><td class="gutter gl"><pre class="lineno">"#);
            for i in 1..=source.lines().count() {
                result.push_str(&format!("{}\n", i));
            }
            result.push_str(r#"</pre></td><td class="code">"#);
            result.push_str(&pre);
            result.push_str(&code);
            result.push_str(&body);
            result.push_str("</code></pre></td></tr></tbody></table>");
        } else {
            result.push_str(&pre);
            result.push_str(&code);
            result.push_str(&body);
            result.push_str("</code></pre>");
        }

        result.push_str("</div>");
        Ok(result)
    }
}

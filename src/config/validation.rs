use log::warn;

use crate::config::{Config, HighlightStyle};
use crate::highlight;
use crate::utils::error::FigcodeError;

/// Validate the configuration
pub fn validate_config(config: &Config) -> Result<(), FigcodeError> {
    validate_theme(config)?;
    validate_aliases(config);
    Ok(())
}

/// Inline styles cannot render without a real theme; class styles only need
/// it for the stylesheet
fn validate_theme(config: &Config) -> Result<(), FigcodeError> {
    let theme = &config.codeblock.theme;
    if highlight::theme_exists(theme) {
        return Ok(());
    }

    match config.codeblock.style {
        HighlightStyle::Inline => Err(FigcodeError::Config(format!(
            "Unknown highlighting theme '{}' (available: {})",
            theme,
            highlight::theme_names().join(", ")
        ))),
        HighlightStyle::Classes => {
            warn!("Unknown highlighting theme '{}'; `figcode css` will fail", theme);
            Ok(())
        }
    }
}

fn validate_aliases(config: &Config) {
    for (alias, syntax) in &config.codeblock.aliases {
        if !highlight::syntax_exists(syntax) {
            warn!("Alias '{}' points to unknown syntax '{}'", alias, syntax);
        }
    }
}

use log::debug;

use crate::config::Config;
use crate::highlight;
use crate::utils::error::FigcodeError;

/// Handle the css command
pub fn handle_css_command(config: &Config, theme: Option<&str>) -> Result<(), FigcodeError> {
    let theme = theme.unwrap_or(&config.codeblock.theme);
    debug!("Generating stylesheet for theme '{}'", theme);

    let css = highlight::stylesheet(theme)?;
    print!("{}", css);
    Ok(())
}

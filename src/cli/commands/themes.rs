use crate::config::Config;
use crate::highlight;

/// Handle the themes command; the configured theme is marked with `*`
pub fn handle_themes_command(config: &Config) {
    for name in highlight::theme_names() {
        let marker = if name == config.codeblock.theme { "*" } else { " " };
        println!("{} {}", marker, name);
    }
}

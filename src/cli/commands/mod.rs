mod render;
mod parse;
mod css;
mod themes;

pub use render::handle_render_command;
pub use parse::handle_parse_command;
pub use css::handle_css_command;
pub use themes::handle_themes_command;

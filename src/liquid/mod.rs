pub mod preprocess;
pub mod tags;

use liquid::{Object, Parser, ParserBuilder};
use log::debug;
use std::sync::Arc;

use crate::config::Config;
use crate::highlight::{Highlighter, SyntectHighlighter};
use crate::utils::error::FigcodeError;

/// Create a Liquid parser with the stdlib and the `codeblock` tag, highlighting
/// through syntect as configured
pub fn create_parser(config: &Config) -> Result<Parser, FigcodeError> {
    let highlighter = SyntectHighlighter::new(config.codeblock.clone());
    create_parser_with_highlighter(Arc::new(highlighter))
}

/// Same as [`create_parser`] with a caller-supplied highlighter
pub fn create_parser_with_highlighter(highlighter: Arc<dyn Highlighter>) -> Result<Parser, FigcodeError> {
    let parser_builder = tags::register_tags(ParserBuilder::with_stdlib(), highlighter);
    Ok(parser_builder.build()?)
}

/// Parse and render content with Liquid
pub fn render_template(content: &str, parser: &Parser, globals: &Object) -> Result<String, FigcodeError> {
    let preprocessed = preprocess::quote_codeblock_args(content);

    let template = parser
        .parse(&preprocessed)
        .map_err(|e| FigcodeError::Template(format!("Error parsing Liquid template: {}", e)))?;

    template.render(globals).map_err(|e| {
        debug!("Error rendering Liquid template: {}", e);
        FigcodeError::Template(format!("Error rendering Liquid template: {}", e))
    })
}

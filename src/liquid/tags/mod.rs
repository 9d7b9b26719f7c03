mod codeblock;

pub use codeblock::CodeBlock;

use liquid::ParserBuilder;
use std::sync::Arc;

use crate::highlight::Highlighter;

/// Register custom tags for use in Liquid templates
pub fn register_tags(parser_builder: ParserBuilder, highlighter: Arc<dyn Highlighter>) -> ParserBuilder {
    parser_builder.block(CodeBlock::new(highlighter))
}

use liquid_core::{BlockReflection, Error, ParseBlock, Renderable, Runtime, TagBlock, TagTokenIter};
use log::debug;
use std::io::Write;
use std::sync::Arc;

use crate::codeblock::{self, CodeBlockArgs};
use crate::highlight::Highlighter;
use crate::liquid::preprocess::{decode_arguments, unquote};

/// `{% codeblock [lang:x] [label [url [title]]] %}...{% endcodeblock %}`
#[derive(Debug, Clone)]
pub struct CodeBlock {
    highlighter: Arc<dyn Highlighter>,
}

impl CodeBlock {
    pub fn new(highlighter: Arc<dyn Highlighter>) -> Self {
        Self { highlighter }
    }
}

struct CodeBlockReflection;

impl BlockReflection for CodeBlockReflection {
    fn start_tag(&self) -> &str {
        "codeblock"
    }

    fn end_tag(&self) -> &str {
        "endcodeblock"
    }

    fn description(&self) -> &str {
        "Highlighted code figure with an optional caption and link"
    }
}

/// Rebuild the raw argument string from the tag tokens.
///
/// Preprocessed tags carry a single encoded token that decodes back to the
/// exact argument string. Tags that bypassed the preprocessor fall back to
/// their tokens joined with single spaces.
fn raw_arguments(arguments: TagTokenIter) -> String {
    let tokens: Vec<String> = arguments.map(|token| token.as_str().to_string()).collect();
    match tokens.as_slice() {
        [] => String::new(),
        [single] => decode_arguments(single).unwrap_or_else(|| unquote(single).to_string()),
        many => many.join(" "),
    }
}

impl ParseBlock for CodeBlock {
    fn reflection(&self) -> &dyn BlockReflection {
        &CodeBlockReflection
    }

    fn parse(
        &self,
        arguments: TagTokenIter,
        mut content: TagBlock<'_, '_>,
        _options: &liquid_core::parser::Language,
    ) -> Result<Box<dyn Renderable>, Error> {
        let raw = raw_arguments(arguments);
        let args = CodeBlockArgs::parse(&raw);

        // The body is kept verbatim; Liquid inside it is not evaluated
        let body = content.escape_liquid(false)?.to_string();
        content.assert_empty();

        debug!("codeblock tag: args={:?}, {} bytes of body", raw, body.len());

        Ok(Box::new(CodeBlockRenderer {
            caption_html: args.caption_html(),
            args,
            body,
            highlighter: Arc::clone(&self.highlighter),
        }))
    }
}

/// Renderer for one parsed `codeblock` invocation
#[derive(Debug)]
struct CodeBlockRenderer {
    args: CodeBlockArgs,
    caption_html: Option<String>,
    body: String,
    highlighter: Arc<dyn Highlighter>,
}

impl Renderable for CodeBlockRenderer {
    fn render(&self, _runtime: &dyn Runtime) -> Result<String, Error> {
        codeblock::render(
            &self.body,
            self.args.filetype(),
            self.caption_html.as_deref(),
            self.highlighter.as_ref(),
        )
        .map_err(|e| Error::with_msg(format!("codeblock: {}", e)))
    }

    fn render_to(&self, writer: &mut dyn Write, runtime: &dyn Runtime) -> Result<(), Error> {
        let s = self.render(runtime)?;
        writer
            .write_all(s.as_bytes())
            .map_err(|e| Error::with_msg(format!("Failed to write to output: {}", e)))?;
        Ok(())
    }
}

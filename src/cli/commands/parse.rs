use serde::Serialize;

use crate::codeblock::{CaptionSpec, CodeBlockArgs};
use crate::utils::error::FigcodeError;

/// What `figcode parse` prints
#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    raw: &'a str,
    filetype: Option<&'a str>,
    caption: &'a CaptionSpec,
    caption_html: Option<String>,
}

fn report_json(raw: &str) -> Result<String, FigcodeError> {
    let args = CodeBlockArgs::parse(raw);
    let report = ParseReport {
        raw,
        filetype: args.filetype(),
        caption: &args.caption,
        caption_html: args.caption_html(),
    };

    serde_json::to_string_pretty(&report)
        .map_err(|e| FigcodeError::Generic(format!("Failed to serialize parse result: {}", e)))
}

/// Handle the parse command
pub fn handle_parse_command(raw: &str) -> Result<(), FigcodeError> {
    println!("{}", report_json(raw)?);
    Ok(())
}

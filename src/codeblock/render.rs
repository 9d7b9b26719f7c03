use log::debug;

use crate::highlight::{HighlightError, Highlighter};

/// Class on the enclosing `<figure>` element
pub const FIGURE_CLASS: &str = "code";

/// Render one code figure.
///
/// The body is trimmed at both ends only. Highlighter failures are returned
/// as-is.
pub fn render(
    body: &str,
    filetype: Option<&str>,
    caption_html: Option<&str>,
    highlighter: &dyn Highlighter,
) -> Result<String, HighlightError> {
    let code = body.trim();
    debug!(
        "Rendering code figure: filetype={:?}, {} bytes, caption={}",
        filetype,
        code.len(),
        caption_html.is_some()
    );

    let highlighted = highlighter.highlight(code, filetype)?;

    let mut figure = String::with_capacity(highlighted.len() + 64);
    figure.push_str("<figure class=\"");
    figure.push_str(FIGURE_CLASS);
    figure.push_str("\">");
    if let Some(caption) = caption_html {
        figure.push_str(caption);
    }
    figure.push_str(&highlighted);
    figure.push_str("</figure>");

    Ok(figure)
}

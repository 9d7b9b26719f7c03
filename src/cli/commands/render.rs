use liquid::Object;
use log::info;
use std::path::Path;

use crate::config::Config;
use crate::markdown;
use crate::utils::error::FigcodeError;
use crate::utils::fs;

/// Handle the render command
pub fn handle_render_command(
    config: &Config,
    input: Option<&Path>,
    markdown_pass: bool,
    output: Option<&Path>,
) -> Result<(), FigcodeError> {
    let content = fs::read_input(input)?;
    let parser = crate::liquid::create_parser(config)?;
    let globals = Object::new();

    let html = if markdown_pass {
        markdown::render_post(&content, &parser, &globals)?
    } else {
        crate::liquid::render_template(&content, &parser, &globals)?
    };

    fs::write_output(output, &html)?;

    if let Some(output) = output {
        info!("Rendered {} bytes to {}", html.len(), output.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    #[test]
    fn test_render_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("post.md");
        let output = dir.path().join("_site/post.html");
        stdfs::write(
            &input,
            "# Ads\n\n{% codeblock Example of altered hosts file https://example.com/img.png %}\n0.0.0.0 ads.example\n{% endcodeblock %}\n",
        )
        .unwrap();

        handle_render_command(&Config::default(), Some(&input), true, Some(&output)).unwrap();

        let html = stdfs::read_to_string(&output).unwrap();
        assert!(html.contains("<h1>Ads</h1>"));
        assert!(html.contains("<a href=\"https://example.com/img.png\">link</a>"));
    }

    #[test]
    fn test_template_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.html");
        stdfs::write(&input, "{% codeblock x.rb %}never closed").unwrap();

        let err = handle_render_command(&Config::default(), Some(&input), false, None).unwrap_err();
        assert!(matches!(err, FigcodeError::Template(_)));
    }
}

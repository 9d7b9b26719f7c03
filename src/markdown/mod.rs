//! Markdown pass run after Liquid, the way Jekyll renders a post.

use comrak::Options;
use liquid::{Object, Parser};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::utils::error::FigcodeError;

/// A rendered code figure, as produced by the `codeblock` tag
static CODE_FIGURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<figure class="code">.*?</figure>"#).expect("figure regex is valid")
});

/// Placeholder comment name, lengthened until it does not occur in `text`
fn placeholder_marker(text: &str) -> String {
    let mut marker = String::from("figcode");
    while text.contains(&format!("<!--{}:", marker)) {
        marker.push('_');
    }
    marker
}

/// Create default comrak options with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.tagfilter = false;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    // Liquid output is raw HTML and has to survive
    options.render.unsafe_ = true;

    options.parse.smart = true;

    options
}

/// Render markdown to HTML using comrak
pub fn render_markdown(content: &str) -> String {
    comrak::markdown_to_html(content, &create_comrak_options())
}

/// Render a post: Liquid first, then Markdown.
///
/// Code figures are swapped out for HTML comments during the Markdown pass;
/// blank lines inside highlighted code would otherwise end the raw HTML block
/// and get reformatted as Markdown.
pub fn render_post(content: &str, parser: &Parser, globals: &Object) -> Result<String, FigcodeError> {
    let liquid_output = crate::liquid::render_template(content, parser, globals)?;

    let marker = placeholder_marker(&liquid_output);
    let placeholder = Regex::new(&format!(
        r"(?:<p>)?<!--{}:(\d+)-->(?:</p>)?\n?",
        regex::escape(&marker)
    ))
    .map_err(|e| FigcodeError::Generic(format!("Invalid figure placeholder pattern: {}", e)))?;

    let mut figures: Vec<String> = Vec::new();
    let stashed = CODE_FIGURE.replace_all(&liquid_output, |caps: &Captures| {
        figures.push(caps[0].to_string());
        format!("\n\n<!--{}:{}-->\n\n", marker, figures.len() - 1)
    });
    debug!("Stashed {} code figures for the markdown pass", figures.len());

    let html = render_markdown(&stashed);

    let restored = placeholder.replace_all(&html, |caps: &Captures| {
        let figure = caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| figures.get(index));
        match figure {
            Some(figure) => format!("{}\n", figure),
            None => caps[0].to_string(),
        }
    });

    Ok(restored.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::liquid::create_parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comrak_rendering() {
        let html = render_markdown("# Hello, World!\n\nThis is a **bold** statement.");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_post_keeps_code_figures_intact() {
        let parser = create_parser(&Config::default()).unwrap();
        let post = "Intro *text*.\n\n\
                    {% codeblock lang:bash /etc/systemd/system/hblock.timer %}\n\
                    [Timer]\n\nOnCalendar=daily\n\
                    {% endcodeblock %}\n\n\
                    Outro.\n";

        let html = render_post(post, &parser, &Object::new()).unwrap();

        assert!(html.contains("<p>Intro <em>text</em>.</p>"));
        assert!(html.contains("<p>Outro.</p>"));
        assert!(html.contains("<figure class=\"code\"><figcaption><span>/etc/systemd/system/hblock.timer</span></figcaption>"));
        assert!(!html.contains("figcode:"));
        // The blank line inside the code did not split the figure
        let figure = CODE_FIGURE.find(&html).unwrap().as_str();
        assert!(figure.contains("OnCalendar"));
        assert!(!figure.contains("<p>"));
    }

    #[test]
    fn test_post_with_several_figures_keeps_order() {
        let parser = create_parser(&Config::default()).unwrap();
        let post = "{% codeblock first.txt %}1{% endcodeblock %}\n\n\
                    middle\n\n\
                    {% codeblock second.txt %}2{% endcodeblock %}\n";

        let html = render_post(post, &parser, &Object::new()).unwrap();
        let captions: Vec<&str> = CODE_FIGURE
            .find_iter(&html)
            .map(|m| m.as_str())
            .collect();

        assert_eq!(captions.len(), 2);
        assert!(captions[0].contains("first.txt"));
        assert!(captions[1].contains("second.txt"));
        assert!(html.contains("<p>middle</p>"));
    }

    #[test]
    fn test_placeholder_marker_avoids_existing_comments() {
        assert_eq!(placeholder_marker("plain text"), "figcode");
        assert_eq!(placeholder_marker("<!--figcode:0-->"), "figcode_");
        assert_eq!(placeholder_marker("<!--figcode:0--> <!--figcode_:1-->"), "figcode__");
    }

    #[test]
    fn test_literal_placeholder_comment_is_left_alone() {
        let parser = create_parser(&Config::default()).unwrap();
        let post = "<!--figcode:0-->\n\n{% codeblock a.txt %}1{% endcodeblock %}\n";

        let html = render_post(post, &parser, &Object::new()).unwrap();

        assert!(html.starts_with("<!--figcode:0-->\n"));
        assert_eq!(CODE_FIGURE.find_iter(&html).count(), 1);
        assert!(!html.contains("figcode_"));
    }
}

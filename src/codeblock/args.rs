use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `lang:<token>` marker with any whitespace in front of it
static LANG_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*lang:(\S+)").expect("lang marker regex is valid")
});

/// Label, whitespace, URL-like token, optional link title
static CAPTION_WITH_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\S[\S\s]*)\s+(https?://\S+|/\S+)\s*(.+)?")
        .expect("caption-with-link regex is valid")
});

/// Trailing `.ext` preceded by an ASCII word character
static TRAILING_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\w)\.((?-u:\w)+)$").expect("extension regex is valid")
});

/// Link text used when a caption URL carries no explicit title
pub const DEFAULT_LINK_TITLE: &str = "link";

/// Raw tag arguments split into the `lang:` marker and everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagArguments {
    pub explicit_language: Option<String>,
    pub remainder: String,
}

impl TagArguments {
    /// Pull the first `lang:<token>` marker out of `raw`.
    ///
    /// The marker and the whitespace in front of it are removed; the rest is
    /// trimmed and becomes the caption source.
    pub fn parse(raw: &str) -> Self {
        match LANG_MARKER.captures(raw) {
            Some(caps) => {
                let marker = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
                let language = caps.get(1).map(|m| m.as_str().to_string());

                let mut remainder = String::with_capacity(raw.len());
                remainder.push_str(&raw[..marker.start]);
                remainder.push_str(&raw[marker.end..]);

                TagArguments {
                    explicit_language: language,
                    remainder: remainder.trim().to_string(),
                }
            }
            None => TagArguments {
                explicit_language: None,
                remainder: raw.trim().to_string(),
            },
        }
    }
}

/// What the caption part of the arguments turned out to be
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaptionSpec {
    NoCaption,
    LabelOnly {
        label: String,
    },
    LabelWithLink {
        label: String,
        url: String,
        link_title: String,
    },
}

impl CaptionSpec {
    /// Classify a `lang:`-free remainder. First matching rule wins.
    pub fn classify(remainder: &str) -> Self {
        let remainder = remainder.trim();

        if let Some(caps) = CAPTION_WITH_LINK.captures(remainder) {
            let label = caps.get(1).map_or("", |m| m.as_str());
            let url = caps.get(2).map_or("", |m| m.as_str());
            let link_title = caps
                .get(3)
                .map_or(DEFAULT_LINK_TITLE, |m| m.as_str());

            return CaptionSpec::LabelWithLink {
                label: label.to_string(),
                url: url.to_string(),
                link_title: link_title.to_string(),
            };
        }

        if !remainder.is_empty() {
            return CaptionSpec::LabelOnly {
                label: remainder.to_string(),
            };
        }

        CaptionSpec::NoCaption
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            CaptionSpec::NoCaption => None,
            CaptionSpec::LabelOnly { label } | CaptionSpec::LabelWithLink { label, .. } => {
                Some(label.as_str())
            }
        }
    }

    /// The `<figcaption>` block, or `None` when there is nothing to show
    pub fn to_html(&self) -> Option<String> {
        match self {
            CaptionSpec::NoCaption => None,
            CaptionSpec::LabelOnly { label } => Some(format!(
                "<figcaption><span>{}</span></figcaption>",
                html_escape::encode_text(label)
            )),
            CaptionSpec::LabelWithLink { label, url, link_title } => Some(format!(
                "<figcaption><span>{}</span><a href=\"{}\">{}</a></figcaption>",
                html_escape::encode_text(label),
                html_escape::encode_double_quoted_attribute(url),
                html_escape::encode_text(link_title)
            )),
        }
    }
}

/// Filetype implied by a label such as `example.rb`.
///
/// Only the last `.word` run anchored at the very end of the label counts, and
/// the dot must follow an ASCII word character.
pub fn filetype_from_label(label: &str) -> Option<&str> {
    TRAILING_EXTENSION
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Fully parsed arguments of one `codeblock` invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlockArgs {
    pub filetype: Option<String>,
    pub caption: CaptionSpec,
}

impl CodeBlockArgs {
    pub fn parse(raw: &str) -> Self {
        let arguments = TagArguments::parse(raw);
        let caption = CaptionSpec::classify(&arguments.remainder);

        let filetype = match arguments.explicit_language {
            Some(language) => Some(language),
            None => caption
                .label()
                .and_then(filetype_from_label)
                .map(str::to_string),
        };

        debug!(
            "codeblock args {:?}: filetype={:?}, caption={:?}",
            raw, filetype, caption
        );

        CodeBlockArgs { filetype, caption }
    }

    pub fn filetype(&self) -> Option<&str> {
        self.filetype.as_deref()
    }

    pub fn caption_html(&self) -> Option<String> {
        self.caption.to_html()
    }
}

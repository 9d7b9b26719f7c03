use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Any Liquid tag: opening delimiter, name, raw arguments, closing delimiter
static LIQUID_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(\{%-?\s*)(\w+)(.*?)(-?%\})").expect("liquid tag regex is valid")
});

/// Marks a codeblock argument token produced by [`quote_codeblock_args`]
pub const ENCODED_ARGS_PREFIX: &str = "figcode:";

/// Where the scanner currently is in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Template,
    Raw,
    CodeBlock,
}

/// Encode the arguments of every `codeblock` opening tag.
///
/// Captions hold paths, URLs, quotes and free text that the Liquid tokenizer
/// rejects as bare tokens, so the argument string is hex-encoded into one
/// string literal and decoded again by the tag. Text inside `{% raw %}` and
/// inside codeblock bodies is left alone.
pub fn quote_codeblock_args(content: &str) -> String {
    let mut region = Region::Template;

    LIQUID_TAG
        .replace_all(content, |caps: &Captures| {
            let name = &caps[2];
            let args = caps[3].trim();

            match region {
                Region::Template => match name {
                    "raw" => region = Region::Raw,
                    "codeblock" => {
                        region = Region::CodeBlock;
                        debug!("Preprocessing codeblock tag arguments: {}", args);
                        return format!(
                            "{}{} \"{}\" {}",
                            &caps[1],
                            name,
                            encode_arguments(args),
                            &caps[4]
                        );
                    }
                    _ => {}
                },
                // A closing tag with arguments does not close the block
                Region::Raw if name == "endraw" && args.is_empty() => region = Region::Template,
                Region::CodeBlock if name == "endcodeblock" && args.is_empty() => {
                    region = Region::Template
                }
                Region::Raw | Region::CodeBlock => {}
            }

            caps[0].to_string()
        })
        .into_owned()
}

/// Wrap raw codeblock arguments into a tokenizer-safe literal body
pub fn encode_arguments(args: &str) -> String {
    format!("{}{}", ENCODED_ARGS_PREFIX, hex::encode(args))
}

/// Decode a token written by [`encode_arguments`].
///
/// Returns `None` for tokens that were not encoded by the preprocessor.
pub fn decode_arguments(token: &str) -> Option<String> {
    let encoded = unquote(token).strip_prefix(ENCODED_ARGS_PREFIX)?;
    match hex::decode(encoded).map(String::from_utf8) {
        Ok(Ok(args)) => Some(args),
        _ => {
            warn!("Malformed encoded codeblock arguments: {}", token);
            None
        }
    }
}

/// Strip one pair of matching quotes from a token
pub fn unquote(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &token[1..token.len() - 1];
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opening(args: &str) -> String {
        format!("{{% codeblock \"{}\" %}}", encode_arguments(args))
    }

    #[test]
    fn test_encodes_arguments() {
        assert_eq!(
            quote_codeblock_args("{% codeblock lang:bash /etc/hosts %}\n127.0.0.1\n{% endcodeblock %}"),
            format!("{}\n127.0.0.1\n{{% endcodeblock %}}", opening("lang:bash /etc/hosts"))
        );
    }

    #[test]
    fn test_encoded_token_is_tokenizer_safe() {
        let encoded = encode_arguments("Bob's \"hosts\" file /etc/hosts");
        assert!(encoded.starts_with(ENCODED_ARGS_PREFIX));
        assert!(encoded[ENCODED_ARGS_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_decode_restores_arguments_exactly() {
        let raw = "It's a \"demo\" https://x.com/a  the   title";
        let token = format!("\"{}\"", encode_arguments(raw));
        assert_eq!(decode_arguments(&token).as_deref(), Some(raw));
    }

    #[test]
    fn test_decode_rejects_foreign_tokens() {
        assert_eq!(decode_arguments("\"Gemfile\""), None);
        assert_eq!(decode_arguments("\"figcode:zz\""), None);
        assert_eq!(decode_arguments("\"figcode:ff\""), None);
    }

    #[test]
    fn test_whitespace_control_is_kept() {
        assert_eq!(
            quote_codeblock_args("{%- codeblock Gemfile -%}"),
            format!("{{%- codeblock \"{}\" -%}}", encode_arguments("Gemfile"))
        );
    }

    #[test]
    fn test_empty_arguments() {
        assert_eq!(quote_codeblock_args("{% codeblock %}"), opening(""));
        assert_eq!(quote_codeblock_args("{%codeblock%}"), "{%codeblock \"figcode:\" %}");
    }

    #[test]
    fn test_raw_region_is_untouched() {
        let input = "{% raw %}{% codeblock lang:ruby demo.rb %}{% endraw %}";
        assert_eq!(quote_codeblock_args(input), input);
    }

    #[test]
    fn test_tag_after_raw_region_is_encoded() {
        let input = "{% raw %}{% codeblock a %}{% endraw %}{% codeblock b %}x{% endcodeblock %}";
        assert_eq!(
            quote_codeblock_args(input),
            format!("{{% raw %}}{{% codeblock a %}}{{% endraw %}}{}x{{% endcodeblock %}}", opening("b"))
        );
    }

    #[test]
    fn test_codeblock_body_is_untouched() {
        let input = "{% codeblock usage.md %}Use {% codeblock demo.rb %} like so{% endcodeblock %}";
        assert_eq!(
            quote_codeblock_args(input),
            format!("{}Use {{% codeblock demo.rb %}} like so{{% endcodeblock %}}", opening("usage.md"))
        );
    }

    #[test]
    fn test_closing_tag_with_arguments_does_not_close() {
        let input = "{% codeblock a %}{% endcodeblock x %}{% codeblock b %}{% endcodeblock %}";
        assert_eq!(
            quote_codeblock_args(input),
            format!("{}{{% endcodeblock x %}}{{% codeblock b %}}{{% endcodeblock %}}", opening("a"))
        );
    }

    #[test]
    fn test_other_tags_untouched() {
        let input = "{% endcodeblock %}{% include footer.html %}{% highlight ruby %}{% codeblocks x %}";
        assert_eq!(quote_codeblock_args(input), input);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"a b\""), "a b");
        assert_eq!(unquote("'a b'"), "a b");
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote("\"mismatched'"), "\"mismatched'");
        assert_eq!(unquote("bare"), "bare");
    }
}

use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Map Jekyll/Rouge language names to syntect syntax names
fn rouge_alias(lang: &str) -> Option<&'static str> {
    let name = match lang {
        "ruby" | "rb" | "gemfile" | "rake" => "Ruby",
        "python" | "py" | "python3" => "Python",
        "javascript" | "js" | "node" => "JavaScript",
        "java" => "Java",
        "c" | "h" => "C",
        "cpp" | "c++" | "cxx" | "hpp" => "C++",
        "csharp" | "cs" | "c#" => "C#",
        "php" => "PHP",
        "html" | "htm" => "HTML",
        "xml" | "svg" => "XML",
        "css" => "CSS",
        "json" => "JSON",
        "yaml" | "yml" => "YAML",
        "markdown" | "md" => "Markdown",
        "rust" | "rs" => "Rust",
        "go" | "golang" => "Go",
        "shell" | "bash" | "sh" | "zsh" | "console" | "shell-session" => "Bourne Again Shell (bash)",
        "sql" => "SQL",
        "makefile" | "make" | "mk" => "Makefile",
        "diff" | "patch" => "Diff",
        "lua" => "Lua",
        "perl" | "pl" => "Perl",
        "haskell" | "hs" => "Haskell",
        "tex" | "latex" => "LaTeX",
        "text" | "plain" | "plaintext" | "txt" => "Plain Text",
        _ => return None,
    };
    Some(name)
}

/// Resolve a filetype hint against `syntax_set`.
///
/// Known Rouge aliases go first, then syntect's own token lookup (extension or
/// name), then a case-insensitive scan of syntax names.
pub fn find_syntax<'a>(syntax_set: &'a SyntaxSet, lang: &str) -> Option<&'a SyntaxReference> {
    let lowered = lang.to_lowercase();

    if let Some(syntax) = rouge_alias(&lowered).and_then(|name| syntax_set.find_syntax_by_name(name)) {
        return Some(syntax);
    }

    if let Some(syntax) = syntax_set.find_syntax_by_token(lang) {
        return Some(syntax);
    }

    syntax_set
        .syntaxes()
        .iter()
        .find(|syntax| syntax.name.to_lowercase() == lowered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

    fn name_of(lang: &str) -> Option<String> {
        find_syntax(&SYNTAX_SET, lang).map(|s| s.name.clone())
    }

    #[test]
    fn test_rouge_aliases() {
        assert_eq!(name_of("rb").as_deref(), Some("Ruby"));
        assert_eq!(name_of("bash").as_deref(), Some("Bourne Again Shell (bash)"));
        assert_eq!(name_of("yml").as_deref(), Some("YAML"));
        assert_eq!(name_of("RUST").as_deref(), Some("Rust"));
    }

    #[test]
    fn test_extension_lookup() {
        assert_eq!(name_of("py").as_deref(), Some("Python"));
        assert_eq!(name_of("erl").as_deref(), Some("Erlang"));
    }

    #[test]
    fn test_name_lookup_is_case_insensitive() {
        assert_eq!(name_of("erlang").as_deref(), Some("Erlang"));
    }

    #[test]
    fn test_unknown_language() {
        assert_eq!(name_of("timer"), None);
        assert_eq!(name_of("klingon"), None);
    }
}

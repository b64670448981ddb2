/// Escape the five HTML special characters `& < > " '`.
///
/// Apply to raw text exactly once; escaped output run through again will
/// have its `&` escaped a second time.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<b>&x</b>", "&lt;b&gt;&amp;x&lt;/b&gt;")]
    #[case(r#"say "hi""#, "say &quot;hi&quot;")]
    #[case("it's", "it&#39;s")]
    #[case("plain text", "plain text")]
    #[case("", "")]
    #[case("&amp;", "&amp;amp;")]
    #[case("日本語 <tag>", "日本語 &lt;tag&gt;")]
    fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
    }
}

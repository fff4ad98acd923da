//! Escaping for user-supplied text that ends up inside markup.

/// Escapes `&`, `<`, `>`, `"` and `'` so the result can be inserted as HTML
/// text or attribute content without being interpreted as markup.
pub fn escape_html(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for ch in unsafe_text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_every_markup_character() {
        assert_eq!(
            escape_html(r#"<img src=x onerror="alert('hi')"> & more"#),
            "&lt;img src=x onerror=&quot;alert(&#039;hi&#039;)&quot;&gt; &amp; more"
        );
    }

    #[test]
    fn ampersand_is_escaped_once() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("You are loved ♥"), "You are loved ♥");
        assert_eq!(escape_html(""), "");
    }
}

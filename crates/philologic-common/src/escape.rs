//! HTML escaping for text interpolated into rendered markup.

/// Escape the five HTML-reserved characters.
///
/// Runs in a single pass, so an `&` introduced by one replacement is never
/// escaped again. Call it once, at the point the text enters markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for ch in s.chars() {
        match ch {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _    => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag_has_no_angle_brackets() {
        let escaped = escape_html("<script>alert(1)</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_all_reserved_characters() {
        assert_eq!(
            escape_html(r#"a & b "c" 'd'"#),
            "a &amp; b &quot;c&quot; &#039;d&#039;"
        );
    }

    #[test]
    fn test_empty_and_plain_text_untouched() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("Allegory of the Cave"), "Allegory of the Cave");
    }

    #[test]
    fn test_existing_entity_is_escaped_once() {
        // Input that already looks escaped is still just text.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_non_ascii_preserved() {
        assert_eq!(escape_html("Übermensch <é>"), "Übermensch &lt;é&gt;");
    }
}

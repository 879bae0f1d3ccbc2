//! Free-text sanitization.

/// Strip naive HTML/attribute injection characters from free text.
///
/// Removes every `<`, `>`, `'` and `"` and trims surrounding whitespace.
/// Defense in depth for values that may later be echoed into markup; output
/// encoding at render time is still required and this must not be relied on
/// as the sole XSS defense.
pub fn sanitize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\'' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup_characters_and_trims() {
        let cleaned = sanitize_input("  <a>\"b\"</a>  ");
        assert_eq!(cleaned, "ab/a");
        assert!(!cleaned.contains(['<', '>', '\'', '"']));
        assert_eq!(sanitize_input("δοκιμή 'test'"), "δοκιμή test");
        assert_eq!(sanitize_input("plain text"), "plain text");
    }

    #[test]
    fn is_idempotent() {
        for input in ["  <script>alert('x')</script>  ", "αβγ", "\"\"''<><>", ""] {
            let once = sanitize_input(input);
            assert_eq!(sanitize_input(&once), once);
        }
    }

    #[test]
    fn whitespace_only_input_becomes_empty() {
        assert_eq!(sanitize_input("   "), "");
        assert_eq!(sanitize_input("<>\"'"), "");
    }
}

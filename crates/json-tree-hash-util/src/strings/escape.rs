use std::borrow::Cow;

/// Escape double quotes in a string for the canonical form.
///
/// The canonical byte string double-quotes string values and escapes internal
/// `"` as `\"`. No other characters are rewritten: the canonical string is
/// digest input and is never re-parsed.
///
/// Returns a borrowed `Cow` when no escaping is needed.
///
/// # Examples
///
/// ```
/// use json_tree_hash_util::strings::escape_quotes;
///
/// assert_eq!(escape_quotes("hello"), "hello");
/// assert_eq!(escape_quotes("say \"hi\""), "say \\\"hi\\\"");
/// ```
pub fn escape_quotes(s: &str) -> Cow<'_, str> {
    if !s.contains('"') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 2);
    let mut last = 0;
    for (i, ch) in s.char_indices() {
        if ch == '"' {
            result.push_str(&s[last..i]);
            result.push_str("\\\"");
            last = i + 1;
        }
    }
    result.push_str(&s[last..]);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_escape_needed() {
        assert!(matches!(escape_quotes("plain"), Cow::Borrowed(_)));
        assert_eq!(escape_quotes("plain"), "plain");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(escape_quotes("\""), "\\\"");
        assert_eq!(escape_quotes("a\"b\"c"), "a\\\"b\\\"c");
    }

    #[test]
    fn leaves_other_specials_alone() {
        assert_eq!(escape_quotes("a\\b\nc"), "a\\b\nc");
    }

    #[test]
    fn multibyte_untouched() {
        assert_eq!(escape_quotes("héllo \"wörld\""), "héllo \\\"wörld\\\"");
    }
}

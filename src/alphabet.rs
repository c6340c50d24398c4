
pub const ANY_ONE: char = '?';
pub const ANY_MANY: char = '*';

/// Canonical case for stored words and queries. Folds one character at a
/// time so a letter always maps the same way regardless of its neighbours.
pub fn normalize(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn is_wildcard(c: char) -> bool {
    c == ANY_ONE || c == ANY_MANY
}

pub fn is_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || is_wildcard(c)
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{is_pattern_char, normalize, strip_whitespace};

    #[test]
    fn normalizes_to_lowercase() {
        assert_eq!(normalize("HeLLo"), "hello");
        assert_eq!(normalize("ÉCOLE"), "école");
    }

    #[test]
    fn folds_without_context() {
        assert_eq!(normalize("ΟΔΟΣ"), "οδοσ");
        assert_eq!(normalize("ΟΔΟΣA"), "οδοσa");
        assert_eq!(normalize("İ"), "i\u{307}");
    }

    #[test]
    fn strips_inner_whitespace() {
        assert_eq!(strip_whitespace("  new york\t\r"), "newyork");
        assert_eq!(strip_whitespace(" \t "), "");
    }

    #[test]
    fn pattern_chars() {
        "az09?*Z".chars().for_each(|c| assert!(is_pattern_char(c)));
        "@ .-_[".chars().for_each(|c| assert!(!is_pattern_char(c)));
    }
}

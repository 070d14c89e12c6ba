//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Website pattern: optional http(s) scheme, one or more dotted labels, a
/// 2+ character final label and an optional path.
pub const URL_PATTERN: &str = r"^(https?://)?([A-Za-z0-9_-]+\.)+[A-Za-z0-9_]{2,}(/.*)?$";

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(URL_PATTERN).expect("url pattern compiles"));

/// Length in UTF-16 code units, the unit browsers use for `minlength`,
/// `maxlength` and `String.length`. Characters outside the BMP count twice.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

pub fn has_min_length(s: &str, min: usize) -> bool {
    utf16_len(s) >= min
}

pub fn has_max_length(s: &str, max: usize) -> bool {
    utf16_len(s) <= max
}

/// URL validation against the website pattern
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// Compiled website pattern
pub fn url_regex() -> &'static Regex {
    &URL_REGEX
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(has_min_length("abcdef", 6));
        assert!(!has_min_length("abcde", 6));
        assert!(has_max_length("a".repeat(20).as_str(), 20));
        assert!(!has_max_length("a".repeat(21).as_str(), 20));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert_eq!(utf16_len("héllo"), 5);
        assert!(has_min_length("ñandú!", 6));

        // Astral characters are surrogate pairs
        assert_eq!(utf16_len("😀😀😀"), 6);
        assert!(has_min_length("😀😀😀", 6));
        assert!(!has_max_length(&"😀".repeat(11), 20));
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://sub.example.co.uk/path?q=1"));
        assert!(is_valid_url("my-site.dev/"));

        assert!(!is_valid_url("ht!tp://bad"));
        assert!(!is_valid_url("localhost"));
        assert!(!is_valid_url("example.c"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_enum_variant() {
        let allowed = &["General Access", "VIP", "Student"];
        assert!(is_one_of("VIP", allowed));
        assert!(!is_one_of("vip", allowed));
        assert!(!is_one_of("", allowed));
    }
}

//! Numeric validation functions

/// Inclusive lower bound check
pub fn is_at_least<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

/// Inclusive upper bound check
pub fn is_at_most<T: PartialOrd>(value: T, max: T) -> bool {
    value <= max
}

/// Inclusive range check
pub fn is_in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Parses a number typed into a numeric input. Surrounding whitespace is
/// ignored; anything else that is not a finite number yields `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(is_at_least(18.0, 18.0));
        assert!(!is_at_least(17.0, 18.0));
        assert!(is_at_most(100.0, 100.0));
        assert!(!is_at_most(101.0, 100.0));
        assert!(is_in_range(50, 18, 100));
        assert!(!is_in_range(17, 18, 100));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" 18 "), Some(18.0));
        assert_eq!(parse_number("17.5"), Some(17.5));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("inf"), None);
    }
}

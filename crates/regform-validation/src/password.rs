//! Password validation functions

/// Minimum password length, counted in UTF-16 code units
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols accepted as the "special character" of a password
pub const PASSWORD_SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Checks the registration password policy: 8+ characters, at least one
/// ASCII digit and at least one of `!@#$%^&*`.
///
/// # Examples
/// ```
/// use regform_validation::password::validate_password;
/// assert!(validate_password("abc12345!"));
/// assert!(!validate_password("abcdefgh"));
/// ```
pub fn validate_password(password: &str) -> bool {
    crate::string::utf16_len(password) >= PASSWORD_MIN_LENGTH
        && has_digit(password)
        && has_symbol(password)
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| PASSWORD_SYMBOLS.contains(&c))
}

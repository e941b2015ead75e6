use std::{fmt::Display, sync::LazyLock};

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Letters only, words separated by a single space, hyphen or apostrophe
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+([ \-'][a-zA-Z]+)*$").expect("valid name regex"));

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_SYMBOLS: &str = "#?!@$%^&*-";

/// First failing rule of the sign-in/sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Name,
    Email,
    Password,
}

impl ValidationError {
    /// Form field the message is shown beside
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Name => "name",
            ValidationError::Email => "email",
            ValidationError::Password => "password",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Name => write!(f, "Name is not valid"),
            ValidationError::Email => write!(f, "Email Address is not valid"),
            ValidationError::Password => write!(f, "Password is not valid"),
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least eight characters on a single line, with an uppercase letter, a
/// lowercase letter, a digit and one of `#?!@$%^&*-`
///
/// Length is counted in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane counts twice.
pub fn is_valid_password(password: &str) -> bool {
    let single_line = !password
        .chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'));

    single_line
        && password.encode_utf16().count() >= PASSWORD_MIN_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Validates the sign-up form. Rules are checked name, email, password and
/// the first failure is returned.
pub fn check_valid_data(email: &str, password: &str, name: &str) -> Option<ValidationError> {
    if !is_valid_name(name) {
        return Some(ValidationError::Name);
    }
    check_credentials(email, password)
}

/// Validates the sign-in form, which has no name field
pub fn check_credentials(email: &str, password: &str) -> Option<ValidationError> {
    if !is_valid_email(email) {
        return Some(ValidationError::Email);
    }
    if !is_valid_password(password) {
        return Some(ValidationError::Password);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(
            check_valid_data("bad", "short", "John!"),
            Some(ValidationError::Name)
        );
        assert_eq!(
            check_valid_data("bad", "short", "John"),
            Some(ValidationError::Email)
        );
        assert_eq!(
            check_valid_data("a@b.com", "short", "John"),
            Some(ValidationError::Password)
        );
        assert_eq!(check_valid_data("a@b.com", "Abcdef1!", "John"), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::Name.to_string(), "Name is not valid");
        assert_eq!(ValidationError::Email.to_string(), "Email Address is not valid");
        assert_eq!(ValidationError::Password.to_string(), "Password is not valid");
    }

    #[test]
    fn test_names() {
        assert!(is_valid_name("John"));
        assert!(is_valid_name("Mary Jane"));
        assert!(is_valid_name("Jean-Luc"));
        assert!(is_valid_name("O'Brien"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("John  Smith"));
        assert!(!is_valid_name("John "));
        assert!(!is_valid_name("-John"));
        assert!(!is_valid_name("R2D2"));
    }

    #[test]
    fn test_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_passwords() {
        assert!(is_valid_password("Abcdef1!"));
        assert!(is_valid_password("zZ9-long-enough"));
        assert!(!is_valid_password("Abcde1!"), "too short");
        assert!(!is_valid_password("abcdef1!"), "no uppercase");
        assert!(!is_valid_password("ABCDEF1!"), "no lowercase");
        assert!(!is_valid_password("Abcdefg!"), "no digit");
        assert!(!is_valid_password("Abcdefg1"), "no symbol");
        assert!(!is_valid_password("Abcdef1_"), "underscore is not an accepted symbol");
        assert!(!is_valid_password("Abc\ndef1!"), "line break");
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        assert!(is_valid_password("Ab1!😀😀"));
        assert!(!is_valid_password("Ab1!ééé"), "three BMP characters fall short");
    }

    #[test]
    fn test_sign_in_skips_name() {
        assert_eq!(check_credentials("a@b.com", "Abcdef1!"), None);
        assert_eq!(check_credentials("nope", "Abcdef1!"), Some(ValidationError::Email));
    }

    #[test]
    fn test_fields() {
        assert_eq!(ValidationError::Name.field(), "name");
        assert_eq!(ValidationError::Email.field(), "email");
        assert_eq!(ValidationError::Password.field(), "password");
    }
}

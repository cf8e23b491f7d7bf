//! Declarative parameter constraints.
//!
//! A constraint is attached to a parameter, or to a field of a parameter's
//! object type, at registration time. Validation itself lives in
//! [`crate::validate`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static IP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((25[0-5]|2[0-4]\d|1\d{2}|[1-9]?\d)\.){3}(25[0-5]|2[0-4]\d|1\d{2}|[1-9]?\d)$")
        .unwrap()
});

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w-]+(\.[\w-]+)*@[\w-]+(\.[\w-]+)+$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").unwrap());

static COMMON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").unwrap());

static PASSWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-zA-Z~!@#$%^&*_]{8,18}$").unwrap());

static ACCOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").unwrap());

/// Named regex check applied to a parameter's textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegexKind {
    /// No regex check
    #[default]
    None,
    /// Dotted IPv4 address
    Ip,
    /// Email address
    Email,
    /// Mobile phone number
    Phone,
    /// Letters, digits and underscore
    Common,
    /// 8-18 characters from the permitted password alphabet
    Password,
    /// Account name: letter first, then letters, digits or underscore
    Account,
}

impl RegexKind {
    /// Compiled pattern for this kind, if one is configured.
    pub fn regex(&self) -> Option<&'static Regex> {
        match self {
            Self::None => None,
            Self::Ip => Some(&IP_RE),
            Self::Email => Some(&EMAIL_RE),
            Self::Phone => Some(&PHONE_RE),
            Self::Common => Some(&COMMON_RE),
            Self::Password => Some(&PASSWORD_RE),
            Self::Account => Some(&ACCOUNT_RE),
        }
    }

    /// Whether `value` satisfies this kind. An unset pattern always matches.
    pub fn matches(&self, value: &str) -> bool {
        match self.regex() {
            Some(re) => re.is_match(value),
            None => true,
        }
    }
}

/// Constraint declared for one parameter or object field.
///
/// `min`/`max` bound the length of the value's textual form in characters;
/// unset bounds are not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParamConstraint {
    pub required: bool,
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub regex: RegexKind,
}

impl ParamConstraint {
    /// Creates a constraint that enforces nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects empty values.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum length in characters.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum length in characters.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the regex kind checked against the textual form.
    pub fn regex(mut self, regex: RegexKind) -> Self {
        self.regex = regex;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_always_matches() {
        assert!(RegexKind::None.matches(""));
        assert!(RegexKind::None.matches("anything at all"));
    }

    #[test]
    fn test_email() {
        assert!(RegexKind::Email.matches("user@example.com"));
        assert!(RegexKind::Email.matches("first.last@mail.example.org"));
        assert!(!RegexKind::Email.matches("not-an-email"));
        assert!(!RegexKind::Email.matches("user@nodot"));
    }

    #[test]
    fn test_ip() {
        assert!(RegexKind::Ip.matches("192.168.0.1"));
        assert!(RegexKind::Ip.matches("255.255.255.255"));
        assert!(!RegexKind::Ip.matches("256.1.1.1"));
        assert!(!RegexKind::Ip.matches("1.2.3"));
    }

    #[test]
    fn test_password_length_window() {
        assert!(RegexKind::Password.matches("abc12345"));
        assert!(!RegexKind::Password.matches("abc1234"));
        assert!(!RegexKind::Password.matches("a".repeat(19).as_str()));
        assert!(!RegexKind::Password.matches("has spaces 123"));
    }

    #[test]
    fn test_account() {
        assert!(RegexKind::Account.matches("alice_01"));
        assert!(!RegexKind::Account.matches("1alice"));
        assert!(!RegexKind::Account.matches("al ice"));
    }

    #[test]
    fn test_builder() {
        let constraint = ParamConstraint::new()
            .required()
            .min(5)
            .max(150)
            .regex(RegexKind::Email);
        assert!(constraint.required);
        assert_eq!(constraint.min, Some(5));
        assert_eq!(constraint.max, Some(150));
        assert_eq!(constraint.regex, RegexKind::Email);
    }
}

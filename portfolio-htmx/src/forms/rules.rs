//! Static validation rules for the contact form
//!
//! One rule per field. Every predicate sees the trimmed value, so surrounding
//! whitespace never counts toward a length and never breaks the email check.

use once_cell::sync::Lazy;
use regex::Regex;

use super::field::ContactField;

/// Minimum length of a name, in characters
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum length of a message, in characters
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Deliberately lenient: local part, `@`, domain containing a `.`, and a
/// non-empty segment after it. No TLD or label checks.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// A per-field predicate plus the message shown when it fails
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    /// Field this rule applies to
    pub field: ContactField,
    /// Rule tag carried on the resulting error
    pub code: &'static str,
    /// Message shown when the predicate fails
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl ValidationRule {
    /// Whether the already-trimmed value passes
    #[must_use]
    pub fn passes(&self, trimmed: &str) -> bool {
        (self.check)(trimmed)
    }
}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

fn name_is_valid(value: &str) -> bool {
    min_chars(value, NAME_MIN_CHARS)
}

fn email_is_valid(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn message_is_valid(value: &str) -> bool {
    min_chars(value, MESSAGE_MIN_CHARS)
}

/// The contact form rules, in form order
pub static CONTACT_RULES: [ValidationRule; 3] = [
    ValidationRule {
        field: ContactField::Name,
        code: "length",
        message: "name must be at least 2 characters.",
        check: name_is_valid,
    },
    ValidationRule {
        field: ContactField::Email,
        code: "email",
        message: "please enter a valid email.",
        check: email_is_valid,
    },
    ValidationRule {
        field: ContactField::Message,
        code: "length",
        message: "message must be at least 10 characters.",
        check: message_is_valid,
    },
];

/// Look up the rule for a field
#[must_use]
pub fn rule_for(field: ContactField) -> &'static ValidationRule {
    match field {
        ContactField::Name => &CONTACT_RULES[0],
        ContactField::Email => &CONTACT_RULES[1],
        ContactField::Message => &CONTACT_RULES[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_in_form_order() {
        let fields: Vec<_> = CONTACT_RULES.iter().map(|r| r.field).collect();
        assert_eq!(fields, ContactField::ALL);
        for field in ContactField::ALL {
            assert_eq!(rule_for(field).field, field);
        }
    }

    #[test]
    fn test_email_pattern_accepts_lenient_addresses() {
        for email in ["a@b.co", "jo@example.com", "x@y.z", "first.last@sub.domain.org", "a@b.c.d"] {
            assert!(email_is_valid(email), "{email} should pass");
        }
    }

    #[test]
    fn test_email_pattern_rejects_malformed_addresses() {
        for email in [
            "",
            "not-an-email",
            "@b.co",
            "a@.co",
            "a@b.",
            "a@bco",
            "a b@c.d",
            "a@@b.co",
            "a@b .co",
        ] {
            assert!(!email_is_valid(email), "{email:?} should fail");
        }
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        assert!(name_is_valid("Jo"));
        assert!(!name_is_valid("J"));
        // two characters, four bytes
        assert!(name_is_valid("Ñá"));
        assert!(!message_is_valid("ñññññññññ"));
        assert!(message_is_valid("ññññññññññ"));
    }
}

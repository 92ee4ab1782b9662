//! Contact form fields and the submitted form payload
//!
//! The contact form has a closed set of three fields. Every operation that
//! takes a field name goes through [`ContactField`], so an unknown name is
//! caught at the boundary instead of silently validating nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// One of the known contact form fields
///
/// Ordering follows the form layout (name, email, message) and drives the
/// order errors are reported and rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    /// Sender's name
    Name,
    /// Sender's email address
    Email,
    /// Message body
    Message,
}

impl ContactField {
    /// All fields in form order
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Form key and element id suffix for this field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Human-readable label shown above the input
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Placeholder text for the input
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "you@example.com",
            Self::Message => "Tell me about your project",
        }
    }

    /// Whether the field renders as a multi-line textarea
    #[must_use]
    pub const fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// HTML `type` attribute for single-line inputs
    #[must_use]
    pub const fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name | Self::Message => "text",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(PortfolioError::UnknownField(other.to_string())),
        }
    }
}

/// Contact form payload as posted by the browser
///
/// Missing keys deserialize to empty strings so that an incomplete post
/// fails validation per field rather than being rejected wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    /// Sender's name
    pub name: String,
    /// Sender's email address
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Create a form from its three values
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Raw (untrimmed) value of a field
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_round_trips_through_str() {
        for field in ContactField::ALL {
            assert_eq!(field.as_str().parse::<ContactField>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let err = "phone".parse::<ContactField>().unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownField(ref name) if name == "phone"));
    }

    #[test]
    fn test_field_order_matches_form_layout() {
        let mut fields = vec![ContactField::Message, ContactField::Name, ContactField::Email];
        fields.sort();
        assert_eq!(fields, ContactField::ALL);
    }

    #[test]
    fn test_only_message_is_multiline() {
        assert!(ContactField::Message.is_multiline());
        assert!(!ContactField::Name.is_multiline());
        assert_eq!(ContactField::Email.input_type(), "email");
    }

    #[test]
    fn test_missing_keys_deserialize_empty() {
        let form: ContactForm = serde_json::from_str(r#"{"name": "Jo"}"#).unwrap();
        assert_eq!(form.name, "Jo");
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_value_lookup() {
        let form = ContactForm::new("Jo", "jo@example.com", "Hello there");
        assert_eq!(form.value(ContactField::Name), "Jo");
        assert_eq!(form.value(ContactField::Email), "jo@example.com");
        assert_eq!(form.value(ContactField::Message), "Hello there");
    }
}

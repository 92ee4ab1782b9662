//! Contact form validation error types
//!
//! Validation failures are ordinary values: a [`FieldError`] per failing
//! field, collected into [`ValidationErrors`]. They convert to and from the
//! `validator` crate's error collection so the form plugs into code written
//! against `validator::Validate`.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;

use super::field::ContactField;

/// A failed rule for one field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// The field that failed
    pub field: ContactField,
    /// User-facing message
    pub message: String,
    /// Machine-readable rule tag (`length`, `email`)
    pub code: Cow<'static, str>,
}

impl FieldError {
    /// Create a field error with a message and rule code
    #[must_use]
    pub fn new(
        field: ContactField,
        message: impl Into<String>,
        code: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field,
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Per-field errors from one validation pass
///
/// Holds at most one error per field. Iteration follows form order, so
/// rendering the errors is deterministic.
///
/// # Examples
///
/// ```rust
/// use portfolio_htmx::forms::{ContactField, FieldError, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// errors.insert(FieldError::new(ContactField::Email, "please enter a valid email.", "email"));
///
/// assert!(errors.has_errors());
/// assert!(errors.has_field_error(ContactField::Email));
/// assert_eq!(errors.message(ContactField::Email), Some("please enter a valid email."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<ContactField, FieldError>,
}

impl ValidationErrors {
    /// Create an empty error collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any previous error for the same field
    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field, error);
    }

    /// Whether any field failed
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether a specific field failed
    #[must_use]
    pub fn has_field_error(&self, field: ContactField) -> bool {
        self.errors.contains_key(&field)
    }

    /// The error for a field, if any
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// The message for a field, if any
    #[must_use]
    pub fn message(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(|e| e.message.as_str())
    }

    /// Number of failing fields
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in form order
    #[must_use]
    pub fn fields_with_errors(&self) -> Vec<ContactField> {
        self.errors.keys().copied().collect()
    }

    /// Iterate over errors in form order
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

impl From<&ValidationErrors> for validator::ValidationErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut result = Self::new();
        for error in errors.iter() {
            let mut converted = validator::ValidationError::new("invalid");
            converted.code = error.code.clone();
            converted.message = Some(Cow::Owned(error.message.clone()));
            result.add(error.field.as_str(), converted);
        }
        result
    }
}

impl From<ValidationErrors> for validator::ValidationErrors {
    fn from(errors: ValidationErrors) -> Self {
        Self::from(&errors)
    }
}

/// Convert from the validator crate's collection
///
/// Errors on keys that are not contact fields are dropped; only the first
/// error per field is kept.
impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut result = Self::new();
        for (field, field_errors) in errors.field_errors() {
            let Ok(field) = ContactField::from_str(&field) else {
                continue;
            };
            if let Some(error) = field_errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                result.insert(FieldError::new(field, message, error.code.clone()));
            }
        }
        result
    }
}

//! Contact form validation pipeline
//!
//! [`FormValidationPipeline`] decides validity and nothing else. It never
//! renders, logs a payload, or resets state; the HTTP handlers do that with
//! the outcome it returns.

use tracing::{debug, trace};
use validator::Validate;

use super::error::{FieldError, ValidationErrors};
use super::field::{ContactField, ContactForm};
use super::rules::{rule_for, ValidationRule, CONTACT_RULES};
use crate::error::PortfolioError;

/// Result of checking a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The value passes its rule
    Valid,
    /// The value fails its rule
    Invalid(FieldError),
}

impl FieldOutcome {
    /// Whether the field passed
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The error, if the field failed
    #[must_use]
    pub const fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }
}

/// Aggregate result of validating the whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: ValidationErrors,
}

impl ValidationResult {
    /// True iff no field failed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.errors.has_errors()
    }

    /// Errors for the failing fields
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Consume into `Ok(())` or the collected errors
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every field passed; carries the values exactly as submitted
    Accepted(ContactForm),
    /// At least one field failed; nothing further should happen
    Rejected(ValidationErrors),
}

impl SubmissionOutcome {
    /// Whether the submission was accepted
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Validates contact form input against the static rule table
///
/// Construct once and share by reference; it holds no mutable state, so every
/// call is a pure function of its input.
///
/// # Examples
///
/// ```rust
/// use portfolio_htmx::forms::{ContactField, ContactForm, FormValidationPipeline, SubmissionOutcome};
///
/// let pipeline = FormValidationPipeline::new();
///
/// assert!(pipeline.validate_field(ContactField::Email, "a@b.co").is_valid());
///
/// let form = ContactForm::new("Jo", "jo@example.com", "Hello, this is a test.");
/// assert!(matches!(pipeline.submit(form), SubmissionOutcome::Accepted(_)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FormValidationPipeline {
    rules: &'static [ValidationRule],
}

impl Default for FormValidationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidationPipeline {
    /// Create a pipeline over the contact form rules
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: &CONTACT_RULES,
        }
    }

    /// Rules applied by [`validate_form`](Self::validate_form), in order
    #[must_use]
    pub const fn rules(&self) -> &'static [ValidationRule] {
        self.rules
    }

    /// Check one field's raw value
    ///
    /// The value is trimmed before the rule runs.
    #[must_use]
    pub fn validate_field(&self, field: ContactField, raw: &str) -> FieldOutcome {
        Self::apply(rule_for(field), raw)
    }

    /// Check one field identified by its form key
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::UnknownField`] if `name` is not one of the
    /// contact form fields. An unknown name is a caller bug, not a
    /// validation failure.
    pub fn validate_named_field(
        &self,
        name: &str,
        raw: &str,
    ) -> Result<FieldOutcome, PortfolioError> {
        let field = name.parse::<ContactField>()?;
        Ok(self.validate_field(field, raw))
    }

    /// Check every field, collecting all failures
    #[must_use]
    pub fn validate_form(&self, form: &ContactForm) -> ValidationResult {
        let errors: ValidationErrors = self
            .rules
            .iter()
            .filter_map(|rule| match Self::apply(rule, form.value(rule.field)) {
                FieldOutcome::Valid => None,
                FieldOutcome::Invalid(error) => Some(error),
            })
            .collect();

        debug!(
            failing = ?errors.fields_with_errors(),
            "Contact form validated"
        );

        ValidationResult { errors }
    }

    /// Gate a submission on validity
    ///
    /// Rejection is a value, not an error: the caller renders the messages
    /// and does nothing else.
    #[must_use]
    pub fn submit(&self, form: ContactForm) -> SubmissionOutcome {
        match self.validate_form(&form).into_result() {
            Ok(()) => SubmissionOutcome::Accepted(form),
            Err(errors) => SubmissionOutcome::Rejected(errors),
        }
    }

    fn apply(rule: &ValidationRule, raw: &str) -> FieldOutcome {
        let trimmed = raw.trim();
        if rule.passes(trimmed) {
            trace!(field = %rule.field, "Field passed");
            FieldOutcome::Valid
        } else {
            trace!(field = %rule.field, code = rule.code, "Field failed");
            FieldOutcome::Invalid(FieldError::new(rule.field, rule.message, rule.code))
        }
    }
}

/// Adapter for code written against `validator`
///
/// The handlers call [`FormValidationPipeline`] directly; this lets the form
/// go through `validator`-based extractors and helpers unchanged, with the
/// same rules and messages.
impl Validate for ContactForm {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        FormValidationPipeline::new()
            .validate_form(self)
            .into_result()
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pipeline() -> FormValidationPipeline {
        FormValidationPipeline::new()
    }

    #[test]
    fn test_name_rule() {
        assert!(pipeline().validate_field(ContactField::Name, "Jo").is_valid());
        assert!(!pipeline().validate_field(ContactField::Name, "J").is_valid());
        assert!(!pipeline().validate_field(ContactField::Name, "").is_valid());
        assert!(!pipeline().validate_field(ContactField::Name, "   J   ").is_valid());
    }

    #[test]
    fn test_email_rule() {
        assert!(pipeline().validate_field(ContactField::Email, "a@b.co").is_valid());
        assert!(!pipeline().validate_field(ContactField::Email, "not-an-email").is_valid());
        assert!(!pipeline().validate_field(ContactField::Email, "").is_valid());
        assert!(pipeline().validate_field(ContactField::Email, "  a@b.co  ").is_valid());
    }

    #[test]
    fn test_message_rule() {
        assert!(pipeline()
            .validate_field(ContactField::Message, "0123456789")
            .is_valid());
        assert!(!pipeline()
            .validate_field(ContactField::Message, "012345678")
            .is_valid());
    }

    #[test]
    fn test_invalid_outcome_carries_message() {
        let outcome = pipeline().validate_field(ContactField::Message, "short");
        let error = outcome.error().unwrap();
        assert_eq!(error.field, ContactField::Message);
        assert_eq!(error.message, "message must be at least 10 characters.");
        assert_eq!(error.code, "length");
    }

    #[test]
    fn test_validate_named_field() {
        let outcome = pipeline().validate_named_field("email", "bad").unwrap();
        assert!(!outcome.is_valid());

        let err = pipeline().validate_named_field("phone", "555").unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownField(_)));
    }

    #[test]
    fn test_accepts_valid_submission_unchanged() {
        let form = ContactForm::new("Jo", "jo@example.com", "Hello, this is a test.");
        assert_eq!(
            pipeline().submit(form.clone()),
            SubmissionOutcome::Accepted(form)
        );
    }

    #[test]
    fn test_rejects_with_one_error_per_field() {
        let outcome = pipeline().submit(ContactForm::new("J", "bad", "short"));
        let SubmissionOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors.count(), 3);
        assert_eq!(
            errors.message(ContactField::Name),
            Some("name must be at least 2 characters.")
        );
        assert_eq!(
            errors.message(ContactField::Email),
            Some("please enter a valid email.")
        );
        assert_eq!(
            errors.message(ContactField::Message),
            Some("message must be at least 10 characters.")
        );
    }

    #[test]
    fn test_trims_before_length_checks() {
        let form = ContactForm::new(
            "  Maria  ",
            "m@x.org",
            "   This message is definitely long enough.   ",
        );
        assert!(pipeline().validate_form(&form).is_valid());
        assert!(pipeline().submit(form).is_accepted());
    }

    #[test]
    fn test_missing_values_fail() {
        let result = pipeline().validate_form(&ContactForm::default());
        assert!(!result.is_valid());
        assert_eq!(result.errors().fields_with_errors(), ContactField::ALL);
    }

    #[test]
    fn test_validator_trait_delegates_to_pipeline() {
        let good = ContactForm::new("Jo", "jo@example.com", "Hello, this is a test.");
        assert!(good.validate().is_ok());

        let bad = ContactForm::new("Jo", "nope", "Hello, this is a test.");
        let errors = bad.validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert!(field_errors.contains_key("email"));
        assert!(!field_errors.contains_key("name"));
    }

    proptest! {
        #[test]
        fn prop_name_valid_iff_two_chars(s in "\\PC{0,8}") {
            let expected = s.trim().chars().count() >= 2;
            prop_assert_eq!(
                pipeline().validate_field(ContactField::Name, &s).is_valid(),
                expected
            );
        }

        #[test]
        fn prop_message_valid_iff_ten_chars(s in "[ a-z\\t]{0,20}") {
            let expected = s.trim().chars().count() >= 10;
            prop_assert_eq!(
                pipeline().validate_field(ContactField::Message, &s).is_valid(),
                expected
            );
        }

        #[test]
        fn prop_form_invalid_iff_some_field_invalid(
            name in "[ a-zA-Z]{0,4}",
            email in "[a-z@. ]{0,8}",
            message in "[ a-z]{0,14}",
        ) {
            let form = ContactForm::new(name, email, message);
            let any_invalid = ContactField::ALL
                .iter()
                .any(|&f| !pipeline().validate_field(f, form.value(f)).is_valid());
            let result = pipeline().validate_form(&form);
            prop_assert_eq!(result.is_valid(), !any_invalid);
            for field in ContactField::ALL {
                prop_assert_eq!(
                    result.errors().has_field_error(field),
                    !pipeline().validate_field(field, form.value(field)).is_valid()
                );
            }
        }

        #[test]
        fn prop_validate_field_is_idempotent(s in "\\PC{0,16}") {
            for field in ContactField::ALL {
                prop_assert_eq!(
                    pipeline().validate_field(field, &s),
                    pipeline().validate_field(field, &s)
                );
            }
        }
    }
}

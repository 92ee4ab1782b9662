//! Contact form validation and rendering
//!
//! The pure core is [`FormValidationPipeline`]: it checks the `name`,
//! `email` and `message` fields against static rules and reports every
//! failure at once. [`FormRenderer`] turns values and errors back into HTML
//! for HTMX to swap in.
//!
//! # Quick Start
//!
//! ```rust
//! use portfolio_htmx::forms::{ContactForm, FormRenderer, FormValidationPipeline, SubmissionOutcome};
//!
//! let pipeline = FormValidationPipeline::new();
//! let form = ContactForm::new("J", "bad", "short");
//!
//! match pipeline.submit(form.clone()) {
//!     SubmissionOutcome::Accepted(_) => unreachable!(),
//!     SubmissionOutcome::Rejected(errors) => {
//!         assert_eq!(errors.count(), 3);
//!         let html = FormRenderer::render(&form, Some(&errors));
//!         assert!(html.contains("please enter a valid email."));
//!     }
//! }
//! ```

mod error;
mod field;
mod pipeline;
mod render;
mod rules;

pub use error::{FieldError, ValidationErrors};
pub use field::{ContactField, ContactForm};
pub use pipeline::{FieldOutcome, FormValidationPipeline, SubmissionOutcome, ValidationResult};
pub use render::{
    group_id, validate_path, FormRenderOptions, FormRenderer, FEEDBACK_ID, FORM_ID, SUBMIT_PATH,
};
pub use rules::{rule_for, ValidationRule, CONTACT_RULES, MESSAGE_MIN_CHARS, NAME_MIN_CHARS};

//! portfolio-htmx: a personal portfolio site with a validated contact form
//!
//! The page is served by axum and driven by HTMX. The one piece of real
//! logic is the contact form: [`forms::FormValidationPipeline`] checks the
//! `name`, `email` and `message` fields, and the [`handlers`] turn its
//! verdict into HTML fragments, toast events and a (logged, not sent)
//! submission.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use portfolio_htmx::{config::PortfolioConfig, observability, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     observability::init()?;
//!     server::run(PortfolioConfig::load()?).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod htmx;
pub mod observability;
pub mod server;
pub mod state;
pub mod submission;
pub mod template;
pub mod toast;

pub mod prelude {
    //! Convenience re-exports for common types

    pub use crate::config::PortfolioConfig;
    pub use crate::error::PortfolioError;
    pub use crate::forms::{
        ContactField, ContactForm, FieldError, FieldOutcome, FormRenderer,
        FormValidationPipeline, SubmissionOutcome, ValidationErrors, ValidationResult,
    };
    pub use crate::state::AppState;
    pub use crate::submission::{ConsoleSink, MemorySink, Submission, SubmissionSink};
    pub use crate::toast::{Toast, ToastKind};
}

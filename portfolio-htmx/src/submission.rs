//! Recording accepted contact form messages
//!
//! Nothing is sent anywhere: an accepted message is handed to a
//! [`SubmissionSink`], and the default [`ConsoleSink`] simply logs it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::PortfolioError;
use crate::forms::ContactForm;

/// An accepted message and when it arrived
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Values exactly as submitted
    pub form: ContactForm,
    /// Time the server accepted it
    pub received_at: DateTime<Utc>,
}

impl Submission {
    /// Stamp a form with the current time
    #[must_use]
    pub fn now(form: ContactForm) -> Self {
        Self {
            form,
            received_at: Utc::now(),
        }
    }
}

/// Destination for accepted messages
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Record one accepted message
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Submission`] if the message could not be
    /// recorded.
    async fn record(&self, submission: &Submission) -> Result<(), PortfolioError>;
}

/// Logs accepted messages through `tracing`
///
/// Sender and timestamp are logged at `info`; the body only at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a console sink
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionSink for ConsoleSink {
    async fn record(&self, submission: &Submission) -> Result<(), PortfolioError> {
        let form = &submission.form;
        info!(
            name = %form.name.trim(),
            email = %form.email.trim(),
            received_at = %submission.received_at.to_rfc3339(),
            "Contact message received"
        );
        debug!(message = %form.message.trim(), "Contact message body");
        Ok(())
    }
}

/// Keeps accepted messages in memory
///
/// Clones share the same store.
///
/// # Examples
///
/// ```rust
/// use portfolio_htmx::forms::ContactForm;
/// use portfolio_htmx::submission::{MemorySink, Submission, SubmissionSink};
///
/// # async fn example() -> Result<(), portfolio_htmx::error::PortfolioError> {
/// let sink = MemorySink::new();
/// let form = ContactForm::new("Jo", "jo@example.com", "Hello, this is a test.");
/// sink.record(&Submission::now(form)).await?;
///
/// assert_eq!(sink.count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    recorded: Arc<Mutex<Vec<Submission>>>,
}

impl MemorySink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded messages
    #[must_use]
    pub fn count(&self) -> usize {
        self.recorded.lock().len()
    }

    /// Copy of everything recorded so far
    #[must_use]
    pub fn submissions(&self) -> Vec<Submission> {
        self.recorded.lock().clone()
    }

    /// Most recently recorded message
    #[must_use]
    pub fn last(&self) -> Option<Submission> {
        self.recorded.lock().last().cloned()
    }
}

#[async_trait]
impl SubmissionSink for MemorySink {
    async fn record(&self, submission: &Submission) -> Result<(), PortfolioError> {
        self.recorded.lock().push(submission.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new("Jo", "jo@example.com", "Hello, this is a test.")
    }

    #[tokio::test]
    async fn test_console_sink_records() {
        let result = ConsoleSink::new().record(&Submission::now(form())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_memory_sink_keeps_submissions() {
        let sink = MemorySink::new();
        let shared = sink.clone();

        sink.record(&Submission::now(form())).await.unwrap();
        sink.record(&Submission::now(ContactForm::new("Maria", "m@x.org", "Second message here")))
            .await
            .unwrap();

        assert_eq!(shared.count(), 2);
        assert_eq!(shared.submissions()[0].form, form());
        assert_eq!(shared.last().unwrap().form.name, "Maria");
    }

    #[test]
    fn test_submission_is_timestamped() {
        let before = Utc::now();
        let submission = Submission::now(form());
        assert!(submission.received_at >= before);
        assert_eq!(submission.form, form());
    }

    #[tokio::test]
    async fn test_mock_sink_failure_propagates() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record()
            .times(1)
            .returning(|_| Err(PortfolioError::Submission("unavailable".into())));

        let err = sink.record(&Submission::now(form())).await.unwrap_err();
        assert!(matches!(err, PortfolioError::Submission(_)));
    }
}

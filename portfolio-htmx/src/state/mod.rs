//! Application state
//!
//! Built once at startup and cloned into every handler. Clones share the
//! same configuration, pipeline and sink.

use std::sync::Arc;

use crate::config::PortfolioConfig;
use crate::forms::FormValidationPipeline;
use crate::submission::{ConsoleSink, SubmissionSink};

/// Shared state for the portfolio router
///
/// # Example
///
/// ```rust
/// use portfolio_htmx::{config::PortfolioConfig, state::AppState};
///
/// let state = AppState::new(PortfolioConfig::default());
/// let app: axum::Router = portfolio_htmx::handlers::router(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    config: Arc<PortfolioConfig>,
    pipeline: FormValidationPipeline,
    sink: Arc<dyn SubmissionSink>,
}

impl AppState {
    /// State that logs accepted messages to the console
    #[must_use]
    pub fn new(config: PortfolioConfig) -> Self {
        Self::with_sink(config, Arc::new(ConsoleSink::new()))
    }

    /// State with a custom submission sink
    #[must_use]
    pub fn with_sink(config: PortfolioConfig, sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: FormValidationPipeline::new(),
            sink,
        }
    }

    /// Configuration
    #[must_use]
    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    /// Contact form validator
    #[must_use]
    pub const fn pipeline(&self) -> &FormValidationPipeline {
        &self.pipeline
    }

    /// Where accepted messages go
    #[must_use]
    pub fn sink(&self) -> &dyn SubmissionSink {
        self.sink.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}

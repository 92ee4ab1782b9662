//! Observability (logging and tracing)
//!
//! Structured logging through `tracing`, with pretty output in development
//! and JSON in release builds.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// Honors `RUST_LOG`; otherwise logs `debug` (and `trace` for this crate) in
/// debug builds and `info` in release builds.
///
/// # Example
///
/// ```rust,no_run
/// use portfolio_htmx::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Portfolio started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    }

    Ok(())
}

fn default_filter() -> EnvFilter {
    if cfg!(debug_assertions) {
        EnvFilter::new("debug,portfolio_htmx=trace")
    } else {
        EnvFilter::new("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_mentions_crate_in_debug() {
        let filter = default_filter().to_string();
        if cfg!(debug_assertions) {
            assert!(filter.contains("portfolio_htmx=trace"));
        } else {
            assert_eq!(filter, "info");
        }
    }
}

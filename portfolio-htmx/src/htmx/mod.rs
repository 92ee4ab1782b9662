//! HTMX response helpers
//!
//! Re-exports the `axum-htmx` pieces the site uses and adds [`HxSwapOob`],
//! which pairs the main swap with out-of-band updates elsewhere on the page
//! (the success banner above the contact form, for instance).

use std::fmt::Write;

use axum::response::{Html, IntoResponse, Response};

pub use axum_htmx::{AutoVaryLayer, HxRequest};

#[derive(Debug, Clone)]
struct OobTarget {
    id: String,
    content: String,
}

/// Primary content plus out-of-band swaps, rendered as one HTML body
///
/// # Examples
///
/// ```rust
/// use portfolio_htmx::htmx::HxSwapOob;
///
/// let body = HxSwapOob::with_primary("<form id=\"contact-form\"></form>")
///     .with("contact-feedback", "<div>Sent!</div>")
///     .render();
///
/// assert!(body.contains(r#"hx-swap-oob="innerHTML""#));
/// ```
#[derive(Debug, Default, Clone)]
pub struct HxSwapOob {
    primary: String,
    targets: Vec<OobTarget>,
}

impl HxSwapOob {
    /// Start with the content for the request's own target
    #[must_use]
    pub fn with_primary(content: impl Into<String>) -> Self {
        Self {
            primary: content.into(),
            targets: Vec::new(),
        }
    }

    /// Add an out-of-band target by element id (without `#`)
    ///
    /// The content replaces the target's children.
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.targets.push(OobTarget {
            id: id.into(),
            content: content.into(),
        });
        self
    }

    /// Render to an HTML string, primary content first
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = self.primary.clone();
        for target in &self.targets {
            let _ = write!(
                html,
                r#"<div id="{}" hx-swap-oob="innerHTML">{}</div>"#,
                target.id, target.content
            );
        }
        html
    }
}

impl IntoResponse for HxSwapOob {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(HxSwapOob::default().render(), "");
    }

    #[test]
    fn test_primary_renders_first() {
        let html = HxSwapOob::with_primary("<form></form>")
            .with("feedback", "<p>Sent</p>")
            .with("log", "<li>one</li>")
            .render();

        assert!(html.starts_with("<form></form>"));
        assert!(html.contains(r#"<div id="feedback" hx-swap-oob="innerHTML"><p>Sent</p></div>"#));
        assert!(html.ends_with(r#"<div id="log" hx-swap-oob="innerHTML"><li>one</li></div>"#));
    }

    #[test]
    fn test_into_response_is_html() {
        let response = HxSwapOob::with_primary("<p>ok</p>").into_response();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }
}

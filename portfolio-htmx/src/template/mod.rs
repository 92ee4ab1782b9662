//! Page templates
//!
//! The full page is an askama template; the contact form inside it comes
//! from [`FormRenderer`](crate::forms::FormRenderer) so that the page and the
//! HTMX fragments share one rendering path.

use askama::Template;

use crate::config::PortfolioConfig;
use crate::error::PortfolioError;
use crate::forms::FEEDBACK_ID;
use crate::toast::TOAST_EVENT;

/// The portfolio page
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    /// Page `<title>`
    pub title: &'a str,
    /// Portfolio owner's name
    pub owner: &'a str,
    /// Line under the name
    pub tagline: &'a str,
    /// Pre-rendered contact form
    pub contact_form: &'a str,
    /// Pre-rendered banner shown above the form, if any
    pub feedback: &'a str,
    /// Id of the banner container
    pub feedback_id: &'a str,
    /// Event name the toast script listens for
    pub toast_event: &'a str,
}

impl<'a> IndexPage<'a> {
    /// Page for the given configuration and form markup
    #[must_use]
    pub fn new(config: &'a PortfolioConfig, contact_form: &'a str, feedback: &'a str) -> Self {
        Self {
            title: &config.site.title,
            owner: &config.site.owner,
            tagline: &config.site.tagline,
            contact_form,
            feedback,
            feedback_id: FEEDBACK_ID,
            toast_event: TOAST_EVENT,
        }
    }

    /// Render to HTML
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Template`] if rendering fails.
    pub fn to_html(&self) -> Result<String, PortfolioError> {
        Ok(self.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ContactForm, FormRenderer};

    #[test]
    fn test_page_embeds_form_unescaped() {
        let config = PortfolioConfig::default();
        let form = FormRenderer::render(&ContactForm::default(), None);
        let html = IndexPage::new(&config, &form, "").to_html().unwrap();

        assert!(html.contains(r#"<form id="contact-form""#));
        assert!(html.contains(r#"id="contact-feedback""#));
        assert!(html.contains("showToast"));
        assert!(html.contains("htmx.org"));
    }

    #[test]
    fn test_page_escapes_site_text() {
        let mut config = PortfolioConfig::default();
        config.site.owner = "<Jane & Co>".into();
        let html = IndexPage::new(&config, "", "").to_html().unwrap();

        assert!(html.contains("&lt;Jane &amp; Co&gt;"));
        assert!(!html.contains("<Jane & Co>"));
    }
}

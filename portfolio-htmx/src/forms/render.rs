//! Contact form rendering to HTML
//!
//! Produces the form, single field groups (for blur swaps) and the
//! success banner. All user-supplied text is escaped.

use std::fmt::Write;

use super::error::{FieldError, ValidationErrors};
use super::field::{ContactField, ContactForm};

/// Element id of the contact form
pub const FORM_ID: &str = "contact-form";

/// Element id of the container the success banner is swapped into
pub const FEEDBACK_ID: &str = "contact-feedback";

/// Submit endpoint for the contact form
pub const SUBMIT_PATH: &str = "/contact";

/// Blur endpoint for a field
#[must_use]
pub fn validate_path(field: ContactField) -> String {
    format!("/contact/fields/{field}/validate")
}

/// Element id of a field's group wrapper
#[must_use]
pub fn group_id(field: ContactField) -> String {
    format!("field-{field}")
}

/// CSS classes used when rendering
#[derive(Debug, Clone)]
pub struct FormRenderOptions {
    /// Wrapper around label, input and error
    pub group_class: String,
    /// Labels
    pub label_class: String,
    /// Inputs and the textarea
    pub input_class: String,
    /// Added to inputs whose value failed
    pub input_error_class: String,
    /// Inline error message
    pub error_class: String,
    /// Submit button
    pub submit_class: String,
    /// Success banner
    pub success_class: String,
}

impl Default for FormRenderOptions {
    fn default() -> Self {
        Self {
            group_class: "form-group".into(),
            label_class: "form-label".into(),
            input_class: "form-input".into(),
            input_error_class: "form-input-error".into(),
            error_class: "field-error".into(),
            submit_class: "btn btn-primary".into(),
            success_class: "success-message".into(),
        }
    }
}

/// Renders the contact form and its fragments
pub struct FormRenderer;

impl FormRenderer {
    /// Render the full form with default classes
    #[must_use]
    pub fn render(form: &ContactForm, errors: Option<&ValidationErrors>) -> String {
        Self::render_with_options(form, errors, &FormRenderOptions::default())
    }

    /// Render the full form
    #[must_use]
    pub fn render_with_options(
        form: &ContactForm,
        errors: Option<&ValidationErrors>,
        options: &FormRenderOptions,
    ) -> String {
        let mut html = String::with_capacity(2048);

        html.push_str("<form");
        Self::write_attr(&mut html, "id", FORM_ID);
        Self::write_attr(&mut html, "action", SUBMIT_PATH);
        Self::write_attr(&mut html, "method", "post");
        html.push_str(" novalidate");
        Self::write_attr(&mut html, "hx-post", SUBMIT_PATH);
        Self::write_attr(&mut html, "hx-target", "this");
        Self::write_attr(&mut html, "hx-swap", "outerHTML");
        html.push_str(">\n");

        for field in ContactField::ALL {
            let error = errors.and_then(|e| e.get(field));
            html.push_str(&Self::render_field_with_options(
                field,
                form.value(field),
                error,
                options,
            ));
        }

        let _ = writeln!(
            html,
            r#"  <button type="submit" class="{}">Send message</button>"#,
            Self::escape_attr(&options.submit_class)
        );
        html.push_str("</form>");
        html
    }

    /// Render one field group with default classes
    #[must_use]
    pub fn render_field(field: ContactField, value: &str, error: Option<&FieldError>) -> String {
        Self::render_field_with_options(field, value, error, &FormRenderOptions::default())
    }

    /// Render one field group
    ///
    /// The input validates itself on blur. An input showing an error drops
    /// the message on the next edit without a request.
    #[must_use]
    pub fn render_field_with_options(
        field: ContactField,
        value: &str,
        error: Option<&FieldError>,
        options: &FormRenderOptions,
    ) -> String {
        let mut html = String::with_capacity(512);
        let id = group_id(field);

        html.push_str("  <div");
        Self::write_attr(&mut html, "id", &id);
        Self::write_attr(&mut html, "class", &options.group_class);
        html.push_str(">\n");

        let _ = writeln!(
            html,
            r#"    <label for="{}" class="{}">{}</label>"#,
            field,
            Self::escape_attr(&options.label_class),
            Self::escape_html(field.label())
        );

        let class = if error.is_some() {
            format!("{} {}", options.input_class, options.input_error_class)
        } else {
            options.input_class.clone()
        };

        let clear_on_edit = error.map(|_| Self::clear_error_script(options));

        if field.is_multiline() {
            html.push_str("    <textarea");
            Self::write_input_attrs(&mut html, field, &class, &id);
            if let Some(script) = &clear_on_edit {
                Self::write_attr(&mut html, "hx-on:input", script);
            }
            Self::write_attr(&mut html, "rows", "5");
            let _ = writeln!(html, ">{}</textarea>", Self::escape_html(value));
        } else {
            html.push_str("    <input");
            Self::write_attr(&mut html, "type", field.input_type());
            Self::write_input_attrs(&mut html, field, &class, &id);
            if let Some(script) = &clear_on_edit {
                Self::write_attr(&mut html, "hx-on:input", script);
            }
            Self::write_attr(&mut html, "value", value);
            html.push_str(">\n");
        }

        if let Some(error) = error {
            let _ = writeln!(
                html,
                r#"    <span class="{}">{}</span>"#,
                Self::escape_attr(&options.error_class),
                Self::escape_html(&error.message)
            );
        }

        html.push_str("  </div>\n");
        html
    }

    /// Render the banner shown above the form after a successful send
    ///
    /// `dismiss_after_ms` is read by the page script, which removes the
    /// banner once it elapses.
    #[must_use]
    pub fn success_banner(message: &str, dismiss_after_ms: u64) -> String {
        let options = FormRenderOptions::default();
        format!(
            r#"<div class="{}" role="status" data-dismiss-after-ms="{dismiss_after_ms}">{}</div>"#,
            Self::escape_attr(&options.success_class),
            Self::escape_html(message)
        )
    }

    /// Client-side handler that drops a field's error on the next edit
    ///
    /// Only the error span and the error class go; the input and whatever the
    /// user is typing stay untouched.
    fn clear_error_script(options: &FormRenderOptions) -> String {
        format!(
            "this.classList.remove('{}'); this.parentElement.querySelector('.{}')?.remove()",
            options.input_error_class, options.error_class
        )
    }

    fn write_input_attrs(html: &mut String, field: ContactField, class: &str, group: &str) {
        Self::write_attr(html, "id", field.as_str());
        Self::write_attr(html, "name", field.as_str());
        Self::write_attr(html, "class", class);
        Self::write_attr(html, "placeholder", field.placeholder());
        html.push_str(" required");
        Self::write_attr(html, "hx-post", &validate_path(field));
        Self::write_attr(html, "hx-trigger", "blur");
        Self::write_attr(html, "hx-target", &format!("#{group}"));
        Self::write_attr(html, "hx-swap", "outerHTML");
        Self::write_attr(html, "hx-sync", "this:replace");
    }

    fn write_attr(html: &mut String, name: &str, value: &str) {
        let _ = write!(html, r#" {name}="{}""#, Self::escape_attr(value));
    }

    /// Escape a string for use in an HTML attribute
    fn escape_attr(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('"', "&quot;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Escape a string for use in HTML content
    fn escape_html(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }
}

//! HTTP handlers for the portfolio page and its contact form
//!
//! Each browser event maps to one request that runs to completion:
//!
//! | Event      | Route                                   |
//! |------------|-----------------------------------------|
//! | page load  | `GET /`                                 |
//! | field blur | `POST /contact/fields/{field}/validate` |
//! | submit     | `POST /contact`                         |
//!
//! Editing a field that shows an error clears it in the browser; see
//! [`FormRenderer::render_field`]. The handlers own every other side effect
//! (rendering, recording, notifying and resetting the form); the pipeline
//! only decides validity.

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::error::PortfolioError;
use crate::forms::{
    ContactField, ContactForm, FormRenderer, SubmissionOutcome, ValidationErrors, FEEDBACK_ID,
};
use crate::htmx::{AutoVaryLayer, HxRequest, HxSwapOob};
use crate::state::AppState;
use crate::submission::Submission;
use crate::template::IndexPage;
use crate::toast::Toast;

/// Toast text when a submission is rejected
pub const REJECTED_TOAST: &str = "Please fix the highlighted fields";

/// Toast text when a submission is accepted
pub const ACCEPTED_TOAST: &str = "Message sent";

/// Build the site router
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/contact", post(submit_contact))
        .route("/contact/fields/{field}/validate", post(validate_field))
        .layer(AutoVaryLayer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Full page with an empty contact form
///
/// # Errors
///
/// Returns [`PortfolioError::Template`] if the page fails to render.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PortfolioError> {
    let form = FormRenderer::render(&ContactForm::default(), None);
    let page = IndexPage::new(state.config(), &form, "").to_html()?;
    Ok(Html(page))
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// Re-check one field on blur and return its group
///
/// # Errors
///
/// Returns [`PortfolioError::UnknownField`] for a field outside the form.
pub async fn validate_field(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, PortfolioError> {
    let field: ContactField = field.parse()?;
    let value = form.value(field);
    let outcome = state.pipeline().validate_field(field, value);

    debug!(%field, valid = outcome.is_valid(), "Field validated on blur");

    Ok(Html(FormRenderer::render_field(field, value, outcome.error())))
}

/// Validate and (on success) record a contact message
///
/// HTMX requests get fragments plus a `showToast` trigger; plain form posts
/// get the full page back.
///
/// # Errors
///
/// Returns [`PortfolioError`] if the sink fails to record an accepted
/// message or a response fails to render.
pub async fn submit_contact(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<ContactForm>,
) -> Result<Response, PortfolioError> {
    match state.pipeline().submit(form.clone()) {
        SubmissionOutcome::Rejected(errors) => rejected(&state, is_htmx, &form, &errors),
        SubmissionOutcome::Accepted(form) => {
            state.sink().record(&Submission::now(form)).await?;
            info!("Contact form submitted");
            accepted(&state, is_htmx)
        }
    }
}

fn rejected(
    state: &AppState,
    is_htmx: bool,
    form: &ContactForm,
    errors: &ValidationErrors,
) -> Result<Response, PortfolioError> {
    info!(failing = ?errors.fields_with_errors(), "Contact form rejected");

    let html = FormRenderer::render(form, Some(errors));
    if is_htmx {
        let toast = Toast::error(REJECTED_TOAST, state.config().notifications.toast_duration_ms);
        Ok((toast.trigger()?, Html(html)).into_response())
    } else {
        let page = IndexPage::new(state.config(), &html, "").to_html()?;
        Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
    }
}

fn accepted(state: &AppState, is_htmx: bool) -> Result<Response, PortfolioError> {
    let notifications = &state.config().notifications;
    let fresh = FormRenderer::render(&ContactForm::default(), None);
    let banner = FormRenderer::success_banner(
        &notifications.success_message,
        notifications.success_banner_ms,
    );

    if is_htmx {
        let toast = Toast::success(ACCEPTED_TOAST, notifications.toast_duration_ms);
        let body = HxSwapOob::with_primary(fresh).with(FEEDBACK_ID, banner);
        Ok((toast.trigger()?, body).into_response())
    } else {
        let page = IndexPage::new(state.config(), &fresh, &banner).to_html()?;
        Ok(Html(page).into_response())
    }
}

//! Toast notifications delivered as HTMX events
//!
//! The server never renders a toast element. It sends a `showToast` event in
//! the `HX-Trigger` header; the page script listens for it and draws the
//! toast with the color and duration carried in the event detail.

use std::fmt;

use axum_htmx::{HxEvent, HxResponseTrigger};
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Client-side event name the page script listens for
pub const TOAST_EVENT: &str = "showToast";

/// Visual style of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Green confirmation
    Success,
    /// Orange problem report
    Error,
    /// Blue information; also what unrecognized kinds decode to
    #[default]
    #[serde(other)]
    Info,
}

impl ToastKind {
    /// Background color for this kind
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Success => "#00cc66",
            Self::Error => "#ff6600",
            Self::Info => "#0066ff",
        }
    }

    /// Lowercase name used in CSS classes (`toast-success`, ...)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Text to show
    pub message: String,
    /// Visual style
    pub kind: ToastKind,
    /// Background color resolved from `kind`
    pub color: String,
    /// Time on screen before sliding out
    pub duration_ms: u64,
}

impl Toast {
    /// Create a toast of the given kind
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind, duration_ms: u64) -> Self {
        Self {
            message: message.into(),
            kind,
            color: kind.color().to_string(),
            duration_ms,
        }
    }

    /// Success toast
    #[must_use]
    pub fn success(message: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(message, ToastKind::Success, duration_ms)
    }

    /// Error toast
    #[must_use]
    pub fn error(message: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(message, ToastKind::Error, duration_ms)
    }

    /// Build the `showToast` event
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Serialization`] if the detail cannot be
    /// encoded as JSON.
    pub fn event(&self) -> Result<HxEvent, PortfolioError> {
        Ok(HxEvent::new_with_data(TOAST_EVENT, self)?)
    }

    /// Build an `HX-Trigger` response part firing this toast
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Serialization`] if the detail cannot be
    /// encoded as JSON.
    pub fn trigger(&self) -> Result<HxResponseTrigger, PortfolioError> {
        Ok(HxResponseTrigger::normal([self.event()?]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors() {
        assert_eq!(ToastKind::Success.color(), "#00cc66");
        assert_eq!(ToastKind::Error.color(), "#ff6600");
        assert_eq!(ToastKind::Info.color(), "#0066ff");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_info() {
        let kind: ToastKind = serde_json::from_str(r#""success""#).unwrap();
        assert_eq!(kind, ToastKind::Success);
        let kind: ToastKind = serde_json::from_str(r#""warning""#).unwrap();
        assert_eq!(kind, ToastKind::Info);
        assert_eq!(ToastKind::default(), ToastKind::Info);
    }

    #[test]
    fn test_toast_carries_color() {
        let toast = Toast::error("Please fix the highlighted fields", 4000);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.color, "#ff6600");
        assert_eq!(toast.duration_ms, 4000);
    }

    #[test]
    fn test_toast_serializes_lowercase_kind() {
        let json = serde_json::to_value(Toast::success("Sent", 4000)).unwrap();
        assert_eq!(json["kind"], "success");
        assert_eq!(json["message"], "Sent");
        assert_eq!(json["duration_ms"], 4000);
    }

    #[test]
    fn test_event_builds() {
        let toast = Toast::new("Hello", ToastKind::default(), 4000);
        assert_eq!(toast.color, "#0066ff");
        assert!(toast.event().is_ok());
        assert!(toast.trigger().is_ok());
    }
}

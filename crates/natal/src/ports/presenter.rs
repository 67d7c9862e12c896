//! Presenter Port
//!
//! Abstract interface for the presentation layer that a
//! [`ProfileViewModel`](crate::application::ProfileViewModel) drives.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Greeting;

/// Severity of an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    #[default]
    Error,
    Warning,
    Info,
}

/// A blocking, acknowledgement-only message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    /// Error alert titled "Error"
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            kind: AlertKind::Error,
        }
    }
}

/// Presentation surface
///
/// Calls are made synchronously from inside change notifications; an
/// implementation should return once the user has acknowledged an alert.
///
/// # Example
///
/// ```rust,ignore
/// use natal::ports::{Alert, Presenter};
/// use natal::Greeting;
///
/// struct Silent;
///
/// impl Presenter for Silent {
///     fn alert(&self, _alert: &Alert) {}
///     fn show_greeting(&self, _greeting: &Greeting) {}
/// }
/// ```
pub trait Presenter {
    /// Show a modal alert and wait for acknowledgement
    fn alert(&self, alert: &Alert);

    /// Open the birthday greeting view
    fn show_greeting(&self, greeting: &Greeting);
}

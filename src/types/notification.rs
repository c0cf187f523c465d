use serde::{Deserialize, Serialize};

use super::errors::{Severity, ShellError};

/// A blocking message the front end must show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl From<&ShellError> for Notification {
    fn from(err: &ShellError) -> Self {
        Self {
            severity: err.severity(),
            title: err.notification_title().to_string(),
            message: err.to_string(),
        }
    }
}

//! Portal adapter errors and their mapping onto [`grades::SourceError`].

use grades::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    /// Transport failure: DNS, TLS, connection reset, timeout.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The portal answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The login response did not contain the success marker.
    #[error("Passport York did not accept the credentials")]
    AuthenticationFailed,

    /// The course list page has no `table.bodytext`.
    #[error("Could not find the course table on the course list page")]
    CourseTableMissing,

    /// A CSS selector failed to compile.
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// The portal configuration is unusable.
    #[error("Invalid portal configuration: {message}")]
    Config { message: String },
}

impl From<PortalError> for SourceError {
    fn from(err: PortalError) -> Self {
        match err {
            PortalError::AuthenticationFailed => SourceError::AuthenticationRejected,
            PortalError::CourseTableMissing | PortalError::Selector(_) => {
                SourceError::UnexpectedPage {
                    message: err.to_string(),
                }
            }
            PortalError::Http(_) | PortalError::Status { .. } | PortalError::Config { .. } => {
                SourceError::Unavailable {
                    message: err.to_string(),
                }
            }
        }
    }
}

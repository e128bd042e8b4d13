//! Error types for the grades domain.
//!
//! [`GradesError`] covers data that cannot be interpreted (a malformed course
//! column). [`SourceError`] is what a [`crate::GradeSource`] reports when it
//! cannot produce records at all. [`ReportError`] is the union seen by callers
//! of [`crate::compile_report`].

use thiserror::Error;

/// A course list entry could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradesError {
    /// The course column has fewer than the four expected fields.
    #[error("Course '{course}' does not have faculty, subject, number and credit fields")]
    InvalidCourseCode {
        /// The course column as printed.
        course: String,
    },

    /// The credit field of the course column is not a non-negative number.
    #[error("Course '{course}' has an invalid credit value '{value}'")]
    InvalidCredits {
        /// The course column as printed.
        course: String,
        /// The offending credit field.
        value: String,
    },
}

// ---------------------------------------------------------------------------

/// Failures reported by a [`crate::GradeSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// The portal did not accept the credentials.
    #[error("Could not authenticate: the portal rejected the username or password")]
    AuthenticationRejected,

    /// The portal could not be reached or answered with an error status.
    #[error("Portal unavailable: {message}")]
    Unavailable {
        /// Description of the transport or status failure.
        message: String,
    },

    /// The portal answered, but the page did not have the expected shape.
    #[error("Unexpected portal page: {message}")]
    UnexpectedPage {
        /// What was expected and not found.
        message: String,
    },
}

// ---------------------------------------------------------------------------

/// Errors from compiling a [`crate::GradeReport`].
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Grades(#[from] GradesError),
}

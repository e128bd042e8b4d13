//! Port trait for anything that can produce a student's course records.
//!
//! The `portal` crate implements [`GradeSource`] over HTTP. This crate only
//! defines what is needed, never how it is fetched.

use async_trait::async_trait;

use crate::{CourseRecord, Credentials, SourceError};

/// Supplies the course list of the account identified by some credentials.
#[async_trait]
pub trait GradeSource: Send + Sync {
    /// Signs in with `credentials` and returns every course record, in the
    /// order the source lists them.
    ///
    /// Implementations must release any session they open before returning,
    /// whether or not the records could be read.
    async fn fetch_records(&self, credentials: &Credentials)
        -> Result<Vec<CourseRecord>, SourceError>;
}

//! `grades_list` portal adapter.
//!
//! Implements the [`grades::GradeSource`] trait against York University's
//! Passport York single sign-on and the course list page it protects.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP transport, the cookie session, login form
//! handling and HTML scraping live here. The [`grades`] crate sees only
//! [`grades::GradeSource`] and [`grades::SourceError`].
//!
//! ## Flow
//!
//! 1. GET the course list; without a session this serves the login form.
//! 2. POST the form's hidden fields plus the credentials to the login URL and
//!    look for the success marker in the response.
//! 3. GET the course list again and parse its first `table.bodytext`.
//! 4. GET the logout URL.

pub mod client;
pub mod config;
pub mod errors;
pub mod html;

pub use client::PortalClient;
pub use config::PortalConfig;
pub use errors::PortalError;

//! Portal endpoints and HTTP settings.

use std::time::Duration;

use serde::Deserialize;

use crate::PortalError;

/// Course list page; unauthenticated requests are redirected to the login form.
pub const COURSE_URL: &str =
    "https://wrem.sis.yorku.ca/Apps/WebObjects/ydml.woa/wa/DirectAction/document?name=CourseListv1";
/// Passport York login form target.
pub const LOGIN_URL: &str = "https://passportyork.yorku.ca/ppylogin/ppylogin";
/// Passport York logout endpoint. A single GET ends the session.
pub const LOGOUT_URL: &str = "https://passportyork.yorku.ca/ppylogin/ppylogout";
/// Passport York rejects clients it does not recognise as a browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_6) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.2 Safari/605.1.15";
/// Text present on the login response only when the credentials were accepted.
pub const SUCCESS_MARKER: &str = "You have successfully authenticated";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the portal lives and how to talk to it.
///
/// Deserialisable so it can be overridden from the `[portal]` table of a
/// configuration file; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortalConfig {
    pub course_url: String,
    pub login_url: String,
    pub logout_url: String,
    pub user_agent: String,
    pub success_marker: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            course_url: COURSE_URL.to_owned(),
            login_url: LOGIN_URL.to_owned(),
            logout_url: LOGOUT_URL.to_owned(),
            user_agent: USER_AGENT.to_owned(),
            success_marker: SUCCESS_MARKER.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PortalConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Checks that every URL parses, the marker is non-empty and the timeout
    /// is at least one second.
    pub fn validate(&self) -> Result<(), PortalError> {
        for (name, url) in [
            ("course_url", &self.course_url),
            ("login_url", &self.login_url),
            ("logout_url", &self.logout_url),
        ] {
            reqwest::Url::parse(url).map_err(|e| PortalError::Config {
                message: format!("{name} '{url}' is not a valid URL: {e}"),
            })?;
        }
        if self.success_marker.is_empty() {
            return Err(PortalError::Config {
                message: "success_marker must not be empty".to_owned(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(PortalError::Config {
                message: "timeout_secs must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

//! HTTP session against Passport York and the course list page.

use async_trait::async_trait;
use grades::{CourseRecord, Credentials, GradeSource, SourceError};

use crate::{html, PortalConfig, PortalError};

/// A cookie-backed session with the portal.
///
/// One client holds one cookie jar, so a login is visible to every later
/// request made through the same client.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    config: PortalConfig,
}

impl PortalClient {
    /// Builds a client with the configured user agent and timeout and an
    /// empty cookie store.
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .cookie_store(true)
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    async fn get_page(&self, url: &str) -> Result<String, PortalError> {
        let response = self.http.get(url).send().await?;
        let response = ensure_success(url, response)?;
        Ok(response.text().await?)
    }

    /// Signs in to Passport York.
    ///
    /// Requesting the course list without a session lands on the login form;
    /// its hidden fields are posted back together with the credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), PortalError> {
        let form_page = self.get_page(&self.config.course_url).await?;
        let mut fields = html::hidden_login_fields(&form_page)?;
        tracing::debug!(hidden_fields = fields.len(), "login form loaded");

        fields.push(("mli".to_owned(), credentials.username.to_string()));
        fields.push(("password".to_owned(), credentials.password.expose().to_owned()));
        fields.push(("dologin".to_owned(), "Login".to_owned()));

        let url = self.config.login_url.as_str();
        let response = self.http.post(url).form(&fields).send().await?;
        let body = ensure_success(url, response)?.text().await?;

        if html::is_authenticated(&body, &self.config.success_marker) {
            tracing::info!(username = %credentials.username, "authenticated");
            Ok(())
        } else {
            Err(PortalError::AuthenticationFailed)
        }
    }

    /// Reads the course list of the signed-in account.
    pub async fn course_records(&self) -> Result<Vec<CourseRecord>, PortalError> {
        let page = self.get_page(&self.config.course_url).await?;
        html::parse_course_table(&page)
    }

    /// Ends the Passport York session.
    pub async fn logout(&self) -> Result<(), PortalError> {
        let url = self.config.logout_url.as_str();
        let response = self.http.get(url).send().await?;
        ensure_success(url, response)?;
        tracing::debug!("logged out");
        Ok(())
    }
}

fn ensure_success(
    url: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, PortalError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(PortalError::Status {
            url: url.to_owned(),
            status,
        })
    }
}

#[async_trait]
impl GradeSource for PortalClient {
    async fn fetch_records(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<CourseRecord>, SourceError> {
        self.login(credentials).await?;

        let records = self.course_records().await;

        // The session is closed even when the course list could not be read.
        if let Err(err) = self.logout().await {
            tracing::warn!(error = %err, "logout failed; the session will expire on its own");
        }

        Ok(records?)
    }
}

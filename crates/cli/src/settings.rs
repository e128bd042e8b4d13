//! Optional TOML configuration file.
//!
//! ```toml
//! [portal]
//! timeout_secs = 10
//! login_url = "https://passportyork.yorku.ca/ppylogin/ppylogin"
//! ```
//!
//! Every key is optional. Command-line flags win over the file.

use std::path::Path;

use anyhow::Context;
use portal::PortalConfig;
use serde::Deserialize;

use crate::args::Cli;

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub portal: PortalConfig,
}

impl FileConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// The portal settings for this run: defaults, then the config file, then flags.
pub fn portal_config(cli: &Cli) -> anyhow::Result<PortalConfig> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::load(path)?.portal,
        None => PortalConfig::default(),
    };
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    tracing::debug!(?config, "portal configuration resolved");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_empty_file_is_all_defaults() {
        assert_eq!(FileConfig::from_toml("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_partial_portal_table() {
        let config = FileConfig::from_toml(
            r#"
            [portal]
            timeout_secs = 5
            course_url = "http://localhost:8080/courses"
            "#,
        )
        .unwrap();
        assert_eq!(config.portal.timeout_secs, 5);
        assert_eq!(config.portal.course_url, "http://localhost:8080/courses");
        assert_eq!(config.portal.login_url, PortalConfig::default().login_url);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml("[portal]\nretries = 3\n").is_err());
        assert!(FileConfig::from_toml("[server]\nport = 1\n").is_err());
    }

    #[test]
    fn test_timeout_flag_overrides_defaults() {
        let cli = Cli::try_parse_from(["grades_list", "--timeout", "7", "jdoe", "pw"]).unwrap();
        let config = portal_config(&cli).unwrap();
        assert_eq!(config.timeout_secs, 7);
        assert_eq!(config.course_url, PortalConfig::default().course_url);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::try_parse_from([
            "grades_list",
            "--config",
            "/nonexistent/grades_list.toml",
            "jdoe",
            "pw",
        ])
        .unwrap();
        let err = portal_config(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}

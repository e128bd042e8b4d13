//! Command-line surface.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use grades::{Credentials, Password, Username};

use crate::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "grades_list",
    version,
    about = "A simple command line program to print out York grades and GPA"
)]
pub struct Cli {
    /// York username
    #[arg(env = "GRADES_LIST_USERNAME")]
    pub username: Option<String>,

    /// York password (prompted for when omitted)
    #[arg(env = "GRADES_LIST_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Output in JSON instead of as tables
    #[arg(short, long)]
    pub json: bool,

    /// TOML configuration file overriding the portal settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Builds the login credentials, asking for the password without echo if
    /// it was not given.
    pub fn credentials(&self) -> anyhow::Result<Credentials> {
        resolve_credentials(self.username.as_deref(), self.password.as_deref(), |prompt| {
            rpassword::prompt_password(prompt)
        })
    }
}

pub fn resolve_credentials(
    username: Option<&str>,
    password: Option<&str>,
    prompt: impl FnOnce(&str) -> io::Result<String>,
) -> anyhow::Result<Credentials> {
    let Some(username) = username.and_then(Username::new) else {
        bail!("a York username is required (argument or GRADES_LIST_USERNAME)");
    };

    let password = match password {
        Some(password) => password.to_owned(),
        None => prompt(&format!("Password for {username}: "))
            .context("failed to read the password")?,
    };
    let Some(password) = Password::new(password) else {
        bail!("the password must not be empty");
    };

    Ok(Credentials::new(username, password))
}

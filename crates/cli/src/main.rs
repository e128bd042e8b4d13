//! `grades_list` entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse arguments** — username, password (prompted for when absent),
//!    output mode and logging options.
//! 2. **Wire observability** — install a `tracing-subscriber` writing to
//!    stderr, text or JSON. Every event of the run is emitted inside a
//!    `grades_list` span carrying a fresh [`grades::RunId`].
//! 3. **Construct infrastructure** — build a [`portal::PortalClient`] from the
//!    defaults, the optional config file and the flags.
//! 4. **Report** — compile the [`grades::GradeReport`] through the
//!    [`grades::GradeSource`] port and print it as JSON or as tables.

mod args;
mod logging;
mod output;
mod settings;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use grades::{compile_report, RunId};
use portal::PortalClient;
use tracing::Instrument;

use crate::args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_format)?;

    let run_id = RunId::new_random();
    let span = tracing::info_span!("grades_list", run_id = %run_id);
    run(cli).instrument(span).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let credentials = cli.credentials()?;
    let client = PortalClient::new(settings::portal_config(&cli)?)
        .context("failed to set up the portal client")?;

    let report = compile_report(&client, &credentials)
        .await
        .context("failed to retrieve grades")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        output::render_json(&report, &mut out)?;
    } else {
        output::render_tables(&report, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

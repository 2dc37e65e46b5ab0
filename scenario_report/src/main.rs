#[macro_use]
extern crate log;

use anyhow::Context;
use clap::Parser as _;
use scenario_report::{render_report, Report};

mod cli;

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;

    let args = cli::CliArgs::parse();
    debug!("{CRATE_NAME} {CRATE_VERSION}");
    debug!("Using scenario root: {}", args.root.display());

    let report = Report::collect(&args.root)
        .with_context(|| format!("Failed to collect scenarios from {}", args.root.display()))?;

    let mut stdout = std::io::stdout().lock();
    render_report(&report, &mut stdout).context("Failed to write scenario report")?;

    Ok(())
}

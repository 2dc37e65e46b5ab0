use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Directory containing one subdirectory per scenario.
    ///
    /// Relative paths are resolved against the current working directory.
    #[arg(default_value = "output")]
    pub root: PathBuf,
}

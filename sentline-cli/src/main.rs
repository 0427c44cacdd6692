//! sentline command-line entry point

use clap::Parser;
use sentline_cli::{Cli, CliResult};

fn main() -> CliResult<()> {
    Cli::parse().execute()
}

//! CLI command implementations

use clap::Parser;

pub mod reformat;

pub use reformat::ReformatArgs;

/// Rewrite a text file with one period-terminated segment per line
#[derive(Debug, Parser)]
#[command(name = "sentline", version)]
pub struct Cli {
    #[command(flatten)]
    pub args: ReformatArgs,
}

impl Cli {
    /// Run the command described by the parsed arguments
    pub fn execute(&self) -> anyhow::Result<()> {
        self.args.execute()
    }
}

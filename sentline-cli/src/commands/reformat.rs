//! Reformat command implementation

use crate::config::CliConfig;
use crate::output::TextOutput;
use anyhow::Result;
use clap::Args;
use log::LevelFilter;
use sentline_core::{ReformatConfig, Reformatter};
use std::path::PathBuf;

/// Arguments for the reformat command
#[derive(Debug, Args)]
pub struct ReformatArgs {
    /// File to reformat in place (default: foo.txt)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the reformatted text instead of rewriting the file
    #[arg(long)]
    pub stdout: bool,

    /// Suppress log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ReformatArgs {
    /// Execute the reformat command
    pub fn execute(&self) -> Result<()> {
        let config = self.load_config()?;

        // Initialize logging based on verbosity
        self.init_logging(&config)?;

        let reformat_config = config.reformat_config(self.path.as_deref());
        log::debug!("Arguments: {:?}", self);

        if self.stdout {
            return self.preview(reformat_config);
        }

        let report = Reformatter::new(reformat_config).reformat()?;
        log::info!(
            "Reformatted {} ({} segments, {} -> {} bytes)",
            report.path.display(),
            report.segments,
            report.bytes_read,
            report.bytes_written
        );

        Ok(())
    }

    /// Print the reformatted text, leaving the file untouched
    fn preview(&self, config: ReformatConfig) -> Result<()> {
        let rendered = Reformatter::new(config).render()?;

        let mut output = TextOutput::stdout();
        output.write_text(&rendered.text)?;
        output.finish()?;

        Ok(())
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::load(path),
            None => Ok(CliConfig::default()),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self, config: &CliConfig) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut builder = match self.verbose {
            0 => {
                let default_level = config.logging.level_filter()?;
                env_logger::Builder::from_env(
                    env_logger::Env::default().default_filter_or(default_level.as_str()),
                )
            }
            verbose => {
                let mut builder = env_logger::Builder::new();
                builder.filter_level(verbosity_level(verbose));
                builder
            }
        };

        if let Err(err) = builder.try_init() {
            log::debug!("Keeping the already installed logger: {err}");
        }

        Ok(())
    }
}

fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

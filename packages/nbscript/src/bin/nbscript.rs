//! nbscript CLI
//!
//! Convert a Jupyter notebook into a Python script.
//!
//! # Usage
//!
//! ```bash
//! # Prune unused assignments and format with black
//! nbscript analysis.ipynb analysis.py
//!
//! # Keep every assignment, use the built-in formatter
//! nbscript analysis.ipynb analysis.py --no-remove-unused --no-format
//!
//! # Settings from a YAML file
//! nbscript analysis.ipynb analysis.py --config nbscript.yaml
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nbscript::{ConvertError, Converter, ConverterConfig};
use tracing::{error, Level};

#[derive(Parser)]
#[command(name = "nbscript")]
#[command(about = "Convert a Jupyter notebook into a Python script", long_about = None)]
#[command(version)]
struct Cli {
    /// Notebook to convert (.ipynb)
    input: PathBuf,

    /// Script to write (.py)
    output: PathBuf,

    /// Keep unused variable assignments
    #[arg(long)]
    no_remove_unused: bool,

    /// Skip the external formatter and use the built-in one
    #[arg(long, visible_alias = "no-black")]
    no_format: bool,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// File settings (or defaults) with the switches applied on top
    fn converter_config(&self) -> Result<ConverterConfig, ConvertError> {
        let mut config = match &self.config {
            Some(path) => ConverterConfig::from_yaml(path)?,
            None => ConverterConfig::default(),
        };
        if self.no_remove_unused {
            config = config.with_prune_unused(false);
        }
        if self.no_format {
            config = config.with_external_format(false);
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    let converter = Converter::new(cli.converter_config()?)?;
    converter.convert(&cli.input, &cli.output)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

//! Command-line interface for confpatch
//!
//! Thin plumbing around the merge core: argument parsing, path resolution,
//! and logging setup. The core never sees these defaults or paths directly.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::merge;

/// Conventional overrides filename, shown in help examples only.
pub const DEFAULT_OVERRIDES_FILE: &str = "config-overrides.txt";

/// Example target path for the help text.
const EXAMPLE_CONFIG_FILE: &str = "/etc/myapp/client.conf";

/// Rewrite key=value settings in a config file from an overrides file
#[derive(Parser)]
#[command(name = "confpatch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = format!(
    "Examples:\n  confpatch {EXAMPLE_CONFIG_FILE} {DEFAULT_OVERRIDES_FILE}\n  confpatch --dump {EXAMPLE_CONFIG_FILE}"
))]
pub struct Cli {
    /// Config file to alter in place
    #[arg(value_name = "CONFIG_FILENAME")]
    config_filename: PathBuf,

    /// File containing new key=value settings that map onto the config file
    #[arg(value_name = "NEW_MAPPINGS", required_unless_present = "dump")]
    new_mappings: Option<PathBuf>,

    /// Print the parsed key=value pairs of CONFIG_FILENAME and exit without merging
    #[arg(long)]
    dump: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config_filename = absolutize(&cli.config_filename);
    if !config_filename.exists() {
        bail!("filename to alter (1st argument) does not exist: {}", config_filename.display());
    }

    if cli.dump {
        return dump(&config_filename);
    }

    // required_unless_present guarantees the mappings path is there by now.
    let Some(new_mappings) = cli.new_mappings.as_deref() else {
        bail!("file containing the mappings (2nd argument) is required");
    };
    let new_mappings = absolutize(new_mappings);
    if !new_mappings.exists() {
        bail!(
            "filename that contains the mappings (2nd argument) does not exist: {}",
            new_mappings.display()
        );
    }

    let overrides = merge::load_overrides(&new_mappings)?;
    merge::merge_into(&config_filename, &overrides)?;
    Ok(())
}

/// Print the settings parsed out of a config file, sorted by key.
fn dump(path: &Path) -> Result<()> {
    let parsed = merge::load_overrides(path)?;
    let mut pairs: Vec<_> = parsed.into_iter().collect();
    pairs.sort();
    for (key, value) in pairs {
        println!("{}={}", key, value);
    }
    Ok(())
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

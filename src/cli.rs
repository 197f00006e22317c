// src/cli.rs
use std::path::{Path, PathBuf};

use crate::config::{self, consts::DEFAULT_CONFIG_FILE};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::runner::{Reporter, RunSummary};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run { config_file: PathBuf },
    Version,
    Help,
}

/// Parse arguments (program name excluded).
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config_file: Option<PathBuf> = None;

    for a in args {
        let a: String = a.into();
        match a.as_str() {
            "-v" | "--version" => return Ok(Command::Version),
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(Error::Config(format!("Unknown arg: {flag}")));
            }
            _ if config_file.is_some() => {
                return Err(Error::Config(format!("Unexpected extra argument: {a}")));
            }
            _ => config_file = Some(PathBuf::from(a)),
        }
    }

    Ok(Command::Run {
        config_file: config_file.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
    })
}

/// Progress sink that goes to the log.
pub struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        logd!("Generating reports for {total} site(s)");
    }
    fn item_done(&mut self, site_id: &str, path: &Path) {
        logd!("Site \"{site_id}\" done: {}", path.display());
    }
}

/// Load `config_file`, set up logging and generate every report.
pub fn run(config_file: &Path) -> Result<RunSummary> {
    let options = config::load(config_file)?;
    crate::log::init(&options.logger)?;
    logd!("Using configuration {}", config_file.display());

    let summary = Reporter::new(options).run(Some(&mut LogProgress))?;
    logf!("All reports have been successfully generated.");
    Ok(summary)
}

// src/config/options.rs
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    pub id: String,
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warning" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerOptions {
    pub level: LogLevel,
    pub target: LogTarget,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self { level: LogLevel::Warning, target: LogTarget::Stderr }
    }
}

/// Validated run configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub awstats_dir: PathBuf,       // where AWStats writes its monthly files
    pub out_dir: PathBuf,           // generated site
    pub file_prefix: String,
    pub file_suffix: String,
    pub sites: Vec<Site>,           // in config order
    pub debug: bool,                // force debug-level logging
    pub logger: LoggerOptions,
}

impl AppOptions {
    /// Options with defaults for everything but the required directives.
    /// Nothing is checked on disk.
    pub fn new(awstats_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>, sites: Vec<Site>) -> Self {
        Self {
            awstats_dir: awstats_dir.into(),
            out_dir: out_dir.into(),
            file_prefix: s!(DEFAULT_FILE_PREFIX),
            file_suffix: s!(DEFAULT_FILE_SUFFIX),
            sites,
            debug: false,
            logger: LoggerOptions::default(),
        }
    }
}

/* ---------------- File representation ---------------- */

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    awstatic: Option<MainSection>,
    #[serde(default)]
    logger: LoggerSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MainSection {
    awstats_dir: Option<String>,
    out_dir: Option<String>,
    sites: Option<String>,
    file_prefix: Option<String>,
    file_suffix: Option<String>,
    #[serde(default)]
    debug: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggerSection {
    level: Option<String>,
    path: Option<String>,
}

/* ---------------- Loading ---------------- */

/// Read, parse and validate the configuration file at `path`.
pub fn load(path: &Path) -> Result<AppOptions> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("The configuration file at \"{}\" could not be read: {e}", path.display()))
    })?;
    from_toml(&text, path)
}

/// Parse and validate configuration text. `path` is only used in messages.
pub fn from_toml(text: &str, path: &Path) -> Result<AppOptions> {
    let file: ConfigFile = toml::from_str(text)
        .map_err(|source| Error::ConfigSyntax { path: path.to_path_buf(), source })?;
    validate(file)
}

fn validate(file: ConfigFile) -> Result<AppOptions> {
    let main = file.awstatic.ok_or_else(|| {
        Error::Config(format!("The configuration file has no [{CONFIG_SECTION}] section."))
    })?;

    let awstats_dir = absolute(&required(main.awstats_dir, "awstats_dir")?)?;
    let out_dir = absolute(&required(main.out_dir, "out_dir")?)?;
    let sites = parse_sites(&required(main.sites, "sites")?)?;

    if !awstats_dir.is_dir() {
        return Err(Error::Config(format!(
            "The value of \"awstats_dir\" (\"{}\") should be a valid directory.",
            awstats_dir.display()
        )));
    }
    check_out_dir(&out_dir)?;

    let mut logger = parse_logger(file.logger)?;
    if main.debug {
        logger.level = LogLevel::Debug;
    }

    Ok(AppOptions {
        awstats_dir,
        out_dir,
        file_prefix: main.file_prefix.unwrap_or_else(|| s!(DEFAULT_FILE_PREFIX)),
        file_suffix: main.file_suffix.unwrap_or_else(|| s!(DEFAULT_FILE_SUFFIX)),
        sites,
        debug: main.debug,
        logger,
    })
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    value.ok_or_else(|| {
        Error::Config(format!("A required directive is missing from the configuration file: \"{name}\"."))
    })
}

fn absolute(p: &str) -> Result<PathBuf> {
    std::path::absolute(p).map_err(|e| Error::io(p, e))
}

fn check_out_dir(out_dir: &Path) -> Result<()> {
    let parent_ok = out_dir.parent().map(Path::is_dir).unwrap_or(false);
    if !parent_ok {
        return Err(Error::Config(format!(
            "The parent of \"out_dir\" (\"{}\") must be an existing directory.",
            out_dir.display()
        )));
    }
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(Error::Config(format!(
            "The value of \"out_dir\" (\"{}\") should be a directory.",
            out_dir.display()
        )));
    }
    Ok(())
}

/// `sites` is a whitespace-separated list of `id=url` pairs.
/// Only the first `=` splits, so URLs may carry query strings.
pub fn parse_sites(s: &str) -> Result<Vec<Site>> {
    let mut sites = Vec::new();
    let mut seen = HashSet::new();
    for pair in s.split_whitespace() {
        let (id, url) = pair
            .split_once('=')
            .ok_or_else(|| Error::Config(format!("Wrong syntax for \"sites\": \"{pair}\".")))?;
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(Error::Config(format!("Invalid site id in \"sites\": \"{pair}\".")));
        }
        if format!("{id}.json") == SITES_FILE {
            return Err(Error::Config(format!("Site id \"{id}\" is reserved for the site index.")));
        }
        if !seen.insert(id) {
            return Err(Error::Config(format!("Site \"{id}\" is listed twice in \"sites\".")));
        }
        sites.push(Site { id: s!(id), url: s!(url) });
    }
    if sites.is_empty() {
        return Err(Error::Config(s!("\"sites\" must list at least one site.")));
    }
    Ok(sites)
}

fn parse_logger(section: LoggerSection) -> Result<LoggerOptions> {
    let level = match section.level.as_deref() {
        None => LogLevel::Warning,
        Some(name) => LogLevel::from_name(name)
            .ok_or_else(|| Error::Config(format!("Unknown log level: \"{name}\".")))?,
    };
    let target = match section.path.as_deref() {
        None | Some("-") => LogTarget::Stderr,
        Some(p) => {
            // no guessing relative to the working directory
            let path = PathBuf::from(p);
            if !path.is_absolute() {
                return Err(Error::Config(s!("The path to the log file must be absolute.")));
            }
            LogTarget::File(path)
        }
    };
    Ok(LoggerOptions { level, target })
}

// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod parser;
pub mod progress;
pub mod report;
pub mod runner;
pub mod specs;
pub mod template;

pub use error::{Error, Result};
pub use parser::{Parser, RawData, Record};
pub use report::{create_report, SiteReport};
pub use runner::{Reporter, RunSummary};

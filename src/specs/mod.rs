// src/specs/mod.rs
//! # Section layouts
//!
//! AWStats writes one text file per site and month. The file is a list of
//! sections:
//!
//! ```text
//! BEGIN_DAY 2
//! 20120101 14 38 1213892 6
//! 20120102 2 12 654661 1
//! END_DAY
//! ```
//!
//! This module knows **what the record lines of each section mean**: the
//! name of every whitespace-separated column. It does not read files
//! (that is `parser`) and it does not sum anything (that is `report`).
//!
//! Only sections listed in [`LAYOUTS`] are kept by the parser. Everything
//! else AWStats writes (`MISC`, `TIME`, `ROBOT`, …) is skipped.

pub mod sections;

pub use sections::{layout_of, SectionLayout, LAYOUTS};

// src/report/mod.rs
//! # Reports
//!
//! Turns the parser's string tree into the per-site JSON document the
//! front-end reads (`data/<site>.json`). Every figure is rolled up per
//! month and per year; the front-end only picks a period and renders.
//!
//! Nothing here touches the filesystem.

pub mod overview;
pub mod periods;
pub mod ranked;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::parser::RawData;

pub use overview::{create_overview, Overview, Totals, ALL_TIME};
pub use periods::get_periods;
pub use ranked::{
    create_downloads, create_keywords, create_phrases, create_ranked, create_referrers,
    create_top10, Ranked, RankedRow, RankedSpec,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteReport {
    pub url: String,
    pub overview: Overview,
    pub top10: Ranked,
    pub downloads: Ranked,
    pub referrers: Ranked,
    pub keywords: Ranked,
    pub phrases: Ranked,
    /// Most recent first; the front-end opens on the first one.
    pub periods: Vec<String>,
}

pub fn create_report(raw: &RawData, url: &str) -> Result<SiteReport> {
    let overview = create_overview(raw)?;
    let periods = get_periods(overview.keys().map(String::as_str));
    Ok(SiteReport {
        url: s!(url),
        top10: create_top10(raw)?,
        downloads: create_downloads(raw)?,
        referrers: create_referrers(raw)?,
        keywords: create_keywords(raw)?,
        phrases: create_phrases(raw)?,
        overview,
        periods,
    })
}

/// AWStats counters are non-negative integers.
pub(crate) fn parse_count(value: &str, section: &str, period: &str, key: &str, field: &str) -> Result<u64> {
    value.parse().map_err(|_| Error::BadNumber {
        section: s!(section),
        period: s!(period),
        key: s!(key),
        field: s!(field),
        value: s!(value),
    })
}

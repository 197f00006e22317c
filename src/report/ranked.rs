// src/report/ranked.rs
//! Ranked tables (top pages, downloads, referrers, keywords, phrases).
//!
//! All five are built by [`create_ranked`] from a [`RankedSpec`]:
//! - per month: the month's records, converted and sorted;
//! - per year: the month rows summed per label, then sorted.
//!
//! Both are truncated to `top` rows when the `RankedSpec` sets a limit.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::parse_count;
use crate::config::consts::{TOP_DOWNLOADS, TOP_PAGES, TOP_SEARCHES};
use crate::core::unquote_plus;
use crate::error::{Error, Result};
use crate::parser::RawData;
use crate::specs::sections::{DOWNLOADS, KEYWORDS, PAGEREFS, SEARCHWORDS, SIDER};

#[derive(Clone, Copy, Debug)]
pub struct RankedSpec {
    pub section: &'static str,
    /// Field that identifies a row (URL, keyword, …).
    pub label: &'static str,
    /// Numeric fields; summed in year rows. Must contain `sort_on`.
    pub fields: &'static [&'static str],
    pub sort_on: &'static str,
    pub top: Option<usize>,
    /// Labels are form-encoded by AWStats.
    pub unquote: bool,
}

pub const TOP10: RankedSpec = RankedSpec {
    section: SIDER,
    label: "url",
    fields: &["pages", "bandwidth"],
    sort_on: "pages",
    top: Some(TOP_PAGES),
    unquote: false,
};

pub const DOWNLOADS_SPEC: RankedSpec = RankedSpec {
    section: DOWNLOADS,
    label: "url",
    fields: &["hits", "bandwidth"],
    sort_on: "hits",
    top: Some(TOP_DOWNLOADS),
    unquote: false,
};

pub const REFERRERS: RankedSpec = RankedSpec {
    section: PAGEREFS,
    label: "url",
    fields: &["pages", "hits"],
    sort_on: "pages",
    top: None,
    unquote: false,
};

pub const KEYWORDS_SPEC: RankedSpec = RankedSpec {
    section: KEYWORDS,
    label: "keyword",
    fields: &["searches"],
    sort_on: "searches",
    top: Some(TOP_SEARCHES),
    unquote: true,
};

pub const PHRASES: RankedSpec = RankedSpec {
    section: SEARCHWORDS,
    label: "phrase",
    fields: &["searches"],
    sort_on: "searches",
    top: Some(TOP_SEARCHES),
    unquote: true,
};

/// One table row. Serializes flat: `{"url": "/", "pages": 14, "bandwidth": 114}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedRow {
    label_key: &'static str,
    pub label: String,
    pub counts: Vec<(&'static str, u64)>,
}

impl RankedRow {
    pub fn count(&self, field: &str) -> u64 {
        self.counts
            .iter()
            .find(|(f, _)| *f == field)
            .map(|&(_, v)| v)
            .unwrap_or(0)
    }
}

impl Serialize for RankedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.counts.len()))?;
        map.serialize_entry(self.label_key, &self.label)?;
        for (field, value) in &self.counts {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

/// Period (`YYYYMM` or `YYYY`) → rows, best first.
pub type Ranked = BTreeMap<String, Vec<RankedRow>>;

pub fn create_ranked(raw: &RawData, spec: &RankedSpec) -> Result<Ranked> {
    let mut report = Ranked::new();
    // year → label → summed counts, in `spec.fields` order
    let mut years: BTreeMap<String, BTreeMap<String, Vec<u64>>> = BTreeMap::new();

    let months = raw.get(spec.section).into_iter().flatten();
    for (yyyymm, records) in months {
        let mut rows = Vec::with_capacity(records.len());
        for (key, record) in records {
            let raw_label = record.field(spec.label).ok_or_else(|| Error::MissingField {
                section: s!(spec.section),
                period: yyyymm.clone(),
                key: key.clone(),
                field: s!(spec.label),
            })?;
            let label = if spec.unquote { unquote_plus(raw_label) } else { s!(raw_label) };

            let mut counts = Vec::with_capacity(spec.fields.len());
            for &field in spec.fields {
                let value = record.field(field).ok_or_else(|| Error::MissingField {
                    section: s!(spec.section),
                    period: yyyymm.clone(),
                    key: key.clone(),
                    field: s!(field),
                })?;
                counts.push((field, parse_count(value, spec.section, yyyymm, key, field)?));
            }
            rows.push(RankedRow { label_key: spec.label, label, counts });
        }

        let year = s!(yyyymm.get(..4).unwrap_or(yyyymm));
        let sums = years.entry(year).or_default();
        for row in &rows {
            let acc = sums
                .entry(row.label.clone())
                .or_insert_with(|| vec![0; spec.fields.len()]);
            for (slot, &(_, v)) in acc.iter_mut().zip(&row.counts) {
                *slot = slot.saturating_add(v);
            }
        }

        report.insert(yyyymm.clone(), rank(rows, spec));
    }

    for (year, labels) in years {
        let rows = labels
            .into_iter()
            .map(|(label, sums)| RankedRow {
                label_key: spec.label,
                label,
                counts: spec.fields.iter().copied().zip(sums).collect(),
            })
            .collect();
        report.insert(year, rank(rows, spec));
    }

    Ok(report)
}

/// Sort descending on `spec.sort_on`, label ascending on ties, then cut.
fn rank(mut rows: Vec<RankedRow>, spec: &RankedSpec) -> Vec<RankedRow> {
    rows.sort_by(|a, b| {
        Reverse(a.count(spec.sort_on))
            .cmp(&Reverse(b.count(spec.sort_on)))
            .then_with(|| a.label.cmp(&b.label))
    });
    if let Some(top) = spec.top {
        rows.truncate(top);
    }
    rows
}

pub fn create_top10(raw: &RawData) -> Result<Ranked> {
    create_ranked(raw, &TOP10)
}

pub fn create_downloads(raw: &RawData) -> Result<Ranked> {
    create_ranked(raw, &DOWNLOADS_SPEC)
}

pub fn create_referrers(raw: &RawData) -> Result<Ranked> {
    create_ranked(raw, &REFERRERS)
}

pub fn create_keywords(raw: &RawData) -> Result<Ranked> {
    create_ranked(raw, &KEYWORDS_SPEC)
}

pub fn create_phrases(raw: &RawData) -> Result<Ranked> {
    create_ranked(raw, &PHRASES)
}

// src/report/overview.rs
//! Hits, pages, bandwidth, visits and visitors: per day, month, year and
//! for the whole history.

use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::Serialize;

use super::parse_count;
use crate::core::days_in_month;
use crate::error::Result;
use crate::parser::{RawData, SectionData};
use crate::specs::sections::{DAY, GENERAL};

pub const ALL_TIME: &str = "all-time";

const UNIQUE_VISITORS: &str = "TotalUnique";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub hits: u64,
    pub pages: u64,
    pub bandwidth: u64,
    pub visits: u64,
    /// AWStats reports unique visitors per month only; 0 on days.
    pub visitors: u64,
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Self) {
        // counters stick at u64::MAX rather than wrap
        self.hits = self.hits.saturating_add(rhs.hits);
        self.pages = self.pages.saturating_add(rhs.pages);
        self.bandwidth = self.bandwidth.saturating_add(rhs.bandwidth);
        self.visits = self.visits.saturating_add(rhs.visits);
        self.visitors = self.visitors.saturating_add(rhs.visitors);
    }
}

/// Keys are `YYYYMMDD`, `YYYYMM`, `YYYY` and [`ALL_TIME`].
pub type Overview = BTreeMap<String, Totals>;

pub fn create_overview(raw: &RawData) -> Result<Overview> {
    let mut report = Overview::new();
    let mut all_time = Totals::default();

    let months = raw.get(DAY).into_iter().flatten();
    for (yyyymm, days) in months {
        let mut month = Totals::default();

        for day in 1..=days_in_month(yyyymm)? {
            let yyyymmdd = format!("{yyyymm}{day:02}");
            let totals = day_totals(days, &yyyymmdd, yyyymm)?;
            month += totals;
            report.insert(yyyymmdd, totals);
        }
        month.visitors = unique_visitors(raw, yyyymm)?;

        *report.entry(s!(&yyyymm[..4])).or_default() += month;
        all_time += month;
        report.insert(yyyymm.clone(), month);
    }

    report.insert(s!(ALL_TIME), all_time);
    Ok(report)
}

/// Missing days count as zero.
fn day_totals(days: &SectionData, yyyymmdd: &str, yyyymm: &str) -> Result<Totals> {
    let Some(record) = days.get(yyyymmdd) else {
        return Ok(Totals::default());
    };
    let count = |field: &str| match record.field(field) {
        Some(v) => parse_count(v, DAY, yyyymm, yyyymmdd, field),
        None => Ok(0),
    };
    Ok(Totals {
        hits: count("hits")?,
        pages: count("pages")?,
        bandwidth: count("bandwidth")?,
        visits: count("visits")?,
        visitors: 0,
    })
}

fn unique_visitors(raw: &RawData, yyyymm: &str) -> Result<u64> {
    let value = raw
        .get(GENERAL)
        .and_then(|months| months.get(yyyymm))
        .and_then(|general| general.get(UNIQUE_VISITORS))
        .and_then(|record| record.values().first());

    match value {
        Some(v) => parse_count(v, GENERAL, yyyymm, UNIQUE_VISITORS, UNIQUE_VISITORS),
        None => {
            logw!("No {} for {}; counting 0 visitors", UNIQUE_VISITORS, yyyymm);
            Ok(0)
        }
    }
}

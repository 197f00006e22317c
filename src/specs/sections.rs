// src/specs/sections.rs

/// How the record lines of a section are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionLayout {
    /// Positional columns. The first column is also the record key.
    Fields(&'static [&'static str]),
    /// Each line means something different: key, then a list of values.
    Raw,
}

impl SectionLayout {
    /// Minimum number of values a record line must carry.
    pub fn min_values(&self) -> usize {
        match self {
            SectionLayout::Fields(names) => names.len(),
            SectionLayout::Raw => 1,
        }
    }
}

pub const BROWSER: &str = "BROWSER";
pub const DAY: &str = "DAY";
pub const DOWNLOADS: &str = "DOWNLOADS";
pub const ERRORS: &str = "ERRORS";
pub const GENERAL: &str = "GENERAL";
pub const KEYWORDS: &str = "KEYWORDS";
pub const OS: &str = "OS";
pub const PAGEREFS: &str = "PAGEREFS";
pub const SEARCHWORDS: &str = "SEARCHWORDS";
pub const SEREFERRALS: &str = "SEREFERRALS";
pub const SIDER: &str = "SIDER";
pub const VISITOR: &str = "VISITOR";

pub const LAYOUTS: &[(&str, SectionLayout)] = &[
    (BROWSER,     SectionLayout::Fields(&["id", "hits"])),
    (DAY,         SectionLayout::Fields(&["yyyymmdd", "pages", "hits", "bandwidth", "visits"])),
    (DOWNLOADS,   SectionLayout::Fields(&["url", "hits", "status_206", "bandwidth"])),
    (ERRORS,      SectionLayout::Fields(&["error", "hits", "bandwidth"])),
    (GENERAL,     SectionLayout::Raw),
    (KEYWORDS,    SectionLayout::Fields(&["keyword", "searches"])),
    (OS,          SectionLayout::Fields(&["id", "hits"])),
    (PAGEREFS,    SectionLayout::Fields(&["url", "pages", "hits"])),
    (SEARCHWORDS, SectionLayout::Fields(&["phrase", "searches"])),
    (SEREFERRALS, SectionLayout::Fields(&["id", "pages", "hits"])),
    (SIDER,       SectionLayout::Fields(&["url", "pages", "bandwidth", "entry", "exit"])),
    (VISITOR,     SectionLayout::Fields(&["host", "pages", "hits", "bandwidth"])),
];

/// Layout for a section name, `None` for sections we do not keep.
pub fn layout_of(name: &str) -> Option<SectionLayout> {
    LAYOUTS.iter().find(|(n, _)| *n == name).map(|(_, l)| *l)
}

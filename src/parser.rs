// src/parser.rs
//! Reader for AWStats monthly report files.
//!
//! One file holds one month of one site. The parser keeps the sections
//! listed in [`crate::specs::LAYOUTS`] and accumulates them across files
//! into a [`RawData`] tree:
//!
//! ```text
//! section ("DAY") → period ("201201") → record key ("20120101") → Record
//! ```
//!
//! Values are kept as strings; `report` decides what is numeric.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{IoContext, Result};
use crate::specs::{layout_of, SectionLayout};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    /// Named columns, first column included.
    Fields(BTreeMap<String, String>),
    /// Values after the key (`GENERAL` lines).
    Raw(Vec<String>),
}

impl Record {
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            Record::Fields(map) => map.get(name).map(String::as_str),
            Record::Raw(_) => None,
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            Record::Raw(values) => values,
            Record::Fields(_) => &[],
        }
    }
}

/// Records of one section for one month, by record key.
pub type SectionData = BTreeMap<String, Record>;
/// Section name → period (`YYYYMM`) → records.
pub type RawData = BTreeMap<String, BTreeMap<String, SectionData>>;

const BEGIN: &str = "BEGIN_";

#[derive(Default)]
pub struct Parser {
    data: RawData,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &RawData {
        &self.data
    }

    pub fn into_data(self) -> RawData {
        self.data
    }

    /// Parse every report file of `site_id` found in `dir`.
    pub fn parse_dir(&mut self, site_id: &str, dir: &Path, prefix: &str, suffix: &str) -> Result<&RawData> {
        for (path, yyyymm) in report_files(site_id, dir, prefix, suffix)? {
            logd!("Parsing {} as {}", path.display(), yyyymm);
            self.parse_file(&path, &yyyymm)?;
        }
        Ok(&self.data)
    }

    /// Parse a single file holding the data of month `yyyymm`.
    pub fn parse_file(&mut self, path: &Path, yyyymm: &str) -> Result<()> {
        let file = File::open(path).at(path)?;
        self.parse_reader(BufReader::new(file), path, yyyymm)
    }

    /// Parse report text from any reader. `path` is only used in errors.
    pub fn parse_reader<R: BufRead>(&mut self, reader: R, path: &Path, yyyymm: &str) -> Result<()> {
        let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

        while let Some((lineno, line)) = lines.next() {
            let line = line.at(path)?;
            if !line.starts_with(BEGIN) {
                continue;
            }
            let (name, count) = read_header(&line, path, lineno)?;

            let mut records = Vec::with_capacity(count);
            for _ in 0..count {
                match lines.next() {
                    Some((n, l)) => records.push((n, s!(l.at(path)?.trim()))),
                    None => {
                        return Err(parse_err!(
                            path, lineno,
                            "section {name} announces {count} records but the file ends after {}",
                            records.len()
                        ));
                    }
                }
            }
            // END_<name>
            if let Some((_, end)) = lines.next() {
                let end = end.at(path)?;
                if end.trim() != format!("END_{name}") {
                    logd!("{}: section {} closed by {:?}", path.display(), name, end.trim());
                }
            }

            let Some(layout) = layout_of(name) else {
                continue;
            };
            let data = read_records(layout, name, &records, path)?;
            if data.is_empty() {
                continue;
            }
            self.data
                .entry(s!(name))
                .or_default()
                .insert(s!(yyyymm), data);
        }
        Ok(())
    }
}

/// `BEGIN_<NAME> <count>` → `(NAME, count)`.
fn read_header<'a>(line: &'a str, path: &Path, lineno: usize) -> Result<(&'a str, usize)> {
    let mut parts = line.split_whitespace();
    let (Some(tag), Some(count), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(parse_err!(path, lineno, "malformed section header {line:?}"));
    };
    let count: usize = count
        .parse()
        .map_err(|_| parse_err!(path, lineno, "section header {line:?} has no record count"))?;
    Ok((&tag[BEGIN.len()..], count))
}

fn read_records(
    layout: SectionLayout,
    section: &str,
    records: &[(usize, String)],
    path: &Path,
) -> Result<SectionData> {
    let mut data = SectionData::new();
    for (lineno, line) in records {
        let values: Vec<&str> = line.split_whitespace().collect();
        if values.len() < layout.min_values() {
            return Err(parse_err!(
                path, *lineno,
                "{section} record has {} values, expected at least {}",
                values.len(),
                layout.min_values()
            ));
        }
        let key = s!(values[0]);
        let record = match layout {
            SectionLayout::Fields(names) => Record::Fields(
                names.iter().zip(&values).map(|(n, v)| (s!(*n), s!(*v))).collect(),
            ),
            SectionLayout::Raw => Record::Raw(values[1..].iter().map(|v| s!(*v)).collect()),
        };
        data.insert(key, record);
    }
    Ok(data)
}

/// Report files of `site_id` in `dir`, sorted by file name, with the
/// period (`YYYYMM`) each one covers.
///
/// File names look like `<prefix><MM><YYYY>.<site_id>.<suffix>`.
pub fn report_files(site_id: &str, dir: &Path, prefix: &str, suffix: &str) -> Result<Vec<(PathBuf, String)>> {
    let tail = format!(".{site_id}.{suffix}");
    let mut out = Vec::new();

    for entry in fs::read_dir(dir).at(dir)? {
        let entry = entry.at(dir)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else { continue };
        let Some(mmyyyy) = period_part(name, prefix, &tail) else { continue };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match mmyyyy_to_yyyymm(mmyyyy) {
            Some(yyyymm) => out.push((path, yyyymm)),
            None => logw!("Skipping {name}: {mmyyyy:?} is not MMYYYY"),
        }
    }

    out.sort();
    Ok(out)
}

fn period_part<'a>(name: &'a str, prefix: &str, tail: &str) -> Option<&'a str> {
    if name.len() < prefix.len() + tail.len() {
        return None;
    }
    name.strip_prefix(prefix)?.strip_suffix(tail)
}

fn mmyyyy_to_yyyymm(mmyyyy: &str) -> Option<String> {
    if mmyyyy.len() != 6 || !mmyyyy.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}{}", &mmyyyy[2..], &mmyyyy[..2]))
}

/// Convenience for callers that only want one file's content.
pub fn parse_str(text: &str, yyyymm: &str) -> Result<RawData> {
    let mut parser = Parser::new();
    parser.parse_reader(text.as_bytes(), Path::new("<string>"), yyyymm)?;
    Ok(parser.into_data())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_from_file_name() {
        assert_eq!(mmyyyy_to_yyyymm("012012").as_deref(), Some("201201"));
        assert_eq!(mmyyyy_to_yyyymm("12012"), None);
        assert_eq!(mmyyyy_to_yyyymm("01201x"), None);
    }

    #[test]
    fn period_part_needs_prefix_and_tail() {
        let tail = ".example.com.txt";
        assert_eq!(period_part("awstats012012.example.com.txt", "awstats", tail), Some("012012"));
        assert_eq!(period_part("awstats012012.example.org.txt", "awstats", tail), None);
        assert_eq!(period_part("stats012012.example.com.txt", "awstats", tail), None);
    }

    #[test]
    fn header_needs_count() {
        let p = Path::new("x");
        assert_eq!(read_header("BEGIN_DAY 3", p, 1).unwrap(), ("DAY", 3));
        assert!(read_header("BEGIN_DAY", p, 1).is_err());
        assert!(read_header("BEGIN_DAY three", p, 1).is_err());
    }
}

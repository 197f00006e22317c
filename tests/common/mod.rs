// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use awstatic::parser::{Parser, RawData};

/// Two months of a small site, shaped like real AWStats output.
pub const BASICS: &str = "\
AWSTATS DATA FILE 7.0 (build 1.971)

# If you remove this file, all statistics for date 201201 will be lost/reset.

# Position (offset in bytes) in this file for beginning of each section for
# direct I/O access. If you made changes somewhere in this file, you should
# also remove completely the MAP section (AWStats will rewrite it at next
# update).
BEGIN_MAP 3
POS_GENERAL 2081
POS_TIME 2731
POS_VISITOR 3802
END_MAP

# LastLine    = Date of last record processed - Last line number - Last offset
BEGIN_GENERAL 2
TotalVisits 6
TotalUnique 6
END_GENERAL

# Host - Pages - Hits - Bandwidth - Last visit date - [Start date of last visit] - [Last page of last visit]
BEGIN_VISITOR 2
8.8.8.8.rev.sfr.net 14 38 1213892 20120101224417
i04m-8-8-8-8.d4.club-internet.fr 2 12 654661 20120102102933
END_VISITOR

# Unknown to the parser, skipped
BEGIN_ROBOT 1
googlebot 73 0 20120131234706 0
END_ROBOT
";

/// Wrap record lines into a section of a report file.
pub fn section(name: &str, lines: &[&str]) -> String {
    let mut out = format!("BEGIN_{name} {}\n", lines.len());
    for l in lines {
        out.push_str(l);
        out.push('\n');
    }
    out.push_str(&format!("END_{name}\n"));
    out
}

/// Parse one section over several months.
pub fn raw(name: &str, months: &[(&str, &[&str])]) -> RawData {
    let mut parser = Parser::new();
    for (yyyymm, lines) in months {
        let text = section(name, lines);
        parser
            .parse_reader(text.as_bytes(), Path::new("test"), yyyymm)
            .unwrap();
    }
    parser.into_data()
}

pub fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

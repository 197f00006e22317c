// benches/parse.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use awstatic::{create_report, parser::parse_str, RawData};

/// One busy month: every day, a few thousand pages and keywords.
fn synthetic_month(yyyymm: &str) -> String {
    let mut out = String::new();

    out.push_str("BEGIN_GENERAL 2\nTotalVisits 91234\nTotalUnique 40321\nEND_GENERAL\n");

    out.push_str("BEGIN_DAY 31\n");
    for d in 1..=31 {
        out.push_str(&format!("{yyyymm}{d:02} {} {} {} {}\n", 1000 + d, 4000 + d, 900_000 + d, 300 + d));
    }
    out.push_str("END_DAY\n");

    out.push_str("BEGIN_SIDER 5000\n");
    for i in 0..5000 {
        out.push_str(&format!("/page/{i}.html {} {} 0 0\n", i % 97, i * 13));
    }
    out.push_str("END_SIDER\n");

    out.push_str("BEGIN_KEYWORDS 3000\n");
    for i in 0..3000 {
        out.push_str(&format!("mot%C3%A9{i} {}\n", i % 31));
    }
    out.push_str("END_KEYWORDS\n");

    out
}

fn bench_parse(c: &mut Criterion) {
    let text = synthetic_month("201203");

    c.bench_function("parse_month", |b| {
        b.iter(|| {
            let data = parse_str(black_box(&text), "201203").unwrap();
            black_box(data.len())
        })
    });

    let mut year = RawData::new();
    for m in 1..=12 {
        let yyyymm = format!("2012{m:02}");
        for (section, months) in parse_str(&synthetic_month(&yyyymm), &yyyymm).unwrap() {
            year.entry(section).or_default().extend(months);
        }
    }

    c.bench_function("report_year", |b| {
        b.iter(|| {
            let report = create_report(black_box(&year), "http://exemple.com").unwrap();
            black_box(report.periods.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);

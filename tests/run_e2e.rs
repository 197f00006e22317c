// tests/run_e2e.rs
//
// Whole runs: AWStats files in, JSON and front-end out.
//
mod common;

use std::fs;
use std::path::{Path, PathBuf};

use awstatic::config::{AppOptions, Site};
use awstatic::progress::{NullProgress, Progress};
use awstatic::{Error, Reporter};
use common::{section, write};
use serde_json::{json, Value};

fn site(id: &str, url: &str) -> Site {
    Site { id: id.into(), url: url.into() }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn month_file(days: &[&str], unique: u64, pages: &[&str]) -> String {
    let general = [format!("TotalVisits {}", days.len()), format!("TotalUnique {unique}")];
    let general: Vec<&str> = general.iter().map(String::as_str).collect();
    [
        section("GENERAL", &general),
        section("DAY", days),
        section("SIDER", pages),
        section("KEYWORDS", &[]),
    ]
    .concat()
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(String, PathBuf)>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, site_id: &str, path: &Path) {
        self.done.push((site_id.to_string(), path.to_path_buf()));
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn generates_site_json_and_front_end() {
    let tmp = tempfile::tempdir().unwrap();
    let stats = tmp.path().join("awstats");
    let out = tmp.path().join("www");

    write(
        &stats.join("awstats012012.exemple.com.txt"),
        &month_file(&["20120101 2 5 100 1", "20120131 1 1 10 1"], 2, &["/ 2 80 1 1", "/a 1 30 0 0"]),
    );
    write(
        &stats.join("awstats022012.exemple.com.txt"),
        &month_file(&["20120214 4 8 200 1"], 1, &["/a 4 200 1 1"]),
    );
    write(
        &stats.join("awstats022012.other.org.txt"),
        &month_file(&["20120201 1 1 1 1"], 1, &["/ 1 1 1 1"]),
    );

    let options = AppOptions::new(
        &stats,
        &out,
        vec![site("exemple.com", "http://exemple.com"), site("other.org", "http://other.org")],
    );
    let mut recorder = Recorder::default();
    let summary = Reporter::new(options)
        .with_date("07 March 2012")
        .run(Some(&mut recorder))
        .unwrap();

    let data = out.join("data");
    assert_eq!(summary.files_written, vec![
        data.join("sites.json"),
        data.join("exemple.com.json"),
        data.join("other.org.json"),
    ]);
    assert_eq!(recorder.total, 2);
    assert_eq!(recorder.done.len(), 2);
    assert_eq!(recorder.done[0], ("exemple.com".to_string(), data.join("exemple.com.json")));
    assert!(recorder.finished);

    assert_eq!(read_json(&data.join("sites.json")), json!(["exemple.com", "other.org"]));

    let report = read_json(&data.join("exemple.com.json"));
    assert_eq!(report["url"], "http://exemple.com");
    assert_eq!(report["periods"], json!(["201202", "201201", "2012"]));
    assert_eq!(
        report["overview"]["2012"],
        json!({"hits": 14, "pages": 7, "bandwidth": 310, "visits": 3, "visitors": 3})
    );
    assert_eq!(
        report["overview"]["20120101"],
        json!({"hits": 5, "pages": 2, "bandwidth": 100, "visits": 1, "visitors": 0})
    );
    assert_eq!(report["top10"]["2012"], json!([
        {"url": "/a", "pages": 5, "bandwidth": 230},
        {"url": "/", "pages": 2, "bandwidth": 80},
    ]));
    assert_eq!(report["keywords"], json!({}));
    assert_eq!(report["downloads"], json!({}));

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("Last update: 07 March 2012"));
    assert!(out.join("assets/js/ui.js").is_file());
    assert!(!out.join(".backup").exists());
}

#[test]
fn site_without_files_gets_an_empty_report() {
    let tmp = tempfile::tempdir().unwrap();
    let stats = tmp.path().join("awstats");
    fs::create_dir(&stats).unwrap();
    let out = tmp.path().join("www");

    let options = AppOptions::new(&stats, &out, vec![site("quiet.net", "http://quiet.net")]);
    Reporter::new(options).with_date("today").run(Some(&mut NullProgress)).unwrap();

    let report = read_json(&out.join("data/quiet.net.json"));
    assert_eq!(report["periods"], json!([]));
    assert_eq!(report["overview"], json!({
        "all-time": {"hits": 0, "pages": 0, "bandwidth": 0, "visits": 0, "visitors": 0}
    }));
}

#[test]
fn failed_run_restores_previous_output() {
    let tmp = tempfile::tempdir().unwrap();
    let stats = tmp.path().join("awstats");
    let out = tmp.path().join("www");
    write(&out.join("index.html"), "previous run");
    write(&out.join("data/exemple.com.json"), "{}");
    write(&stats.join("awstats012012.exemple.com.txt"), "BEGIN_DAY 2\n20120101 1 1 1 1\n");

    let options = AppOptions::new(&stats, &out, vec![site("exemple.com", "http://exemple.com")]);
    let err = Reporter::new(options).run(None).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }), "{err}");

    assert_eq!(fs::read_to_string(out.join("index.html")).unwrap(), "previous run");
    assert_eq!(fs::read_to_string(out.join("data/exemple.com.json")).unwrap(), "{}");
    assert!(!out.join("assets").exists());
    assert!(!out.join(".backup").exists());
}

#[test]
fn second_run_replaces_first() {
    let tmp = tempfile::tempdir().unwrap();
    let stats = tmp.path().join("awstats");
    let out = tmp.path().join("www");
    write(&stats.join("awstats012012.a.txt"), &month_file(&["20120101 1 1 1 1"], 1, &["/ 1 1 1 1"]));

    let run = |sites: Vec<Site>| {
        Reporter::new(AppOptions::new(&stats, &out, sites)).with_date("x").run(None).unwrap()
    };
    run(vec![site("a", "http://a"), site("b", "http://b")]);
    assert!(out.join("data/b.json").is_file());

    run(vec![site("a", "http://a")]);
    assert!(!out.join("data/b.json").exists());
    assert_eq!(read_json(&out.join("data/sites.json")), json!(["a"]));
}

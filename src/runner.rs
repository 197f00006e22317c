// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    config::{consts::{DATA_DIR_NAME, SITES_FILE}, AppOptions, Site},
    error::Result,
    file,
    parser::Parser,
    progress::Progress,
    report::create_report,
    template,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

pub struct Reporter {
    options: AppOptions,
    today: String,
}

impl Reporter {
    pub fn new(options: AppOptions) -> Self {
        Self { options, today: template::today() }
    }

    /// Fix the "last update" date instead of using today's.
    pub fn with_date(mut self, today: impl Into<String>) -> Self {
        self.today = today.into();
        self
    }

    pub fn options(&self) -> &AppOptions {
        &self.options
    }

    pub fn data_dir(&self) -> PathBuf {
        self.options.out_dir.join(DATA_DIR_NAME)
    }

    /// Read statistics of every site and regenerate `out_dir`.
    ///
    /// On error the previous content of `out_dir` is restored.
    pub fn run(&self, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
        let out_dir = &self.options.out_dir;

        if let Some(p) = progress.as_deref_mut() {
            p.begin(self.options.sites.len());
        }
        let result = file::with_backup(out_dir, || {
            template::lay_down(out_dir)?;
            self.generate(progress.as_deref_mut().map(|p| p as &mut dyn Progress))
        });
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        result
    }

    fn generate(&self, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
        let out_dir = &self.options.out_dir;
        template::stamp_index(out_dir, &self.today)?;

        let mut written = Vec::with_capacity(1 + self.options.sites.len());

        let sites_json = self.data_dir().join(SITES_FILE);
        let ids: Vec<&str> = self.options.sites.iter().map(|s| s.id.as_str()).collect();
        file::write_json(&sites_json, &ids)?;
        written.push(sites_json);

        for site in &self.options.sites {
            logf!("Reading AWStats data for \"{}\"...", site.id);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Reading AWStats data for \"{}\"", site.id));
            }
            let path = self.write_site(site)?;
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&site.id, &path);
            }
            written.push(path);
        }

        Ok(RunSummary { files_written: written })
    }

    fn write_site(&self, site: &Site) -> Result<PathBuf> {
        let opts = &self.options;
        let mut parser = Parser::new();
        let data = parser.parse_dir(&site.id, &opts.awstats_dir, &opts.file_prefix, &opts.file_suffix)?;
        if data.is_empty() {
            logw!("No AWStats data found for \"{}\" in {}", site.id, opts.awstats_dir.display());
        }
        let report = create_report(data, &site.url)?;

        let path = site_json_path(&self.data_dir(), &site.id);
        logf!("Writing \"{}\"...", path.display());
        file::write_json(&path, &report)?;
        Ok(path)
    }
}

pub fn site_json_path(data_dir: &Path, site_id: &str) -> PathBuf {
    data_dir.join(format!("{site_id}.json"))
}

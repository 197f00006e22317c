// src/template.rs
//! Static front-end embedded in the binary and written to `out_dir`.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::config::consts::{DATA_DIR_NAME, LAST_UPDATE_FORMAT, LAST_UPDATE_VAR};
use crate::core::interpolate;
use crate::error::{IoContext, Result};

pub const INDEX_HTML: &str = "index.html";

/// Directories, parents first. Paths use `/`.
pub const DIRS: &[&str] = &["assets", "assets/css", "assets/js", DATA_DIR_NAME];

/// `(relative path, contents)`
pub const FILES: &[(&str, &[u8])] = &[
    ("assets/css/style.css", include_bytes!("../template/assets/css/style.css")),
    ("assets/js/ui.js", include_bytes!("../template/assets/js/ui.js")),
    (INDEX_HTML, include_bytes!("../template/index.html")),
];

/// Every path the template creates, directories with a trailing `/`.
pub fn structure() -> Vec<String> {
    DIRS.iter()
        .map(|d| format!("{d}/"))
        .chain(FILES.iter().map(|(f, _)| s!(*f)))
        .collect()
}

/// Create the template directories and files under `out_dir`.
pub fn lay_down(out_dir: &Path) -> Result<()> {
    for dir in DIRS {
        let path = out_dir.join(dir);
        fs::create_dir_all(&path).at(&path)?;
    }
    for (name, contents) in FILES {
        let path = out_dir.join(name);
        fs::write(&path, contents).at(&path)?;
    }
    Ok(())
}

/// Replace `${last_update}` in `index.html` with `today`.
pub fn stamp_index(out_dir: &Path, today: &str) -> Result<()> {
    let path = out_dir.join(INDEX_HTML);
    let content = fs::read_to_string(&path).at(&path)?;
    let content = interpolate(&content, &[(LAST_UPDATE_VAR, today)]);
    fs::write(&path, content).at(&path)
}

/// Today in the local time zone, e.g. `07 March 2012`.
pub fn today() -> String {
    Local::now().format(LAST_UPDATE_FORMAT).to_string()
}

// src/config/consts.rs

// Config file
pub const DEFAULT_CONFIG_FILE: &str = "awstatic.toml";
pub const CONFIG_SECTION: &str = "awstatic";

// AWStats input: <prefix><MMYYYY>.<site>.<suffix>
pub const DEFAULT_FILE_PREFIX: &str = "awstats";
pub const DEFAULT_FILE_SUFFIX: &str = "txt";

// Output layout
pub const BACKUP_DIR_NAME: &str = ".backup";
pub const DATA_DIR_NAME: &str = "data";
pub const SITES_FILE: &str = "sites.json";

// Ranked reports
pub const TOP_PAGES: usize = 10;
pub const TOP_DOWNLOADS: usize = 10;
pub const TOP_SEARCHES: usize = 30;

// index.html
pub const LAST_UPDATE_VAR: &str = "last_update";
pub const LAST_UPDATE_FORMAT: &str = "%d %B %Y";

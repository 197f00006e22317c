// src/file.rs
//! Output directory handling.
//!
//! A run replaces the whole content of `out_dir`. The previous content is
//! moved aside into `out_dir/.backup/` first, so a failed run can put it
//! back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::consts::BACKUP_DIR_NAME;
use crate::error::{Error, IoContext, Result};

pub fn backup_dir(out_dir: &Path) -> PathBuf {
    out_dir.join(BACKUP_DIR_NAME)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Config(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).at(dir)?;
    }
    Ok(())
}

/// Run `f` on a cleared `out_dir`, the previous content set aside.
///
/// On success the previous content is dropped. On any error, including
/// one while setting it aside, it is put back.
pub fn with_backup<T>(out_dir: &Path, f: impl FnOnce() -> Result<T>) -> Result<T> {
    match prepare_out_dir(out_dir).and_then(|()| f()) {
        Ok(value) => {
            drop_backup(out_dir)?;
            Ok(value)
        }
        Err(e) => {
            loge!("Run failed, restoring previous output: {e}");
            if let Err(restore) = restore_backup(out_dir) {
                loge!("Could not restore {}: {restore}", backup_dir(out_dir).display());
            }
            Err(e)
        }
    }
}

/// Move the previous run (if any) into `.backup/`, leaving `out_dir` empty.
///
/// An existing `.backup/` means the last run did not complete and could
/// not be restored: it is kept as-is and the rest of `out_dir` is
/// discarded.
pub fn prepare_out_dir(out_dir: &Path) -> Result<()> {
    let backup = backup_dir(out_dir);

    if !out_dir.exists() {
        logd!("Creating {}", out_dir.display());
        fs::create_dir(out_dir).at(out_dir)
    } else if !backup.exists() {
        logd!("Backing up {} into {}", out_dir.display(), backup.display());
        fs::create_dir(&backup).at(&backup)?;
        for path in entries_except_backup(out_dir)? {
            let target = backup.join(file_name(&path));
            fs::rename(&path, &target).at(&path)?;
        }
        Ok(())
    } else {
        logw!("{} already exists; keeping it and discarding the rest of {}",
              backup.display(), out_dir.display());
        clear_except_backup(out_dir)
    }
}

/// The run went fine: forget the previous one.
pub fn drop_backup(out_dir: &Path) -> Result<()> {
    let backup = backup_dir(out_dir);
    if backup.exists() {
        fs::remove_dir_all(&backup).at(&backup)?;
    }
    Ok(())
}

/// The run failed: put the previous content back.
/// Without a backup (first run), the partial output stays.
pub fn restore_backup(out_dir: &Path) -> Result<()> {
    let backup = backup_dir(out_dir);
    if !backup.is_dir() {
        return Ok(());
    }
    clear_except_backup(out_dir)?;
    for entry in fs::read_dir(&backup).at(&backup)? {
        let path = entry.at(&backup)?.path();
        let target = out_dir.join(file_name(&path));
        fs::rename(&path, &target).at(&path)?;
    }
    fs::remove_dir(&backup).at(&backup)
}

/// Write `value` as compact JSON.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }
    let json = serde_json::to_vec(value)
        .map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
    fs::write(path, json).at(path)
}

fn entries_except_backup(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).at(dir)? {
        let entry = entry.at(dir)?;
        if entry.file_name() != BACKUP_DIR_NAME {
            out.push(entry.path());
        }
    }
    Ok(out)
}

fn clear_except_backup(dir: &Path) -> Result<()> {
    for path in entries_except_backup(dir)? {
        let meta = fs::symlink_metadata(&path).at(&path)?;
        if meta.is_dir() {
            fs::remove_dir_all(&path).at(&path)?;
        } else {
            fs::remove_file(&path).at(&path)?;
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> &std::ffi::OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}

// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{consts::DEFAULT_OUT_FILE, options::ExportOptions};
use crate::error::ScrapeError;
use crate::model::HideoutZone;

/// Serialize `zones` and write them to the path implied by `export`.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, zones: &[HideoutZone]) -> Result<PathBuf, ScrapeError> {
    let path = resolve_out_path(&export.out_path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_json_string(zones, export.pretty)?;
    fs::write(&path, contents).map_err(|e| ScrapeError::io(&path, e))?;
    logf!("Wrote {} zones to {}", zones.len(), path.display());
    Ok(path)
}

/// JSON array of zones. Non-ASCII stays literal; pretty output uses 2-space indent.
pub fn to_json_string(zones: &[HideoutZone], pretty: bool) -> Result<String, ScrapeError> {
    let s = if pretty {
        serde_json::to_string_pretty(zones)?
    } else {
        serde_json::to_string(zones)?
    };
    Ok(s)
}

/// Read a previously written export back.
pub fn read_export(path: &Path) -> Result<Vec<HideoutZone>, ScrapeError> {
    let text = fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// A directory (existing, or hinted by a trailing separator) gets the default file name.
pub fn resolve_out_path(hint: &Path) -> Result<PathBuf, ScrapeError> {
    if hint.as_os_str().is_empty() {
        return Ok(PathBuf::from(DEFAULT_OUT_FILE));
    }
    if looks_like_dir_hint(hint) || hint.is_dir() {
        ensure_directory(hint)?;
        Ok(hint.join(DEFAULT_OUT_FILE))
    } else {
        Ok(hint.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(ScrapeError::io(dir, e));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(|e| ScrapeError::io(dir, e))?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

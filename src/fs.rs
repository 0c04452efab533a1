use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

pub fn mkdirp<P>(path: &P) -> Result<()>
where
    P: AsRef<Path>,
{
    fs::create_dir_all(path.as_ref()).map_err(|inner| Error::AccessError {
        inner,
        path: path.as_ref().to_owned(),
    })?;
    Ok(())
}

/// Writes `data` as pretty-printed JSON, creating the parent directory if needed
pub fn save<D>(data: &D, path: &Path) -> Result<()>
where
    D: Serialize,
{
    let buf = serde_json::to_string_pretty(&data).map_err(|inner| Error::SerdeError {
        path: path.to_owned(),
        inner,
    })?;
    save_string(&buf, path)
}

pub fn save_string(data: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        mkdirp(&parent)?;
    }

    File::create(path)
        .and_then(|mut f| f.write_all(data.as_bytes()))
        .map_err(|inner| Error::AccessError {
            inner,
            path: path.to_owned(),
        })?;

    Ok(())
}

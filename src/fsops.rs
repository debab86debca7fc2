//! Directory and file glue consumed by the shell.
//!
//! Nothing here parses table content; these are the plain filesystem
//! operations the store's callers need around it: workspace directories,
//! empty table files, renames, and raw content dumps.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::common::error::StoreError;

/// Directory names must start with an alphabetic character.
pub fn is_valid_dir_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Creates a directory, parents included.
///
/// Returns `false` without touching anything when the directory already
/// exists.
pub fn create_dir(path: &Path) -> Result<bool, StoreError> {
    if path.exists() {
        return Ok(false);
    }

    fs::create_dir_all(path)?;
    Ok(true)
}

/// Renames a directory in place, keeping its parent.
pub fn rename_dir(path: &Path, new_name: &str) -> Result<PathBuf, StoreError> {
    if !path.exists() {
        return Err(StoreError::DirNotFound(path.display().to_string()));
    }
    if !is_valid_dir_name(new_name) {
        return Err(StoreError::InvalidName(new_name.to_string()));
    }

    let new_path = path.parent().unwrap_or(Path::new("")).join(new_name);
    fs::rename(path, &new_path)?;
    Ok(new_path)
}

/// Removes a directory and everything under it.
pub fn delete_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() {
        return Err(StoreError::DirNotFound(path.display().to_string()));
    }

    fs::remove_dir_all(path)?;
    Ok(())
}

/// Lists the entry names of a directory, sorted.
pub fn list_dir(path: &Path) -> Result<Vec<String>, StoreError> {
    if !path.exists() {
        return Err(StoreError::DirNotFound(path.display().to_string()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        entries.push(entry.file_name().to_string_lossy().into_owned());
    }
    entries.sort();

    Ok(entries)
}

/// Creates an empty `<table>.csv` file and returns its path.
pub fn create_table_file(dir: &Path, table: &str) -> Result<PathBuf, StoreError> {
    let path = dir.join(format!("{table}.csv"));
    fs::write(&path, "")?;
    Ok(path)
}

/// Renames a file within its directory, carrying the old extension over to
/// the new name.
pub fn rename_file(dir: &Path, old_name: &str, new_name: &str) -> Result<PathBuf, StoreError> {
    let old_path = dir.join(old_name);
    if !old_path.exists() {
        return Err(StoreError::TableNotFound(old_name.to_string()));
    }

    let new_file = match old_path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{new_name}.{ext}"),
        None => new_name.to_string(),
    };
    let new_path = dir.join(new_file);
    fs::rename(&old_path, &new_path)?;
    Ok(new_path)
}

/// Raw content dump of a file, no parsing.
pub fn read_file_content(path: &Path) -> Result<String, StoreError> {
    Ok(fs::read_to_string(path)?)
}

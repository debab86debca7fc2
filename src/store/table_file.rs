use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{common::error::StoreError, store::codec, store::row::Row};

/// Parsed content of one table file.
#[derive(Debug, Default, PartialEq)]
pub struct TableData {
    /// Column names from the first line, real or synthetic.
    pub header: Vec<String>,

    /// Data rows in on-disk order.
    pub rows: Vec<Row>,
}

/// Reads and parses the full content of a table file.
///
/// The first non-blank line is the header; every following non-blank line
/// is a data row. An empty file parses to an empty header and no rows.
/// Fails with [`StoreError::TableNotFound`] when the file does not exist.
pub(crate) fn read_all(path: &Path) -> Result<TableData, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(StoreError::TableNotFound(table_name(path)));
        }
        Err(err) => return Err(err.into()),
    };

    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next().map(codec::decode).unwrap_or_default();
    let rows = lines.map(|line| Row::new(codec::decode(line))).collect();

    Ok(TableData { header, rows })
}

/// Rewrites the whole table: header line, then one line per row.
///
/// The content goes to a sibling `.tmp` file first and is renamed over the
/// original, so a crash mid-write cannot leave a half-written table behind.
pub(crate) fn write_all(path: &Path, header: &[String], rows: &[Row]) -> Result<(), StoreError> {
    let mut content = String::new();
    content.push_str(&codec::encode(header));
    content.push('\n');
    for row in rows {
        content.push_str(&codec::encode(&row.fields));
        content.push('\n');
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, &content)?;
    if let Err(err) = fs::rename(&tmp, path) {
        fs::remove_file(&tmp).ok();
        return Err(err.into());
    }

    Ok(())
}

/// Appends one line, creating the file first if it does not exist.
pub(crate) fn append_line(path: &Path, line: &str) -> Result<(), StoreError> {
    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn table_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        Row::new(fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_read_all_missing_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let result = read_all(&dir.path().join("users.csv"));

        assert!(matches!(result, Err(StoreError::TableNotFound(name)) if name == "users"));
    }

    #[test]
    fn test_read_all_empty_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("users.csv");
        fs::write(&path, "").expect("Should write file");

        let data = read_all(&path).expect("Should read empty file");
        assert!(data.header.is_empty());
        assert!(data.rows.is_empty());
    }

    #[test]
    fn test_read_all_skips_blank_lines() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("users.csv");
        fs::write(&path, "id,name\n\n1,alice\n\n").expect("Should write file");

        let data = read_all(&path).expect("Should read file");
        assert_eq!(data.header, vec!["id", "name"]);
        assert_eq!(data.rows, vec![row(&["1", "alice"])]);
    }

    #[test]
    fn test_write_all_then_read_all_round_trips() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("users.csv");

        let header = vec!["id".to_string(), "name".to_string()];
        let rows = vec![row(&["1", "alice"]), row(&["2", "bob"])];
        write_all(&path, &header, &rows).expect("Should write table");

        let data = read_all(&path).expect("Should read table");
        assert_eq!(data.header, header);
        assert_eq!(data.rows, rows);
    }

    #[test]
    fn test_write_all_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("users.csv");

        write_all(&path, &["id".to_string()], &[]).expect("Should write table");

        let entries: Vec<_> = fs::read_dir(dir.path())
            .expect("Should list dir")
            .map(|e| e.expect("Should read entry").file_name())
            .collect();
        assert_eq!(entries, vec!["users.csv"]);
    }

    #[test]
    fn test_append_line_creates_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("users.csv");

        append_line(&path, "id,name").expect("Should append header");
        append_line(&path, "1,alice").expect("Should append row");

        let content = fs::read_to_string(&path).expect("Should read file");
        assert_eq!(content, "id,name\n1,alice\n");
    }
}

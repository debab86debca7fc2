use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::common::error::StoreError;

pub(crate) mod codec;
pub(crate) mod key;
pub mod row;
pub mod table_file;

use row::Row;
use table_file::TableData;

/// The main record store handle.
///
/// `RecordStore` manages the table files inside one data directory. Each
/// table is a single `<name>.csv` file: a header line followed by one
/// comma-delimited line per record, first field the primary key.
///
/// No table state is cached between calls. Every operation re-reads the
/// file it touches, mutates an in-memory representation, and writes back,
/// so the file stays the single source of truth.
pub struct RecordStore {
    /// Directory holding one `<table>.csv` file per table.
    data_directory: PathBuf,
}

impl RecordStore {
    /// Creates a store over the given data directory.
    ///
    /// The directory is not created here; operations on a missing directory
    /// surface the underlying I/O failure.
    pub fn new<P: AsRef<Path>>(data_directory: P) -> Self {
        Self {
            data_directory: data_directory.as_ref().to_path_buf(),
        }
    }

    /// Checks if a table file exists in the data directory.
    pub fn table_exists(&self, table: &str) -> bool {
        self.table_path(table).exists()
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.data_directory.join(format!("{table}.csv"))
    }

    /// Appends a header line of the given column names to the table file,
    /// creating the file if absent.
    ///
    /// Column names are trimmed before encoding. Existing content is NOT
    /// checked: calling this on a table that already has a header (or rows)
    /// appends a second header-shaped line. Callers should pick one creation
    /// path per table, schema-first or insert-first, and stick with it.
    pub fn create_schema(&self, table: &str, columns: &[String]) -> Result<(), StoreError> {
        let trimmed: Vec<&str> = columns.iter().map(|column| column.trim()).collect();
        table_file::append_line(&self.table_path(table), &codec::encode(&trimmed))
    }

    /// Inserts a record and returns its generated primary key.
    ///
    /// Values are trimmed before encoding. If the table file does not exist
    /// yet, a synthetic header is written first: `id` followed by the
    /// supplied values standing in as placeholder column names. The header
    /// is synthetic, not a real schema.
    ///
    /// Keys are always freshly generated, so duplicate values never fail.
    pub fn insert(&self, table: &str, values: &[String]) -> Result<u64, StoreError> {
        let path = self.table_path(table);
        let trimmed: Vec<String> = values.iter().map(|value| value.trim().to_string()).collect();

        if !path.exists() {
            let mut header = vec!["id".to_string()];
            header.extend(trimmed.iter().cloned());
            table_file::append_line(&path, &codec::encode(&header))?;
        }

        let data = table_file::read_all(&path)?;
        let next = key::next_key(&data.rows);

        let mut fields = vec![next.to_string()];
        fields.extend(trimmed);
        table_file::append_line(&path, &codec::encode(&fields))?;

        Ok(next)
    }

    /// Finds the record whose key field equals `key`.
    ///
    /// The comparison is on the literal string form: `"01"` and `"1"` are
    /// different keys here even though key generation treats them as the
    /// same integer.
    pub fn read_by_key(&self, table: &str, key: &str) -> Result<Row, StoreError> {
        let data = table_file::read_all(&self.table_path(table))?;

        data.rows
            .into_iter()
            .find(|row| row.key() == Some(key))
            .ok_or_else(|| StoreError::RecordNotFound(key.to_string()))
    }

    /// Replaces the matching record's values, keeping its key field, and
    /// rewrites the whole table file.
    pub fn update_by_key(
        &self,
        table: &str,
        key: &str,
        new_values: &[String],
    ) -> Result<(), StoreError> {
        let path = self.table_path(table);
        let mut data = table_file::read_all(&path)?;

        let row = data
            .rows
            .iter_mut()
            .find(|row| row.key() == Some(key))
            .ok_or_else(|| StoreError::RecordNotFound(key.to_string()))?;

        let mut fields = vec![key.to_string()];
        fields.extend(new_values.iter().map(|value| value.trim().to_string()));
        *row = Row::new(fields);

        table_file::write_all(&path, &data.header, &data.rows)
    }

    /// Removes every record whose key field starts with `prefix` and
    /// returns how many were removed.
    ///
    /// This is a single-character match against the first character of the
    /// key field, not a true string-prefix test. Zero matches is a
    /// successful no-op reporting zero deletions.
    pub fn delete_by_key_prefix(&self, table: &str, prefix: char) -> Result<usize, StoreError> {
        let path = self.table_path(table);
        let TableData { header, rows } = table_file::read_all(&path)?;

        let before = rows.len();
        let remaining: Vec<Row> = rows
            .into_iter()
            .filter(|row| row.key().and_then(|field| field.chars().next()) != Some(prefix))
            .collect();

        let removed = before - remaining.len();
        if removed > 0 {
            table_file::write_all(&path, &header, &remaining)?;
        }

        Ok(removed)
    }

    /// Reads the full table, header and rows, for display.
    pub fn dump_table(&self, table: &str) -> Result<TableData, StoreError> {
        table_file::read_all(&self.table_path(table))
    }

    /// Removes the table file entirely.
    pub fn drop_table(&self, table: &str) -> Result<(), StoreError> {
        if !self.table_exists(table) {
            return Err(StoreError::TableNotFound(table.to_string()));
        }

        fs::remove_file(self.table_path(table))?;
        Ok(())
    }
}

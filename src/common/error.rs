use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("Table not found: {0}")]
    TableNotFound(String),
    #[error("Record not found: {0}")]
    RecordNotFound(String),
    #[error("Directory not found: {0}")]
    DirNotFound(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

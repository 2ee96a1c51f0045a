use std::io;

use sortable_table::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of records")]
    NotAnArray,

    #[error("record {0} is not a JSON object")]
    NotAnObject(usize),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, DemoError>;

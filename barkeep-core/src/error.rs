use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: expected 6 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
}

//! Error types raised while computing or writing stat tables.

use std::path::PathBuf;

use thiserror::Error;

use crate::mechanics::StatVector;

#[derive(Debug, Error)]
pub enum StatTableError {
    #[error(
        "end budget is zero: start stats {start:?} and end stats {end:?} leave no points to distribute"
    )]
    DegenerateBudget { start: StatVector, end: StatVector },

    #[error("{what} is not a finite number")]
    NonFiniteInput { what: String },

    #[error("polynomial curve needs at least one coefficient")]
    EmptyPolynomial,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stats CSV {path}: line {line}: {reason}")]
    MalformedCsv {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, StatTableError>;

//! The module contains the errors the engine can throw.
//!
//! Every error is a load fault: once a [`TransactionStore`] exists, queries
//! over it cannot fail.
//!
//! - [`MissingSource`] thrown when an engine is built without transactions.
//! - [`Io`] thrown when the data source cannot be read.
//! - [`Json`] thrown when the data source is not a valid array of records.
//! - [`Load`] wraps one of the above with the path of the file being loaded.
//!
//!  [`MissingSource`]: EngineError::MissingSource
//!  [`Io`]: EngineError::Io
//!  [`Json`]: EngineError::Json
//!  [`Load`]: EngineError::Load
//!  [`TransactionStore`]: crate::TransactionStore
use std::path::PathBuf;

use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("no transaction source configured")]
    MissingSource,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed transactions: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to load transactions from \"{}\": {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    pub(crate) fn at(path: impl Into<PathBuf>, source: EngineError) -> Self {
        Self::Load {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

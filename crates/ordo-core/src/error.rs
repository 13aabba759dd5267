//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrdoError {
    #[error("CONFIG/{0}")]
    Config(String),

    #[error("IO/{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("RECORD/{0}")]
    InvalidRecord(String),
}

//! Query errors
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("QUERY/ORDER_BY: {0}")]
    InvalidOrderBy(String),
}

//! FILENAME: session/src/error.rs

use thiserror::Error;

use persistence::PersistenceError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Dataset contains no rows")]
    EmptyDataset,

    #[error("Dataset contains no parseable order dates")]
    NoOrderDates,
}

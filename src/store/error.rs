use thiserror::Error;

use crate::models::{ItemId, ListKind};

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    /// The id was removed earlier or never existed in this list.
    #[error("{kind} item {id} not found")]
    ItemNotFound { kind: ListKind, id: ItemId },
}

pub type Result<T> = std::result::Result<T, StoreError>;

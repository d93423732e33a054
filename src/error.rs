//! Error types for wikifmt operations.

use thiserror::Error;

/// Errors that can occur while resolving links or converting files.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid link map: {0}")]
    InvalidLinkMap(String),

    #[error("unresolved link: {0}")]
    UnresolvedLink(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// errors.rs
use thiserror::Error;

use crate::config::ConfigError;
use crate::listings::CatalogError;

/// Errors surfaced by request handling.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

/// Errors that stop the server from starting.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

use thiserror::Error;
use timepage_core::CatalogError;

/// Errors that stop the server from starting or keep running.
///
/// Serving a page has no error path of its own; everything here happens at
/// startup or at the socket level.
#[derive(Debug, Error)]
pub enum TimepageError {
    #[error("Invalid format catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

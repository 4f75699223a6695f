use thiserror::Error;

/// Persistence-layer failures: the backing medium is unavailable or the
/// payload could not be written/serialized.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors surfaced by catalog mutations. All variants are expected
/// conditions the caller recovers from; none is fatal.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required field was missing or empty after trimming.
    #[error("{field} is required")]
    Validation { field: &'static str },

    /// An update or delete referenced an id absent from the catalog.
    #[error("no book with id {id}")]
    NotFound { id: i64 },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

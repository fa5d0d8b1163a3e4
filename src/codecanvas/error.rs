use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Item not found: {0}")]
    ItemNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid import document: {0}")]
    InvalidImport(String),

    #[error("Import rejected: item id {0} already exists")]
    IdCollision(i64),

    #[error("{0}")]
    Validation(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CanvasError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book with id {0} not found")]
    BookNotFound(u32),

    #[error("Invalid status '{0}'. Use 'available' or 'checked-out'")]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;

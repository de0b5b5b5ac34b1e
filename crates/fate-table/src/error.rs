//! Error types for table operations.

use fate_core::{CharacterId, CoreError};

/// Alias for `Result<T, TableError>`.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur when operating on a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The referenced character is not in the room.
    #[error("character not found: {0}")]
    CharacterNotFound(CharacterId),

    /// No character in the room has the given name.
    #[error("no character named \"{0}\"")]
    NoCharacterNamed(String),

    /// A sheet-level mutation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing a document failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be serialized or parsed.
    #[error("document error: {0}")]
    Json(#[from] serde_json::Error),

    /// An uploaded portrait could not be decoded or re-encoded.
    #[error("portrait error: {0}")]
    Portrait(#[from] image::ImageError),
}

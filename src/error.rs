use thiserror::Error;

#[derive(Error, Debug)]
pub enum DreyError {
    /// Update/delete was asked for an id that is not in the store. The HTTP
    /// layer never reaches this: it checks existence first and answers 404.
    #[error("Squirrel not found: {0}")]
    SquirrelNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, DreyError>;

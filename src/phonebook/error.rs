use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Field {0} is not a string")]
    FieldType(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Malformed storage at {location}: {reason}")]
    StorageFormat { location: String, reason: String },

    #[error("Could not write {location}: {source}")]
    StorageWrite {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;

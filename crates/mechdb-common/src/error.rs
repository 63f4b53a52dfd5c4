use thiserror::Error;

#[derive(Debug, Error)]
pub enum MechdbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid section name: {0}")]
    InvalidSection(String),

    #[error("Unknown subsection: {0}")]
    UnknownSubsection(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    #[error("Database load error: {0}")]
    Load(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MechdbError>;

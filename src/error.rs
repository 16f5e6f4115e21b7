use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteMapError {
    #[error("No notemap data directory found. Run 'notemap init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove the data directory to reinitialize.")]
    AlreadyInitialized,

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Stored notes are corrupt: {0}")]
    CorruptState(String),

    #[error("Failed to write to storage: {0}")]
    StorageWrite(String),

    #[error("Unsupported notes schema version {found} (this build reads up to {supported})")]
    UnsupportedSchemaVersion { found: u32, supported: u32 },

    #[error("Invalid note: {0}")]
    InvalidNote(String),

    #[error("{0}")]
    Usage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, NoteMapError>;

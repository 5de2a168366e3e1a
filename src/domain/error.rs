use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("transport: {0}")]
    Transport(String),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("field is read-only: {0}")]
    ReadOnlyField(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("no such row: {0}")]
    NoSuchRow(usize),

    #[error("config: {0}")]
    Config(String),
}

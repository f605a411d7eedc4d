use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("Unparseable cookie store id: {0}")]
    InvalidStoreId(String),

    #[error("Contextual identities capability is unavailable")]
    CapabilityUnavailable,

    #[error("Host error: {0}")]
    Host(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ContainerError>;

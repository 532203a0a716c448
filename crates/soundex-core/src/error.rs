use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoundexError {
    #[error("Group specification is empty")]
    EmptyGroupSpec,
    #[error("Group {index} is empty")]
    EmptyGroup { index: usize },
    #[error("Group {index} ('{symbol}') has no member characters")]
    MissingMembers { index: usize, symbol: char },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SoundexError>;

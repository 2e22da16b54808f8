use thiserror::Error;

#[derive(Error, Debug)]
pub enum StormwatchError {
    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Reference table error: {0}")]
    Reference(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown state abbreviation: {0}")]
    UnknownState(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

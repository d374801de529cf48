use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No cheatsheet found for '{0}'.")]
    NotFound(String),

    #[error("No writable cheatpath found (needed to edit '{0}').")]
    NoWritableLayer(String),

    #[error("Invalid cheatsheet name: {0}")]
    InvalidName(String),

    #[error("{0}")]
    Usage(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CheatError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqBotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Knowledge base error: {0}")]
    Knowledge(String),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, FaqBotError>;

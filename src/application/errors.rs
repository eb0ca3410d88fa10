//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Reply delivery failed: {0}")]
    ReplyDeliver(String),
}

/// Horoscope fetch pipeline errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Unexpected response status: {0}")]
    Api(String),

    #[error("Response decode failed: {0}")]
    Decode(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

use thiserror::Error;

/// Usage line printed when the command line cannot be understood
pub const USAGE: &str =
    "Usage: mdview <filename>.md or <GitHub raw link> [word_limit] [--html [word_limit]]";

/// mdview error types
#[derive(Error, Debug)]
pub enum MdviewError {
    #[error("File {0} not found.")]
    NotFound(String),

    #[error("Error fetching file: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("{}", USAGE)]
    Usage,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for mdview operations
pub type Result<T> = std::result::Result<T, MdviewError>;

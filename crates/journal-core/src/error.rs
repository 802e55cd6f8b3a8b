use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for JournalError {
    fn from(err: toml::de::Error) -> Self {
        JournalError::Config(err.to_string())
    }
}

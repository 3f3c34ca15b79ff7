use thiserror::Error;

#[derive(Error, Debug)]
pub enum JPackError {
    #[error("Invalid JSON input: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, JPackError>;

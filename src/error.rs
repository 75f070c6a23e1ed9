use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GpError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GpError>;

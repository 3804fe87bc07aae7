use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AcoError {
    InvalidInstance(String),
    InvalidParams(String),
    NotInitialized,
}

impl fmt::Display for AcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInstance(msg) => write!(f, "Invalid problem instance: {}", msg),
            Self::InvalidParams(msg) => write!(f, "Invalid algorithm parameters: {}", msg),
            Self::NotInitialized => write!(f, "Algorithm has not been initialized."),
        }
    }
}

impl Error for AcoError {}

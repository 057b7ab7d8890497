use std::fmt::{self, Display};

/// Errors produced by model parsing and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownAction(String),
    EmptyPayload(&'static str),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownAction(token) => {
                write!(f, "unknown chat action token: {token:?}")
            }
            ModelError::EmptyPayload(prefix) => {
                write!(f, "chat action {prefix} requires a payload")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;

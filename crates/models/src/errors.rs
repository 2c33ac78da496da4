use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ModelError {
    pub fn missing(field: &str) -> Self { Self::Validation(format!("{field} is required")) }
    pub fn empty(field: &str) -> Self { Self::Validation(format!("{field} must not be empty")) }
}

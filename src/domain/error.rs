use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Forecast error: {0}")]
    Forecast(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Migration failures surface as plain strings.
impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Database(s)
    }
}

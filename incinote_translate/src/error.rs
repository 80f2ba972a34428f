use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranslateError>;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid glossary: {0}")]
    Glossary(#[from] regex::Error),

    #[error("Invalid translation endpoint: {0}")]
    Endpoint(String),
}

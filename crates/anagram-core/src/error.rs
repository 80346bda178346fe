#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Word list not found: {0}")]
    FileNotFound(String),

    #[error("Word list is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

//! Application error type for the fallible edges (config loading, asset serving).

pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid asset path: {0}")]
    AssetPath(String),

    #[error("unsatisfiable range: {0}")]
    Range(String),
}

impl AppError {
    pub fn asset_path(msg: impl Into<String>) -> Self {
        Self::AssetPath(msg.into())
    }

    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_range_message() {
        let err = AppError::range("bytes=9-1");
        assert_eq!(err.to_string(), "unsatisfiable range: bytes=9-1");
    }
}

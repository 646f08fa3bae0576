use thiserror::Error;

/// Main error type for the viewer.
/// Aggregates errors from the standard library and internal modules.
#[derive(Error, Debug)]
pub enum EddyViewError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Ingestion module errors
    #[error("{0}")]
    IngestError(#[from] crate::ingest::IngestError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, EddyViewError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| EddyViewError::WithContextError(format!("{}: {}", message, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_prefix() {
        let result: Result<(), EddyViewError> =
            Err(crate::ingest::IngestError::Encoding.into()).with_prefix("Pass failed");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Pass failed: no supported text encoding could decode the file"
        );
    }
}

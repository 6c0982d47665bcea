use thiserror::Error;

/// Error type for report-generation operations.
#[derive(Debug, Error)]
pub enum BenchReportError {
    #[error("read error: {0}")]
    ReadError(String),
    #[error("write error: {0}")]
    WriteError(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl BenchReportError {
    pub fn read<T: Into<String>>(msg: T) -> Self {
        BenchReportError::ReadError(msg.into())
    }

    pub fn write<T: Into<String>>(msg: T) -> Self {
        BenchReportError::WriteError(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        BenchReportError::InvalidInput(msg.into())
    }
}

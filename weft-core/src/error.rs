use thiserror::Error;

/// Errors raised by the dialect layer itself, independent of the wire.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialectError {
    /// Reverse type lookup found a wire type the dialect does not map.
    #[error("Unsupported column type `{0}`")]
    UnsupportedType(String),
    /// A codec received a value it cannot convert.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
    /// The query tree cannot be rendered by the dialect.
    #[error("Compilation error: {0}")]
    Compilation(String),
}

impl DialectError {
    pub fn compilation(message: impl Into<String>) -> Self {
        Self::Compilation(message.into())
    }
}

/// Error defined by the ODBC driver, carrying the SQLSTATE-like code as its first argument.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("[{code}] {message}")]
pub struct DriverError {
    pub code: String,
    pub message: String,
}

impl DriverError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

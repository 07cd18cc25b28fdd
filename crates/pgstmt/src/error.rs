//! Error types for pgstmt

use thiserror::Error;

/// Result type alias for pgstmt operations
pub type StmtResult<T> = Result<T, StmtError>;

/// Error types for statement text assembly
#[derive(Debug, Error)]
pub enum StmtError {
    /// The session could not supply a quoting capability
    #[error("Acquire error: {0}")]
    Acquire(String),

    /// A string could not be quoted as an identifier for the active dialect
    #[error("Identifier quoting error: {0}")]
    QuoteIdent(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl StmtError {
    /// Create an acquisition error
    pub fn acquire(message: impl Into<String>) -> Self {
        Self::Acquire(message.into())
    }

    /// Create an identifier quoting error
    pub fn quote_ident(message: impl Into<String>) -> Self {
        Self::QuoteIdent(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is an acquisition error
    pub fn is_acquire(&self) -> bool {
        matches!(self, Self::Acquire(_))
    }

    /// Check if this is an identifier quoting error
    pub fn is_quote_ident(&self) -> bool {
        matches!(self, Self::QuoteIdent(_))
    }
}

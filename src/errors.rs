//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all failure modes.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure, including an
    /// unrecognized transport selection.
    Config(String),
    /// A handler name is already taken within its registry namespace.
    DuplicateName(String),
    /// Requested handler does not exist in the registry.
    NotFound(String),
    /// Handler input failed schema validation.
    Validation(String),
    /// MCP protocol or transport failure surfaced by the SDK.
    Mcp(String),
    /// File-system or I/O operation failure.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::DuplicateName(msg) => write!(f, "duplicate name: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
            Self::Mcp(msg) => write!(f, "mcp: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<AppError> for rmcp::ErrorData {
    fn from(err: AppError) -> Self {
        match &err {
            AppError::NotFound(_) | AppError::Validation(_) => {
                Self::invalid_params(err.to_string(), None)
            }
            _ => Self::internal_error(err.to_string(), None),
        }
    }
}

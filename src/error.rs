//! Crate-level error types.

use std::fmt;

use crate::gpu::context::ContextError;

/// Errors produced by the orbview crate.
#[derive(Debug)]
pub enum OrbviewError {
    /// GPU context initialization failure.
    Gpu(ContextError),
    /// Invalid configuration rejected at startup.
    Config(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Viewer window/event-loop failure.
    Viewer(String),
}

impl fmt::Display for OrbviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for OrbviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for OrbviewError {
    fn from(e: ContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for OrbviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

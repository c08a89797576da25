#![forbid(unsafe_code)]

//! Harness error type.

use std::fmt;

use cliprail::LayoutError;

/// Everything that can stop a scenario replay.
#[derive(Debug)]
pub enum HarnessError {
    /// Reading the scenario or writing the trace failed.
    Io(std::io::Error),
    /// The scenario was not valid JSON for the expected shape.
    Json(serde_json::Error),
    /// The scenario's items could not form a layout.
    Layout(LayoutError),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "invalid scenario: {err}"),
            Self::Layout(err) => write!(f, "invalid layout: {err}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for HarnessError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<LayoutError> for HarnessError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

/// Standard result type for harness APIs.
pub type Result<T> = std::result::Result<T, HarnessError>;

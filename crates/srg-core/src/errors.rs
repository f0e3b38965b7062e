//! Structured error types shared across SRG crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SrgError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (labels, sizes, row indices, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the workbench.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SrgError {
    /// Malformed builder input (dimensions, rows, labels, encodings).
    #[error("invalid input: {0}")]
    InvalidInput(ErrorInfo),
    /// A selected input representation lacks one of its required fields.
    #[error("missing input: {0}")]
    MissingInput(ErrorInfo),
    /// Structural lookups against a materialised graph.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SrgError {
    /// Shorthand for an [`SrgError::InvalidInput`] with a fresh payload.
    pub fn invalid_input(code: impl Into<String>, message: impl Into<String>) -> Self {
        SrgError::InvalidInput(ErrorInfo::new(code, message))
    }

    /// Shorthand for an [`SrgError::MissingInput`] with a fresh payload.
    pub fn missing_input(code: impl Into<String>, message: impl Into<String>) -> Self {
        SrgError::MissingInput(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SrgError::InvalidInput(info)
            | SrgError::MissingInput(info)
            | SrgError::Graph(info)
            | SrgError::Serde(info) => info,
        }
    }

    /// Adds a context entry to the payload regardless of the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            SrgError::InvalidInput(info) => SrgError::InvalidInput(info.with_context(key, value)),
            SrgError::MissingInput(info) => SrgError::MissingInput(info.with_context(key, value)),
            SrgError::Graph(info) => SrgError::Graph(info.with_context(key, value)),
            SrgError::Serde(info) => SrgError::Serde(info.with_context(key, value)),
        }
    }

    /// Attaches a remediation hint regardless of the error family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            SrgError::InvalidInput(info) => SrgError::InvalidInput(info.with_hint(hint)),
            SrgError::MissingInput(info) => SrgError::MissingInput(info.with_hint(hint)),
            SrgError::Graph(info) => SrgError::Graph(info.with_hint(hint)),
            SrgError::Serde(info) => SrgError::Serde(info.with_hint(hint)),
        }
    }
}

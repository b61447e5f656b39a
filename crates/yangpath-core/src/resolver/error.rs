//! Resolution error types.
//!
//! Callers see a single failure kind, "no such file". The attempts behind it
//! are kept as diagnostics for error reports.

use serde::Serialize;
use thiserror::Error;

use crate::ports::FileReadError;

/// Why a single candidate could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum ReadOutcome {
    NotFound,
    PermissionDenied,
    Io(String),
}

impl From<&FileReadError> for ReadOutcome {
    fn from(err: &FileReadError) -> Self {
        match err {
            FileReadError::NotFound { .. } => Self::NotFound,
            FileReadError::PermissionDenied { .. } => Self::PermissionDenied,
            FileReadError::Io { reason, .. } => Self::Io(reason.clone()),
        }
    }
}

impl std::fmt::Display for ReadOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::Io(reason) => write!(f, "{reason}"),
        }
    }
}

/// A single candidate tried during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolutionAttempt {
    /// The candidate file name that was read.
    pub candidate: String,
    /// What the read returned.
    pub outcome: ReadOutcome,
}

/// Errors returned by [`crate::ModuleResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No candidate for the reference could be read.
    ///
    /// `reference` is the reference as the caller wrote it, before
    /// extension inference.
    #[error("no such file: {reference}")]
    NoSuchFile {
        reference: String,
        attempts: Vec<ResolutionAttempt>,
    },
}

impl ResolveError {
    /// The reference that failed to resolve.
    pub fn reference(&self) -> &str {
        match self {
            Self::NoSuchFile { reference, .. } => reference,
        }
    }

    /// Every candidate tried, in order.
    pub fn attempts(&self) -> &[ResolutionAttempt] {
        match self {
            Self::NoSuchFile { attempts, .. } => attempts,
        }
    }

    /// Whether any candidate existed but could not be read.
    pub fn saw_permission_denied(&self) -> bool {
        self.attempts()
            .iter()
            .any(|a| a.outcome == ReadOutcome::PermissionDenied)
    }

    /// Multi-line report listing the attempted candidates.
    pub fn report(&self) -> String {
        let base = self.to_string();
        if self.attempts().is_empty() {
            return base;
        }

        let tried: Vec<String> = self
            .attempts()
            .iter()
            .map(|a| format!("  ✗ {}: {}", a.candidate, a.outcome))
            .collect();
        format!("{base}\n\nTried:\n{}", tried.join("\n"))
    }
}

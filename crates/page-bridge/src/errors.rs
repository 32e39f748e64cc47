//! Error types surfaced by bridge implementations.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// High-level error categories a bridge can report.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeErrorKind {
    /// A frame on the requested path could not be resolved.
    #[error("frame unavailable")]
    FrameUnavailable,
    /// The target element never reached the expected state in time.
    #[error("target element not found")]
    TargetNotFound,
    /// Communication with the browser failed.
    #[error("cdp i/o failure")]
    CdpIo,
    /// Should not happen in normal operation.
    #[error("internal error")]
    Internal,
}

/// Enriched error metadata passed back to callers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BridgeError {
    pub kind: BridgeErrorKind,
    pub hint: Option<String>,
    pub retriable: bool,
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(hint) = &self.hint {
            write!(f, ": {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for BridgeError {}

impl BridgeError {
    pub fn new(kind: BridgeErrorKind) -> Self {
        Self {
            kind,
            hint: None,
            retriable: false,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn retriable(mut self, flag: bool) -> Self {
        self.retriable = flag;
        self
    }
}

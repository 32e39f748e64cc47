//! Error types for calendar operations.
//!
//! Validation findings are not errors; they come back inside a
//! [`crate::types::ValidationReport`]. An error here means the check or
//! interaction could not be carried out at all.

use page_bridge::{BridgeError, BridgeErrorKind};
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum CalendarError {
    /// A required control or cell never reached the expected state in time.
    #[error("not found: {0}")]
    NotFound(String),

    /// No selectable (future-or-today) cell exists in the grid.
    #[error("no selectable date available in the calendar grid")]
    NoAvailableDate,

    /// The underlying page bridge failed.
    #[error("bridge failure: {0}")]
    Bridge(String),
}

impl CalendarError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CalendarError::Bridge(_))
    }
}

pub(crate) fn map_bridge_error(err: BridgeError) -> CalendarError {
    match err.kind {
        BridgeErrorKind::TargetNotFound | BridgeErrorKind::FrameUnavailable => {
            CalendarError::NotFound(err.to_string())
        }
        BridgeErrorKind::CdpIo | BridgeErrorKind::Internal => {
            CalendarError::Bridge(err.to_string())
        }
    }
}

use thiserror::Error;

use crate::status::ProtocolStatus;

/// Why a process number could not be classified.
///
/// Callers that only need the auto-fill contract should use
/// [`extract_tribunal_info`](crate::extract_tribunal_info), which collapses
/// both variants into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CnjError {
    #[error("not a CNJ process number: {0:?}")]
    InvalidFormat(String),

    #[error("unknown court: justice branch {branch}, court code {court}")]
    UnknownCourt { branch: String, court: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown tribunal system: {0}")]
    UnknownSystem(String),

    #[error("unknown jurisdiction: {0}")]
    UnknownJurisdiction(String),

    #[error("unknown protocol status: {0}")]
    UnknownStatus(String),

    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: ProtocolStatus,
        to: ProtocolStatus,
    },
}

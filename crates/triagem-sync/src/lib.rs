//! Sync layer: HTTP client for the protocol service.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{ProtocolClient, SyncError};

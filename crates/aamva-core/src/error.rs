//! Error types for the proofer core

use thiserror::Error;

/// Structural errors raised before any verification decision is made.
///
/// Attribute-level verification failures are never errors; they are
/// recorded as [`crate::ErrorCode`]s on a [`crate::ProofResult`].
#[derive(Error, Debug)]
pub enum AamvaError {
    #[error("Invalid applicant data: {0}")]
    InvalidInput(String),

    #[error("Invalid verification response: {0}")]
    InvalidResponse(String),
}

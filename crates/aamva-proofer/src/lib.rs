//! AAMVA Proofer
//!
//! Verifies state-issued ID attributes against the AAMVA verification
//! service and folds the per-attribute response into a [`ProofResult`].

pub mod client;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod proofer;

pub use aamva_core::{ErrorCode, ProofResult};
pub use client::{HttpVerificationClient, VerificationClient, VerificationResponse};
pub use config::ProoferConfig;
pub use error::ProoferError;
pub use interpreter::{interpret, interpret_json, resolve_name_field};
pub use proofer::Proofer;

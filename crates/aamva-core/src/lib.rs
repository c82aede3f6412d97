//! AAMVA Core
//!
//! Core domain types for the AAMVA state ID proofer.
//! This crate defines the applicant records sent to the verification
//! authority, the per-attribute outcomes it returns, and the proof
//! result those outcomes are folded into.

pub mod applicant;
pub mod error;
pub mod outcome;
pub mod result;

pub use applicant::{build_applicant, ApplicantData, CanonicalApplicant, StateIdType};
pub use error::AamvaError;
pub use outcome::{Outcome, VerificationOutcomeMap};
pub use result::{ErrorCode, ProofResult};

//! Proofer entry points
//!
//! A [`Proofer`] maps raw applicant data to a canonical applicant, sends it
//! through its [`VerificationClient`], and interprets the response. It keeps
//! no state between calls; concurrent proofs each need their own
//! [`ProofResult`].

use aamva_core::{build_applicant, ProofResult};
use serde_json::Value;

use crate::client::{HttpVerificationClient, VerificationClient};
use crate::config::ProoferConfig;
use crate::error::ProoferError;
use crate::interpreter::interpret;

/// State ID proofer
pub struct Proofer<C> {
    client: C,
}

impl<C: VerificationClient> Proofer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Verify `raw_applicant_data` and record the outcome in `result`.
    ///
    /// Structural problems (malformed applicant data, malformed response,
    /// transport failure) are returned as errors and leave `result`
    /// untouched. Verification failures are recorded in `result`.
    pub async fn aamva_proof(
        &self,
        raw_applicant_data: &Value,
        result: &mut ProofResult,
    ) -> Result<(), ProoferError> {
        let applicant = build_applicant(raw_applicant_data)?;

        tracing::debug!(
            "Sending verification request for applicant {} ({} {})",
            applicant.uuid.as_deref().unwrap_or("-"),
            applicant.state_id_data.state_id_jurisdiction,
            applicant.state_id_data.state_id_type,
        );

        let response = self
            .client
            .send_verification_request(&applicant)
            .await
            .map_err(|e| {
                tracing::warn!("Verification request failed: {}", e);
                e
            })?;

        let failing = interpret(
            response.success,
            &response.verification_results,
            &applicant.requested_attributes(),
            result,
        );

        tracing::info!(
            "Verification {} with {} failing attribute(s)",
            if response.success { "succeeded" } else { "failed" },
            failing
        );

        Ok(())
    }

    /// Verify `raw_applicant_data` into a fresh [`ProofResult`]
    pub async fn proof(&self, raw_applicant_data: &Value) -> Result<ProofResult, ProoferError> {
        let mut result = ProofResult::new();
        self.aamva_proof(raw_applicant_data, &mut result).await?;
        Ok(result)
    }
}

impl Proofer<HttpVerificationClient> {
    /// Create a proofer that talks to the configured verification endpoint
    pub fn from_config(config: &ProoferConfig) -> Result<Self, ProoferError> {
        Ok(Self::new(HttpVerificationClient::new(config)?))
    }
}

//! Verification transport
//!
//! [`VerificationClient`] is the seam between the proofer and whatever
//! carries a request to the verification authority.

use aamva_core::applicant::json_kind;
use aamva_core::{AamvaError, CanonicalApplicant, VerificationOutcomeMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

use crate::config::ProoferConfig;
use crate::error::ProoferError;

/// Response from the verification authority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResponse {
    /// Overall verdict; authoritative when true
    pub success: bool,

    /// Per-attribute outcomes
    pub verification_results: VerificationOutcomeMap,
}

impl VerificationResponse {
    pub fn new(success: bool, verification_results: VerificationOutcomeMap) -> Self {
        Self {
            success,
            verification_results,
        }
    }

    /// Read a response from `{"success": bool, "verification_results": {...}}`
    pub fn from_json(value: &Value) -> Result<Self, AamvaError> {
        let object = value.as_object().ok_or_else(|| {
            AamvaError::InvalidResponse(format!(
                "expected a response object, got {}",
                json_kind(value)
            ))
        })?;

        let success = object
            .get("success")
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                AamvaError::InvalidResponse("missing boolean `success`".to_string())
            })?;

        let results = object.get("verification_results").ok_or_else(|| {
            AamvaError::InvalidResponse("missing `verification_results`".to_string())
        })?;

        Ok(Self::new(success, VerificationOutcomeMap::from_json(results)?))
    }
}

/// Sends verification requests to the authority
#[async_trait::async_trait]
pub trait VerificationClient: Send + Sync {
    async fn send_verification_request(
        &self,
        applicant: &CanonicalApplicant,
    ) -> Result<VerificationResponse, ProoferError>;
}

/// Request envelope posted by [`HttpVerificationClient`]
#[derive(Debug, Serialize)]
struct VerificationRequest<'a> {
    message_id: Uuid,
    requested_at: DateTime<Utc>,
    applicant: &'a CanonicalApplicant,
}

impl<'a> VerificationRequest<'a> {
    fn new(applicant: &'a CanonicalApplicant) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            requested_at: Utc::now(),
            applicant,
        }
    }
}

/// JSON-over-HTTP verification client
pub struct HttpVerificationClient {
    verification_url: url::Url,

    client: reqwest::Client,
}

impl HttpVerificationClient {
    pub fn new(config: &ProoferConfig) -> Result<Self, ProoferError> {
        let verification_url = url::Url::parse(&config.verification_url).map_err(|e| {
            ProoferError::Config(format!(
                "invalid verification_url {:?}: {}",
                config.verification_url, e
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.verification_request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ProoferError::Config(e.to_string()))?;

        Ok(Self {
            verification_url,
            client,
        })
    }

    pub fn verification_url(&self) -> &url::Url {
        &self.verification_url
    }
}

#[async_trait::async_trait]
impl VerificationClient for HttpVerificationClient {
    async fn send_verification_request(
        &self,
        applicant: &CanonicalApplicant,
    ) -> Result<VerificationResponse, ProoferError> {
        let request = VerificationRequest::new(applicant);
        tracing::debug!(
            "Posting verification request {} to {}",
            request.message_id,
            self.verification_url
        );

        let response = self
            .client
            .post(self.verification_url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProoferError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProoferError::Network(format!(
                "verification request {} failed with status {}",
                request.message_id, status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AamvaError::InvalidResponse(e.to_string()))?;

        Ok(VerificationResponse::from_json(&body)?)
    }
}

//! Test utilities for integration tests

#![allow(dead_code)]

use aamva_core::{CanonicalApplicant, VerificationOutcomeMap};
use aamva_proofer::{ProoferError, VerificationClient, VerificationResponse};
use serde_json::{json, Value};
use std::sync::Mutex;

/// Verification client returning a canned response and recording requests
pub struct StubVerificationClient {
    response: Result<VerificationResponse, String>,
    requests: Mutex<Vec<CanonicalApplicant>>,
}

impl StubVerificationClient {
    pub fn responding(success: bool, verification_results: VerificationOutcomeMap) -> Self {
        Self {
            response: Ok(VerificationResponse::new(success, verification_results)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A client whose transport always fails
    pub fn unreachable(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CanonicalApplicant> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl VerificationClient for StubVerificationClient {
    async fn send_verification_request(
        &self,
        applicant: &CanonicalApplicant,
    ) -> Result<VerificationResponse, ProoferError> {
        self.requests.lock().unwrap().push(applicant.clone());
        self.response
            .clone()
            .map_err(ProoferError::Network)
    }
}

pub fn state_id_data() -> Value {
    json!({
        "state_id_number": "1234567890",
        "state_id_jurisdiction": "VA",
        "state_id_type": "drivers_license",
    })
}

pub fn applicant_data() -> Value {
    let mut data = state_id_data();
    let extra = json!({
        "uuid": "7b7c2a4e0f9d4e1b8a3c5d6e7f809112",
        "dob": "19800101",
        "last_name": "Simpson",
        "first_name": "Homer",
        "address1": "123 Street St",
        "city": "Springfield",
        "state": "IL",
        "zipcode": "12345",
    });
    if let (Some(data), Some(extra)) = (data.as_object_mut(), extra.as_object()) {
        data.extend(extra.clone());
    }
    data
}

/// Outcomes for a response where every core attribute matched
pub fn verification_results() -> VerificationOutcomeMap {
    [
        ("state_id_number", true),
        ("dob", true),
        ("last_name", true),
        ("last_name_fuzzy", true),
        ("last_name_fuzzy_alternative", true),
        ("first_name", true),
        ("first_name_fuzzy", true),
        ("first_name_fuzzy_alternative", true),
    ]
    .into_iter()
    .collect()
}

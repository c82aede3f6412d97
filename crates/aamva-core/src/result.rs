//! Proof result accumulator
//!
//! A [`ProofResult`] is owned by the caller and may be shared across the
//! steps of a larger proofing flow. Steps mark it successful or failed and
//! append attribute-level error codes; nothing ever clears it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reason an attribute was not verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Checked by the authority and did not match
    Unverified,
    /// Never checked by the authority
    Missing,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unverified => "UNVERIFIED",
            ErrorCode::Missing => "MISSING",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofResult {
    /// `None` until a proofing step has decided
    #[serde(default, rename = "success")]
    outcome: Option<bool>,

    #[serde(default)]
    errors: BTreeMap<String, Vec<ErrorCode>>,
}

impl ProofResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `code` to the error list of `attribute`
    pub fn add_error(&mut self, attribute: impl Into<String>, code: ErrorCode) {
        self.errors.entry(attribute.into()).or_default().push(code);
    }

    pub fn mark_success(&mut self) {
        self.outcome = Some(true);
    }

    pub fn mark_failed(&mut self) {
        self.outcome = Some(false);
    }

    /// Successful when marked so and no errors were recorded
    pub fn success(&self) -> bool {
        self.outcome == Some(true) && self.errors.is_empty()
    }

    /// Failed when marked so or when any error was recorded
    pub fn failed(&self) -> bool {
        self.outcome == Some(false) || !self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<ErrorCode>> {
        &self.errors
    }

    pub fn errors_for(&self, attribute: &str) -> &[ErrorCode] {
        self.errors
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Caller-facing JSON: `{"success": bool, "errors": {attr: [codes]}}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "success": self.success(),
            "errors": self.errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_result_is_undecided() {
        let result = ProofResult::new();
        assert!(!result.success());
        assert!(!result.failed());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_add_error_preserves_order() {
        let mut result = ProofResult::new();
        result.add_error("dob", ErrorCode::Unverified);
        result.add_error("dob", ErrorCode::Missing);

        assert_eq!(
            result.errors_for("dob"),
            &[ErrorCode::Unverified, ErrorCode::Missing]
        );
        assert!(result.errors_for("zipcode").is_empty());
        assert!(result.failed());
    }

    #[test]
    fn test_errors_override_success_mark() {
        let mut result = ProofResult::new();
        result.add_error("zipcode", ErrorCode::Missing);
        result.mark_success();

        assert!(!result.success());
        assert!(result.failed());
    }

    #[test]
    fn test_to_json() {
        let mut result = ProofResult::new();
        result.mark_failed();
        result.add_error("dob", ErrorCode::Unverified);
        result.add_error("zipcode", ErrorCode::Missing);

        assert_eq!(
            result.to_json(),
            json!({
                "success": false,
                "errors": { "dob": ["UNVERIFIED"], "zipcode": ["MISSING"] },
            })
        );
    }
}

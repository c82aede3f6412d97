//! Applicant types for the proofer
//!
//! Raw applicant data arrives as a loosely keyed JSON object. It is read
//! into [`ApplicantData`], a record of the recognized options, and then
//! restructured into the [`CanonicalApplicant`] the verification request
//! is built from. Values pass through untouched: no trimming, no date
//! parsing, no defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AamvaError;

/// Attribute names the verification authority reports on
pub mod attribute {
    pub const STATE_ID_NUMBER: &str = "state_id_number";
    pub const DOB: &str = "dob";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const ADDRESS1: &str = "address1";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIPCODE: &str = "zipcode";
}

/// Kind of state-issued identity document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateIdType {
    DriversLicense,
    DriversPermit,
    StateIdCard,
}

impl StateIdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateIdType::DriversLicense => "drivers_license",
            StateIdType::DriversPermit => "drivers_permit",
            StateIdType::StateIdCard => "state_id_card",
        }
    }
}

impl std::fmt::Display for StateIdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Applicant data as supplied by the caller.
///
/// Only the state ID triple is required. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantData {
    pub state_id_number: String,

    /// Two-letter code of the issuing jurisdiction (e.g. "VA")
    pub state_id_jurisdiction: String,

    pub state_id_type: StateIdType,

    #[serde(default)]
    pub uuid: Option<String>,

    /// Date of birth, in whatever format the caller collected it
    #[serde(default)]
    pub dob: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub address1: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub zipcode: Option<String>,
}

/// State ID document details carried on the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateIdData {
    pub state_id_number: String,
    pub state_id_jurisdiction: String,
    pub state_id_type: StateIdType,
}

/// The applicant as sent to the verification authority.
///
/// Built once per proof attempt and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalApplicant {
    pub uuid: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<String>,
    pub state_id_data: StateIdData,
    pub address1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
}

impl CanonicalApplicant {
    /// Restructure typed applicant data into a canonical applicant
    pub fn from_applicant_data(data: ApplicantData) -> Self {
        Self {
            uuid: data.uuid,
            first_name: data.first_name,
            last_name: data.last_name,
            dob: data.dob,
            state_id_data: StateIdData {
                state_id_number: data.state_id_number,
                state_id_jurisdiction: data.state_id_jurisdiction,
                state_id_type: data.state_id_type,
            },
            address1: data.address1,
            city: data.city,
            state: data.state,
            zipcode: data.zipcode,
        }
    }

    /// Names of the verifiable attributes this applicant supplies.
    ///
    /// The state ID number is always requested. Jurisdiction, document
    /// type and uuid route the request and are never verified themselves.
    pub fn requested_attributes(&self) -> Vec<&'static str> {
        let optional = [
            (attribute::DOB, &self.dob),
            (attribute::FIRST_NAME, &self.first_name),
            (attribute::LAST_NAME, &self.last_name),
            (attribute::ADDRESS1, &self.address1),
            (attribute::CITY, &self.city),
            (attribute::STATE, &self.state),
            (attribute::ZIPCODE, &self.zipcode),
        ];

        std::iter::once(attribute::STATE_ID_NUMBER)
            .chain(
                optional
                    .into_iter()
                    .filter(|(_, value)| value.is_some())
                    .map(|(name, _)| name),
            )
            .collect()
    }
}

impl From<ApplicantData> for CanonicalApplicant {
    fn from(data: ApplicantData) -> Self {
        Self::from_applicant_data(data)
    }
}

/// Build a canonical applicant from raw applicant data.
///
/// Fails with [`AamvaError::InvalidInput`] when `raw` is not an object, or
/// when it cannot be read as [`ApplicantData`] (missing state ID fields,
/// wrongly typed values, unrecognized document type).
pub fn build_applicant(raw: &Value) -> Result<CanonicalApplicant, AamvaError> {
    if !raw.is_object() {
        return Err(AamvaError::InvalidInput(format!(
            "expected an object, got {}",
            json_kind(raw)
        )));
    }

    let data: ApplicantData = serde_json::from_value(raw.clone())
        .map_err(|e| AamvaError::InvalidInput(e.to_string()))?;

    Ok(data.into())
}

/// Human-readable name of a JSON value's type, for error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state_id_data() -> Value {
        json!({
            "state_id_number": "1234567890",
            "state_id_jurisdiction": "VA",
            "state_id_type": "drivers_license",
        })
    }

    #[test]
    fn test_build_minimal_applicant() {
        let applicant = build_applicant(&state_id_data()).unwrap();

        assert_eq!(applicant.state_id_data.state_id_number, "1234567890");
        assert_eq!(applicant.state_id_data.state_id_jurisdiction, "VA");
        assert_eq!(
            applicant.state_id_data.state_id_type,
            StateIdType::DriversLicense
        );
        assert!(applicant.uuid.is_none());
        assert!(applicant.dob.is_none());
        assert!(applicant.first_name.is_none());
        assert!(applicant.zipcode.is_none());
    }

    #[test]
    fn test_build_full_applicant_passes_values_through() {
        let mut raw = state_id_data();
        let extra = json!({
            "uuid": "abc123",
            "dob": "19800101",
            "last_name": "Simpson",
            "first_name": "Homer",
            "address1": "123 Street St",
            "city": "Springfield",
            "state": "IL",
            "zipcode": "12345",
            "ssn": "ignored",
        });
        raw.as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());

        let applicant = build_applicant(&raw).unwrap();

        assert_eq!(applicant.uuid.as_deref(), Some("abc123"));
        assert_eq!(applicant.dob.as_deref(), Some("19800101"));
        assert_eq!(applicant.first_name.as_deref(), Some("Homer"));
        assert_eq!(applicant.last_name.as_deref(), Some("Simpson"));
        assert_eq!(applicant.address1.as_deref(), Some("123 Street St"));
        assert_eq!(applicant.city.as_deref(), Some("Springfield"));
        assert_eq!(applicant.state.as_deref(), Some("IL"));
        assert_eq!(applicant.zipcode.as_deref(), Some("12345"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let raw = state_id_data();
        assert_eq!(build_applicant(&raw).unwrap(), build_applicant(&raw).unwrap());
    }

    #[test]
    fn test_non_object_is_invalid_input() {
        for raw in [json!(null), json!("VA"), json!([1, 2]), json!(42)] {
            assert!(matches!(
                build_applicant(&raw),
                Err(AamvaError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_missing_state_id_number_is_invalid_input() {
        let raw = json!({
            "state_id_jurisdiction": "VA",
            "state_id_type": "drivers_license",
        });
        assert!(matches!(
            build_applicant(&raw),
            Err(AamvaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_state_id_type_is_invalid_input() {
        let mut raw = state_id_data();
        raw["state_id_type"] = json!("passport");
        assert!(matches!(
            build_applicant(&raw),
            Err(AamvaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_applicant_data_matches_build() {
        let data: ApplicantData = serde_json::from_value(state_id_data()).unwrap();
        let applicant = CanonicalApplicant::from(data);

        assert_eq!(applicant, build_applicant(&state_id_data()).unwrap());
        assert_eq!(applicant.state_id_data.state_id_type.as_str(), "drivers_license");
    }

    #[test]
    fn test_requested_attributes() {
        let mut raw = state_id_data();
        raw["dob"] = json!("19800101");
        raw["zipcode"] = json!("12345");
        raw["uuid"] = json!("abc123");

        let applicant = build_applicant(&raw).unwrap();

        assert_eq!(
            applicant.requested_attributes(),
            vec!["state_id_number", "dob", "zipcode"]
        );
    }
}

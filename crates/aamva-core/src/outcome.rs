//! Verification outcomes
//!
//! The verification authority reports, per attribute, whether it matched,
//! did not match, or was never checked. Name fields also come with two
//! fuzzy-match auxiliaries (`<field>_fuzzy`, `<field>_fuzzy_alternative`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::applicant::json_kind;
use crate::error::AamvaError;

const FUZZY_SUFFIX: &str = "_fuzzy";
const FUZZY_ALTERNATIVE_SUFFIX: &str = "_fuzzy_alternative";

/// Tri-state outcome for a single attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// The authority checked the attribute and it matched
    Verified,
    /// The authority checked the attribute and it did not match
    Failed,
    /// The authority did not check the attribute
    #[default]
    NotEvaluated,
}

impl Outcome {
    /// Read an outcome from `true`, `false` or `null`
    pub fn from_json(value: &Value) -> Result<Self, AamvaError> {
        match value {
            Value::Bool(true) => Ok(Outcome::Verified),
            Value::Bool(false) => Ok(Outcome::Failed),
            Value::Null => Ok(Outcome::NotEvaluated),
            other => Err(AamvaError::InvalidResponse(format!(
                "expected a boolean or null outcome, got {}",
                json_kind(other)
            ))),
        }
    }

    pub fn as_option(&self) -> Option<bool> {
        match self {
            Outcome::Verified => Some(true),
            Outcome::Failed => Some(false),
            Outcome::NotEvaluated => None,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Outcome::Verified)
    }
}

impl From<Option<bool>> for Outcome {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Outcome::Verified,
            Some(false) => Outcome::Failed,
            None => Outcome::NotEvaluated,
        }
    }
}

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

impl Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<bool>::deserialize(deserializer).map(Outcome::from)
    }
}

/// Whether `name` is a fuzzy-match auxiliary key
pub fn is_fuzzy_key(name: &str) -> bool {
    name.ends_with(FUZZY_SUFFIX) || name.ends_with(FUZZY_ALTERNATIVE_SUFFIX)
}

/// The primary field a fuzzy auxiliary key belongs to.
///
/// Returns `None` for keys that are not fuzzy auxiliaries.
pub fn primary_of(name: &str) -> Option<&str> {
    name.strip_suffix(FUZZY_ALTERNATIVE_SUFFIX)
        .or_else(|| name.strip_suffix(FUZZY_SUFFIX))
}

pub fn fuzzy_key(primary: &str) -> String {
    format!("{}{}", primary, FUZZY_SUFFIX)
}

pub fn fuzzy_alternative_key(primary: &str) -> String {
    format!("{}{}", primary, FUZZY_ALTERNATIVE_SUFFIX)
}

/// Per-attribute outcomes returned by the verification authority.
///
/// Read-only once built. An explicit `null` reads as
/// [`Outcome::NotEvaluated`] but the key still counts as present, which
/// matters for name fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationOutcomeMap(BTreeMap<String, Outcome>);

impl VerificationOutcomeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a map from a JSON object of `true` / `false` / `null` values
    pub fn from_json(value: &Value) -> Result<Self, AamvaError> {
        let object = value.as_object().ok_or_else(|| {
            AamvaError::InvalidResponse(format!(
                "expected an object of outcomes, got {}",
                json_kind(value)
            ))
        })?;

        object
            .iter()
            .map(|(name, outcome)| {
                Outcome::from_json(outcome)
                    .map(|o| (name.clone(), o))
                    .map_err(|e| AamvaError::InvalidResponse(format!("{}: {}", name, e)))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Self)
    }

    pub fn insert(&mut self, name: impl Into<String>, outcome: impl Into<Outcome>) {
        self.0.insert(name.into(), outcome.into());
    }

    /// Outcome for `name`; absent keys are [`Outcome::NotEvaluated`]
    pub fn get(&self, name: &str) -> Outcome {
        self.lookup(name).unwrap_or_default()
    }

    /// Outcome for `name`, or `None` when the key is absent
    pub fn lookup(&self, name: &str) -> Option<Outcome> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Attribute names in key order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, O> FromIterator<(K, O)> for VerificationOutcomeMap
where
    K: Into<String>,
    O: Into<Outcome>,
{
    fn from_iter<I: IntoIterator<Item = (K, O)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, o)| (k.into(), o.into()))
                .collect(),
        )
    }
}

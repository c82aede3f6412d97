//! Verification response interpretation
//!
//! Turns the authority's overall success flag and per-attribute outcomes
//! into a pass/fail decision plus attribute-level error codes.

use aamva_core::applicant::attribute;
use aamva_core::outcome::{fuzzy_alternative_key, fuzzy_key, is_fuzzy_key, primary_of};
use aamva_core::{AamvaError, ErrorCode, Outcome, ProofResult, VerificationOutcomeMap};
use serde_json::Value;
use std::collections::BTreeSet;

use crate::client::VerificationResponse;

/// Fields the authority also reports fuzzy-match outcomes for
pub const NAME_FIELDS: [&str; 2] = [attribute::FIRST_NAME, attribute::LAST_NAME];

/// Collapse a name field's exact and fuzzy outcomes into one decision.
///
/// Each argument is the outcome reported under that key, or `None` when the
/// key is absent from the response. Verified when any of the three matched.
/// Otherwise the failure is `UNVERIFIED` if at least one key is present,
/// whatever its value, and `MISSING` if none is.
pub fn resolve_name_field(
    primary: Option<Outcome>,
    fuzzy: Option<Outcome>,
    fuzzy_alternative: Option<Outcome>,
) -> (bool, Option<ErrorCode>) {
    let outcomes = [primary, fuzzy, fuzzy_alternative];

    if outcomes.iter().flatten().any(Outcome::is_verified) {
        (true, None)
    } else if outcomes.iter().any(Option::is_some) {
        (false, Some(ErrorCode::Unverified))
    } else {
        (false, Some(ErrorCode::Missing))
    }
}

fn resolve_attribute(outcome: Outcome) -> Option<ErrorCode> {
    match outcome {
        Outcome::Verified => None,
        Outcome::Failed => Some(ErrorCode::Unverified),
        Outcome::NotEvaluated => Some(ErrorCode::Missing),
    }
}

fn attribute_error(name: &str, outcomes: &VerificationOutcomeMap) -> Option<ErrorCode> {
    if NAME_FIELDS.contains(&name) {
        let (_, reason) = resolve_name_field(
            outcomes.lookup(name),
            outcomes.lookup(&fuzzy_key(name)),
            outcomes.lookup(&fuzzy_alternative_key(name)),
        );
        reason
    } else {
        resolve_attribute(outcomes.get(name))
    }
}

/// Attributes to examine: everything requested plus everything the
/// authority reported on. Fuzzy keys stand in for their name field and
/// are never examined on their own.
fn examined_attributes<'a>(
    outcomes: &'a VerificationOutcomeMap,
    requested: &[&'a str],
) -> BTreeSet<&'a str> {
    let reported = outcomes.names().filter_map(|name| {
        if is_fuzzy_key(name) {
            primary_of(name).filter(|primary| NAME_FIELDS.contains(primary))
        } else {
            Some(name)
        }
    });

    requested.iter().copied().chain(reported).collect()
}

/// Fold a verification response into `result`.
///
/// An overall success is authoritative: the result is marked successful
/// and no attribute is examined. Otherwise the result is marked failed and
/// every examined attribute that did not verify gets exactly one code
/// appended.
///
/// Returns the number of attributes this call recorded as failing, which
/// excludes errors `result` already carried from earlier steps.
pub fn interpret(
    overall_success: bool,
    outcomes: &VerificationOutcomeMap,
    requested: &[&str],
    result: &mut ProofResult,
) -> usize {
    if overall_success {
        result.mark_success();
        return 0;
    }

    result.mark_failed();

    let mut failing = 0;
    for name in examined_attributes(outcomes, requested) {
        if let Some(code) = attribute_error(name, outcomes) {
            result.add_error(name, code);
            failing += 1;
        }
    }
    failing
}

/// Interpret a response given as JSON:
/// `{"success": bool, "verification_results": {...}}`.
///
/// The response is fully validated before `result` is touched.
pub fn interpret_json(
    response: &Value,
    requested: &[&str],
    result: &mut ProofResult,
) -> Result<usize, AamvaError> {
    let response = VerificationResponse::from_json(response)?;
    Ok(interpret(
        response.success,
        &response.verification_results,
        requested,
        result,
    ))
}

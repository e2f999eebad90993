//! The shared translate capability.
//!
//! Every translator in this crate runs the same linear decision chain:
//!
//! ```text
//! translate(record)
//!   absent input                → None
//!   shape validation fails      → None   (debug log)
//!   urn outside the family      → panic  (routing defect)
//!   unresolvable reference      → None   (debug log)
//!   undecodable payload         → panic  (validation vouched for it)
//!   ok                          → Some(CounterUpdate)
//! ```
//!
//! The two panic exits are the only ones allowed to escalate. Everything
//! else absorbs to "nothing to report this call": a batch reporter must
//! not crash a pipeline over a single unreportable sample.

use millrace_counters::{CounterUpdate, NameContext, NameResolver};
use millrace_monitoring::encoding::CodecError;
use millrace_monitoring::{MonitoringRecord, ShapeValidator};

/// Translates one monitoring record into at most one counter update.
///
/// `None` input is the pipeline's no-op marker and always yields `None`.
/// Calls are pure given the resolver table contents at call time: no
/// retained state, no side effects beyond debug logs.
///
/// # Panics
///
/// Implementations panic when a record outside their urn family reaches
/// them and when a validated record carries an undecodable payload. Both
/// mean the embedding pipeline is miswired, and the failure must reach
/// whoever wired it.
pub trait RecordTranslator: Send + Sync {
    fn translate(&self, record: Option<&MonitoringRecord>) -> Option<CounterUpdate>;
}

/// Runs the injected validator, absorbing a rejection.
pub(crate) fn shape_ok(validator: &dyn ShapeValidator, record: &MonitoringRecord) -> bool {
    match validator.validate(record) {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!(
                urn = %record.urn,
                %error,
                "dropping record that failed shape validation"
            );
            false
        }
    }
}

/// Enforces a prefix family check. Runs after validation so that a
/// rejected record never panics, whatever its urn.
pub(crate) fn check_family(record: &MonitoringRecord, family_prefix: &str) {
    if !record.urn.starts_with(family_prefix) {
        panic!(
            "unexpected urn {:?}, expected a record in the {family_prefix:?} family",
            record.urn
        );
    }
}

/// Exact-urn variant of [`check_family`] for single-urn families.
pub(crate) fn check_urn(record: &MonitoringRecord, expected: &str) {
    if record.urn != expected {
        panic!("unexpected urn {:?}, expected {expected:?}", record.urn);
    }
}

/// Looks up the naming context behind a reference label.
///
/// A missing label or an unknown reference is expected (the step or
/// collection may have been pruned or fused away upstream) and absorbs
/// to `None`.
pub(crate) fn resolve_reference(
    resolver: &dyn NameResolver,
    record: &MonitoringRecord,
    label: &str,
) -> Option<NameContext> {
    let Some(reference) = record.label(label) else {
        tracing::debug!(urn = %record.urn, label, "record carries no reference label");
        return None;
    };
    match resolver.resolve(reference) {
        Some(context) => Some(context),
        None => {
            tracing::debug!(
                urn = %record.urn,
                reference,
                "reference is not a known step or collection"
            );
            None
        }
    }
}

/// Reads a label whose presence the validator has already vouched for.
pub(crate) fn required_label<'a>(record: &'a MonitoringRecord, label: &str) -> &'a str {
    match record.label(label) {
        Some(value) => value,
        None => panic!(
            "validated record {} is missing the required label {label}",
            record.urn
        ),
    }
}

/// Unwraps a payload decode the validator has already vouched for.
pub(crate) fn decode_payload<T>(result: Result<T, CodecError>, record: &MonitoringRecord) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!(
            "validated record {} carries an undecodable payload: {error}",
            record.urn
        ),
    }
}

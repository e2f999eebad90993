//! Urn vocabulary of the monitoring protocol and the per-family shape
//! table.

use crate::labels;

// ── Metric family urns ─────────────────────────────────────────────

/// User-defined sum counters. Matched as a prefix.
///
/// Careful: this string is itself a prefix of [`USER_DISTRIBUTION`], so
/// any prefix scan over families must test the distribution family first.
pub const USER: &str = "millrace:metric:user";

/// User-defined distributions (count/sum/min/max). Matched as a prefix.
pub const USER_DISTRIBUTION: &str = "millrace:metric:user_distribution";

/// Elements flowing through a collection. Exact match.
pub const ELEMENT_COUNT: &str = "millrace:metric:element_count:v1";

/// Sampled encoded sizes of a collection's elements. Exact match.
pub const SAMPLED_BYTE_SIZE: &str = "millrace:metric:sampled_byte_size:v1";

/// Wall-clock milliseconds a step spent starting bundles. Exact match.
pub const START_BUNDLE_MSECS: &str = "millrace:metric:step_execution_time:start_bundle_msecs:v1";

/// Wall-clock milliseconds a step spent processing bundles. Exact match.
pub const PROCESS_BUNDLE_MSECS: &str =
    "millrace:metric:step_execution_time:process_bundle_msecs:v1";

/// Wall-clock milliseconds a step spent finishing bundles. Exact match.
pub const FINISH_BUNDLE_MSECS: &str = "millrace:metric:step_execution_time:finish_bundle_msecs:v1";

// ── Payload type urns ──────────────────────────────────────────────

/// A single varint-encoded `i64`.
pub const SUM_INT64_TYPE: &str = "millrace:metrics:sum_int64:v1";

/// Four varint-encoded `i64`s: count, sum, min, max.
pub const DISTRIBUTION_INT64_TYPE: &str = "millrace:metrics:distribution_int64:v1";

// ── Shape table ────────────────────────────────────────────────────

/// Expected shape of one metric family: which payload encoding it carries
/// and which labels must be present.
#[derive(Debug, Clone, Copy)]
pub struct RecordShape {
    /// Family selector; a record belongs to the first entry whose prefix
    /// matches its urn.
    pub urn_prefix: &'static str,
    /// Payload-type urn the family's records must declare.
    pub type_urn: &'static str,
    /// Labels every record of the family must carry.
    pub required_labels: &'static [&'static str],
}

/// Shapes of the built-in families.
///
/// Order matters: lookups take the first prefix match, and the
/// user-distribution entry must precede the plain user entry because its
/// urn contains the shorter prefix.
pub const SHAPES: &[RecordShape] = &[
    RecordShape {
        urn_prefix: USER_DISTRIBUTION,
        type_urn: DISTRIBUTION_INT64_TYPE,
        required_labels: &[labels::NAME, labels::NAMESPACE, labels::PTRANSFORM],
    },
    RecordShape {
        urn_prefix: USER,
        type_urn: SUM_INT64_TYPE,
        required_labels: &[labels::NAME, labels::NAMESPACE, labels::PTRANSFORM],
    },
    RecordShape {
        urn_prefix: ELEMENT_COUNT,
        type_urn: SUM_INT64_TYPE,
        required_labels: &[labels::PCOLLECTION],
    },
    RecordShape {
        urn_prefix: SAMPLED_BYTE_SIZE,
        type_urn: DISTRIBUTION_INT64_TYPE,
        required_labels: &[labels::PCOLLECTION],
    },
    RecordShape {
        urn_prefix: "millrace:metric:step_execution_time",
        type_urn: SUM_INT64_TYPE,
        required_labels: &[labels::PTRANSFORM],
    },
];

/// Returns the shape governing `urn`, or `None` for families outside the
/// built-in table.
pub fn shape_for(urn: &str) -> Option<&'static RecordShape> {
    SHAPES.iter().find(|shape| urn.starts_with(shape.urn_prefix))
}

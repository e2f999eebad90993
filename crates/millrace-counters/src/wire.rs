//! Backend JSON shape for counter updates.
//!
//! The reporting backend predates 64-bit JSON numbers and takes every
//! 64-bit value as a [`SplitInt64`] pair of 32-bit halves. That split is
//! purely a transport encoding, so it lives here and nowhere else; the
//! domain model in [`crate::update`] never sees it.
//!
//! A wire update carries exactly one value field (`integer`,
//! `integerMean` or `distribution`) and exactly one name field
//! (`structuredNameAndMetadata` or `nameAndKind`). The [`From`]
//! conversion below is the only constructor, which keeps that invariant
//! out of callers' hands.

use serde::{Deserialize, Serialize};

use crate::update::{self, CounterKind, CounterName, CounterOrigin, CounterValue};

/// 64-bit integer split into halves: sign lives in `high_bits`, the low
/// word is the raw bottom 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitInt64 {
    pub high_bits: i32,
    pub low_bits: u32,
}

impl From<i64> for SplitInt64 {
    fn from(value: i64) -> Self {
        Self {
            high_bits: (value >> 32) as i32,
            low_bits: value as u32,
        }
    }
}

impl From<SplitInt64> for i64 {
    fn from(split: SplitInt64) -> Self {
        (i64::from(split.high_bits) << 32) | i64::from(split.low_bits)
    }
}

/// Top-level wire record, one per counter sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterUpdate {
    pub cumulative: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer: Option<SplitInt64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_mean: Option<IntegerMean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<DistributionUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_name_and_metadata: Option<StructuredNameAndMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_and_kind: Option<NameAndKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerMean {
    pub count: SplitInt64,
    pub sum: SplitInt64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionUpdate {
    pub count: SplitInt64,
    pub sum: SplitInt64,
    pub min: SplitInt64,
    pub max: SplitInt64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredNameAndMetadata {
    pub name: StructuredName,
    pub metadata: CounterMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredName {
    pub name: String,
    pub origin: CounterOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_step_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_step_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterMetadata {
    pub kind: CounterKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAndKind {
    pub name: String,
    pub kind: CounterKind,
}

impl From<&update::CounterUpdate> for CounterUpdate {
    fn from(update: &update::CounterUpdate) -> Self {
        let (integer, integer_mean, distribution) = match &update.value {
            CounterValue::Integer(value) => (Some(SplitInt64::from(*value)), None, None),
            CounterValue::IntegerMean { count, sum } => (
                None,
                Some(IntegerMean {
                    count: SplitInt64::from(*count),
                    sum: SplitInt64::from(*sum),
                }),
                None,
            ),
            CounterValue::Distribution(value) => (
                None,
                None,
                Some(DistributionUpdate {
                    count: SplitInt64::from(value.count),
                    sum: SplitInt64::from(value.sum),
                    min: SplitInt64::from(value.min),
                    max: SplitInt64::from(value.max),
                }),
            ),
        };

        let (structured_name_and_metadata, name_and_kind) = match &update.name {
            CounterName::Structured(structured) => (
                Some(StructuredNameAndMetadata {
                    name: StructuredName {
                        name: structured.name.clone(),
                        origin: structured.origin,
                        origin_namespace: structured.origin_namespace.clone(),
                        original_step_name: structured.original_step_name.clone(),
                        execution_step_name: structured.execution_step_name.clone(),
                    },
                    metadata: CounterMetadata { kind: update.kind },
                }),
                None,
            ),
            CounterName::Flat { name } => (
                None,
                Some(NameAndKind {
                    name: name.clone(),
                    kind: update.kind,
                }),
            ),
        };

        CounterUpdate {
            cumulative: update.cumulative,
            integer,
            integer_mean,
            distribution,
            structured_name_and_metadata,
            name_and_kind,
        }
    }
}

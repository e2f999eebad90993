//! Domain counter-update model.
//!
//! Values here are native `i64`. The backend's split-integer encoding is
//! a wire concern and stays inside [`crate::wire`]; nothing in this
//! module knows 64-bit values ever travel in halves.

use serde::{Deserialize, Serialize};

use crate::wire;

/// Aggregation the backend applies when folding successive updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterKind {
    Sum,
    Mean,
    Distribution,
}

impl CounterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CounterKind::Sum => "SUM",
            CounterKind::Mean => "MEAN",
            CounterKind::Distribution => "DISTRIBUTION",
        }
    }
}

/// Who defined the metric behind an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterOrigin {
    User,
    System,
}

impl CounterOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            CounterOrigin::User => "USER",
            CounterOrigin::System => "SYSTEM",
        }
    }
}

/// Fully attributed counter name.
///
/// User metrics and per-step system metrics are structured; legacy
/// whole-job counters stay flat strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterName {
    Structured(StructuredName),
    Flat { name: String },
}

/// Structured name: the metric's own name plus the step attribution the
/// backend groups by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredName {
    pub name: String,
    pub origin: CounterOrigin,
    pub origin_namespace: Option<String>,
    pub original_step_name: Option<String>,
    pub execution_step_name: Option<String>,
}

/// The sampled value, shaped by the counter kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterValue {
    Integer(i64),
    IntegerMean { count: i64, sum: i64 },
    Distribution(DistributionValue),
}

/// Count/sum/min/max summary of a distribution metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionValue {
    pub count: i64,
    pub sum: i64,
    pub min: i64,
    pub max: i64,
}

/// One counter sample, ready for the backend once converted to wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterUpdate {
    /// True when the value is a running total, false for a delta.
    pub cumulative: bool,
    pub kind: CounterKind,
    pub name: CounterName,
    pub value: CounterValue,
}

impl CounterUpdate {
    /// Projects this update into the backend's JSON shape.
    pub fn to_wire(&self) -> wire::CounterUpdate {
        wire::CounterUpdate::from(self)
    }
}

//! The generic monitoring record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One urn-tagged metric observation, as emitted by a worker's metrics
/// pipeline after aggregation.
///
/// The record is deliberately shapeless: which labels must be present and
/// how the payload decodes depend entirely on the family named by `urn`.
/// Consumers check the former with a [`crate::ShapeValidator`] and use the
/// [`crate::encoding`] codecs for the latter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringRecord {
    /// Metric-family identifier, e.g. `millrace:metric:user_distribution`.
    pub urn: String,
    /// Payload-encoding identifier, e.g.
    /// `millrace:metrics:distribution_int64:v1`. Checked by validators,
    /// never consulted when decoding (the family already fixes the codec).
    pub type_urn: String,
    /// String labels. Keys are unique; which ones are required depends on
    /// the family.
    pub labels: HashMap<String, String>,
    /// Opaque payload bytes.
    pub payload: Vec<u8>,
}

impl MonitoringRecord {
    /// Creates a record with no labels and an empty payload.
    pub fn new(urn: impl Into<String>, type_urn: impl Into<String>) -> Self {
        Self {
            urn: urn.into(),
            type_urn: type_urn.into(),
            labels: HashMap::new(),
            payload: Vec::new(),
        }
    }

    /// Adds one label, replacing any previous value for the key.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Sets the payload bytes.
    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Looks up one label value.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

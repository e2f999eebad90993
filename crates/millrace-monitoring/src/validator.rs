//! Shape validation for monitoring records.

use crate::record::MonitoringRecord;
use crate::urns;

/// Checks that a record matches the label/payload schema its urn declares.
///
/// Validation is a data-quality gate, not an access-control one: consumers
/// drop records that fail it and keep going. Implementations are shared
/// across worker threads, so they must be immutable or internally
/// synchronized.
pub trait ShapeValidator: Send + Sync {
    /// Returns a description of the first problem found, or `Ok(())` for
    /// records this validator has no complaint about.
    fn validate(&self, record: &MonitoringRecord) -> Result<(), String>;
}

/// Table-driven validator covering the built-in metric families.
///
/// A record outside the table passes unexamined: upstream components emit
/// a superset of the families this engine reports, and unknown families
/// are dropped later by routing, not flagged here as bad data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeTableValidator;

impl ShapeValidator for ShapeTableValidator {
    fn validate(&self, record: &MonitoringRecord) -> Result<(), String> {
        let Some(shape) = urns::shape_for(&record.urn) else {
            return Ok(());
        };

        if record.type_urn != shape.type_urn {
            return Err(format!(
                "record {} must carry payload type {}, found {}",
                record.urn, shape.type_urn, record.type_urn
            ));
        }

        let missing: Vec<&str> = shape
            .required_labels
            .iter()
            .copied()
            .filter(|label| !record.labels.contains_key(*label))
            .collect();
        if !missing.is_empty() {
            return Err(format!(
                "record {} is missing required labels {:?}",
                record.urn, missing
            ));
        }

        Ok(())
    }
}

//! Translators for engine-maintained metrics.
//!
//! Next to user metrics the engine reports three families of its own:
//! per-collection element counts, per-collection sampled byte sizes
//! (reported as a mean), and per-phase execution time for each
//! transform. Collection-scoped counters keep the backend's legacy flat
//! naming scheme (`<system name>-ElementCount`); execution times are
//! structured system counters attributed to both the original transform
//! and the fused stage executing it.

use std::sync::Arc;

use millrace_counters::{
    CounterKind, CounterName, CounterOrigin, CounterUpdate, CounterValue, NameResolver,
    StructuredName,
};
use millrace_monitoring::encoding::{decode_int64_counter, decode_int64_distribution};
use millrace_monitoring::{MonitoringRecord, ShapeValidator, labels, urns};

use crate::translator::{RecordTranslator, check_urn, decode_payload, resolve_reference, shape_ok};

/// Translates `millrace:metric:element_count:v1` records into flat sum
/// counters named after the collection's system name.
pub struct ElementCountTranslator {
    validator: Arc<dyn ShapeValidator>,
    collections: Arc<dyn NameResolver>,
}

impl ElementCountTranslator {
    pub fn new(validator: Arc<dyn ShapeValidator>, collections: Arc<dyn NameResolver>) -> Self {
        Self {
            validator,
            collections,
        }
    }
}

impl RecordTranslator for ElementCountTranslator {
    fn translate(&self, record: Option<&MonitoringRecord>) -> Option<CounterUpdate> {
        let record = record?;
        if !shape_ok(self.validator.as_ref(), record) {
            return None;
        }
        check_urn(record, urns::ELEMENT_COUNT);
        let context = resolve_reference(self.collections.as_ref(), record, labels::PCOLLECTION)?;
        let value = decode_payload(decode_int64_counter(&record.payload), record);

        Some(CounterUpdate {
            cumulative: true,
            kind: CounterKind::Sum,
            name: CounterName::Flat {
                name: format!("{}-ElementCount", context.system_name),
            },
            value: CounterValue::Integer(value),
        })
    }
}

/// Translates `millrace:metric:sampled_byte_size:v1` records. The payload
/// is a full distribution summary; the backend only takes the mean, so
/// min and max are dropped here.
pub struct MeanByteCountTranslator {
    validator: Arc<dyn ShapeValidator>,
    collections: Arc<dyn NameResolver>,
}

impl MeanByteCountTranslator {
    pub fn new(validator: Arc<dyn ShapeValidator>, collections: Arc<dyn NameResolver>) -> Self {
        Self {
            validator,
            collections,
        }
    }
}

impl RecordTranslator for MeanByteCountTranslator {
    fn translate(&self, record: Option<&MonitoringRecord>) -> Option<CounterUpdate> {
        let record = record?;
        if !shape_ok(self.validator.as_ref(), record) {
            return None;
        }
        check_urn(record, urns::SAMPLED_BYTE_SIZE);
        let context = resolve_reference(self.collections.as_ref(), record, labels::PCOLLECTION)?;
        let data = decode_payload(decode_int64_distribution(&record.payload), record);

        Some(CounterUpdate {
            cumulative: true,
            kind: CounterKind::Mean,
            name: CounterName::Flat {
                name: format!("{}-MeanByteCount", context.system_name),
            },
            value: CounterValue::IntegerMean {
                count: data.count,
                sum: data.sum,
            },
        })
    }
}

/// Backend counter name for a bundle-phase execution-time urn.
fn phase_counter_name(urn: &str) -> Option<&'static str> {
    match urn {
        urns::START_BUNDLE_MSECS => Some("start-msecs"),
        urns::PROCESS_BUNDLE_MSECS => Some("process-msecs"),
        urns::FINISH_BUNDLE_MSECS => Some("finish-msecs"),
        _ => None,
    }
}

/// Translates the three `millrace:metric:step_execution_time` families
/// into structured system counters.
pub struct ExecutionTimeTranslator {
    validator: Arc<dyn ShapeValidator>,
    steps: Arc<dyn NameResolver>,
}

impl ExecutionTimeTranslator {
    pub fn new(validator: Arc<dyn ShapeValidator>, steps: Arc<dyn NameResolver>) -> Self {
        Self { validator, steps }
    }
}

impl RecordTranslator for ExecutionTimeTranslator {
    fn translate(&self, record: Option<&MonitoringRecord>) -> Option<CounterUpdate> {
        let record = record?;
        if !shape_ok(self.validator.as_ref(), record) {
            return None;
        }
        let Some(counter_name) = phase_counter_name(&record.urn) else {
            panic!(
                "unexpected urn {:?}, expected a step execution time record",
                record.urn
            );
        };
        let context = resolve_reference(self.steps.as_ref(), record, labels::PTRANSFORM)?;
        let value = decode_payload(decode_int64_counter(&record.payload), record);

        Some(CounterUpdate {
            cumulative: true,
            kind: CounterKind::Sum,
            name: CounterName::Structured(StructuredName {
                name: counter_name.to_string(),
                origin: CounterOrigin::System,
                origin_namespace: None,
                original_step_name: Some(context.original_name),
                execution_step_name: Some(context.stage_name),
            }),
            value: CounterValue::Integer(value),
        })
    }
}

//! Translators for user-defined metrics.
//!
//! Pipeline authors register named counters and distributions under a
//! namespace of their choosing; workers report samples against the
//! transform that owns them. Two families share the decision chain in
//! [`crate::translator`]: plain sum counters (`millrace:metric:user`)
//! and distribution summaries (`millrace:metric:user_distribution`).
//! The distribution urn contains the counter urn as a prefix, so any
//! prefix scan over the two must test the distribution family first;
//! [`crate::dispatch`] does.

use std::sync::Arc;

use millrace_counters::{
    CounterKind, CounterName, CounterOrigin, CounterUpdate, CounterValue, DistributionValue,
    NameContext, NameResolver, StructuredName,
};
use millrace_monitoring::encoding::{decode_int64_counter, decode_int64_distribution};
use millrace_monitoring::{MonitoringRecord, ShapeValidator, labels, urns};

use crate::translator::{
    RecordTranslator, check_family, decode_payload, required_label, resolve_reference, shape_ok,
};

/// Structured name shared by both user families: metric name and
/// namespace from the record's labels, step attribution from the
/// resolved naming context.
fn user_counter_name(record: &MonitoringRecord, context: NameContext) -> CounterName {
    CounterName::Structured(StructuredName {
        name: required_label(record, labels::NAME).to_string(),
        origin: CounterOrigin::User,
        origin_namespace: Some(required_label(record, labels::NAMESPACE).to_string()),
        original_step_name: Some(context.original_name),
        execution_step_name: None,
    })
}

/// Translates `millrace:metric:user` sum counters.
pub struct UserCounterTranslator {
    validator: Arc<dyn ShapeValidator>,
    steps: Arc<dyn NameResolver>,
}

impl UserCounterTranslator {
    pub fn new(validator: Arc<dyn ShapeValidator>, steps: Arc<dyn NameResolver>) -> Self {
        Self { validator, steps }
    }
}

impl RecordTranslator for UserCounterTranslator {
    fn translate(&self, record: Option<&MonitoringRecord>) -> Option<CounterUpdate> {
        let record = record?;
        if !shape_ok(self.validator.as_ref(), record) {
            return None;
        }
        check_family(record, urns::USER);
        let context = resolve_reference(self.steps.as_ref(), record, labels::PTRANSFORM)?;
        let value = decode_payload(decode_int64_counter(&record.payload), record);

        Some(CounterUpdate {
            cumulative: true,
            kind: CounterKind::Sum,
            name: user_counter_name(record, context),
            value: CounterValue::Integer(value),
        })
    }
}

/// Translates `millrace:metric:user_distribution` summaries.
pub struct UserDistributionTranslator {
    validator: Arc<dyn ShapeValidator>,
    steps: Arc<dyn NameResolver>,
}

impl UserDistributionTranslator {
    pub fn new(validator: Arc<dyn ShapeValidator>, steps: Arc<dyn NameResolver>) -> Self {
        Self { validator, steps }
    }
}

impl RecordTranslator for UserDistributionTranslator {
    fn translate(&self, record: Option<&MonitoringRecord>) -> Option<CounterUpdate> {
        let record = record?;
        if !shape_ok(self.validator.as_ref(), record) {
            return None;
        }
        check_family(record, urns::USER_DISTRIBUTION);
        let context = resolve_reference(self.steps.as_ref(), record, labels::PTRANSFORM)?;
        let data = decode_payload(decode_int64_distribution(&record.payload), record);

        Some(CounterUpdate {
            cumulative: true,
            kind: CounterKind::Distribution,
            name: user_counter_name(record, context),
            value: CounterValue::Distribution(DistributionValue {
                count: data.count,
                sum: data.sum,
                min: data.min,
                max: data.max,
            }),
        })
    }
}

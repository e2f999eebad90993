//! Urn-keyed routing across the translator set.
//!
//! Upstream hands the worker every monitoring record it produced,
//! whatever the family. The dispatcher picks the translator whose family
//! matches the record's urn and forwards the call. Routing here makes
//! "wrong family" a dispatch-boundary invariant; each translator still
//! keeps its own in-depth family check behind it.

use std::sync::Arc;

use millrace_counters::{CounterUpdate, NameResolver};
use millrace_monitoring::{MonitoringRecord, ShapeValidator, urns};

use crate::system::{ElementCountTranslator, ExecutionTimeTranslator, MeanByteCountTranslator};
use crate::translator::RecordTranslator;
use crate::user::{UserCounterTranslator, UserDistributionTranslator};

/// Routes records to the matching translator by urn.
///
/// Unknown families are not an error: upstream speaks a superset of what
/// this engine reports, so anything unmatched absorbs to `None` with a
/// debug log.
pub struct UrnDispatcher {
    user_counter: UserCounterTranslator,
    user_distribution: UserDistributionTranslator,
    element_count: ElementCountTranslator,
    mean_byte_count: MeanByteCountTranslator,
    execution_time: ExecutionTimeTranslator,
}

impl UrnDispatcher {
    /// Builds the full translator set. All five share the validator;
    /// step-scoped families resolve through `steps`, collection-scoped
    /// families through `collections`.
    pub fn new(
        validator: Arc<dyn ShapeValidator>,
        steps: Arc<dyn NameResolver>,
        collections: Arc<dyn NameResolver>,
    ) -> Self {
        Self {
            user_counter: UserCounterTranslator::new(Arc::clone(&validator), Arc::clone(&steps)),
            user_distribution: UserDistributionTranslator::new(
                Arc::clone(&validator),
                Arc::clone(&steps),
            ),
            element_count: ElementCountTranslator::new(
                Arc::clone(&validator),
                Arc::clone(&collections),
            ),
            mean_byte_count: MeanByteCountTranslator::new(
                Arc::clone(&validator),
                Arc::clone(&collections),
            ),
            execution_time: ExecutionTimeTranslator::new(validator, steps),
        }
    }
}

impl RecordTranslator for UrnDispatcher {
    fn translate(&self, record: Option<&MonitoringRecord>) -> Option<CounterUpdate> {
        let urn = &record?.urn;
        // `user_distribution` starts with the plain `user` urn, so it has
        // to win the prefix scan.
        if urn.starts_with(urns::USER_DISTRIBUTION) {
            return self.user_distribution.translate(record);
        }
        if urn.starts_with(urns::USER) {
            return self.user_counter.translate(record);
        }
        match urn.as_str() {
            urns::ELEMENT_COUNT => self.element_count.translate(record),
            urns::SAMPLED_BYTE_SIZE => self.mean_byte_count.translate(record),
            urns::START_BUNDLE_MSECS | urns::PROCESS_BUNDLE_MSECS | urns::FINISH_BUNDLE_MSECS => {
                self.execution_time.translate(record)
            }
            _ => {
                tracing::debug!(%urn, "no translator for record family");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use millrace_counters::{CounterKind, CounterName, NameContext};
    use millrace_monitoring::encoding::{
        DistributionData, encode_int64_counter, encode_int64_distribution,
    };
    use millrace_monitoring::labels;

    use super::*;

    struct AcceptAll;

    impl ShapeValidator for AcceptAll {
        fn validate(&self, _record: &MonitoringRecord) -> Result<(), String> {
            Ok(())
        }
    }

    fn dispatcher() -> UrnDispatcher {
        let steps = HashMap::from([(
            "s4".to_string(),
            NameContext::new("F12", "transform/FormatPairs", "s4", "Format pairs"),
        )]);
        let collections = HashMap::from([(
            "c7".to_string(),
            NameContext::new("F12", "pairs/Out", "s7-out", "pairs.out"),
        )]);
        UrnDispatcher::new(Arc::new(AcceptAll), Arc::new(steps), Arc::new(collections))
    }

    fn user_record(urn: &str, type_urn: &str, payload: Vec<u8>) -> MonitoringRecord {
        MonitoringRecord::new(urn, type_urn)
            .with_label(labels::NAME, "latency")
            .with_label(labels::NAMESPACE, "pairs")
            .with_label(labels::PTRANSFORM, "s4")
            .with_payload(payload)
    }

    #[test]
    fn absent_input_produces_no_update() {
        assert_eq!(dispatcher().translate(None), None);
    }

    #[test]
    fn distribution_wins_the_prefix_scan_over_plain_user() {
        // The payloads of the two user families differ, so routing a
        // distribution record to the counter translator would not produce
        // a Distribution update. Kind is the routing witness.
        let record = user_record(
            urns::USER_DISTRIBUTION,
            urns::DISTRIBUTION_INT64_TYPE,
            encode_int64_distribution(&DistributionData {
                count: 2,
                sum: 9,
                min: 4,
                max: 5,
            }),
        );
        let update = dispatcher().translate(Some(&record)).unwrap();
        assert_eq!(update.kind, CounterKind::Distribution);
    }

    #[test]
    fn plain_user_urn_routes_to_the_counter_family() {
        let record = user_record(urns::USER, urns::SUM_INT64_TYPE, encode_int64_counter(11));
        let update = dispatcher().translate(Some(&record)).unwrap();
        assert_eq!(update.kind, CounterKind::Sum);
    }

    #[test]
    fn element_count_routes_to_its_flat_counter() {
        let record = MonitoringRecord::new(urns::ELEMENT_COUNT, urns::SUM_INT64_TYPE)
            .with_label(labels::PCOLLECTION, "c7")
            .with_payload(encode_int64_counter(88));
        let update = dispatcher().translate(Some(&record)).unwrap();
        assert_eq!(
            update.name,
            CounterName::Flat {
                name: "s7-out-ElementCount".to_string(),
            }
        );
    }

    #[test]
    fn sampled_byte_size_routes_to_mean_byte_count() {
        let record = MonitoringRecord::new(urns::SAMPLED_BYTE_SIZE, urns::DISTRIBUTION_INT64_TYPE)
            .with_label(labels::PCOLLECTION, "c7")
            .with_payload(encode_int64_distribution(&DistributionData::default()));
        let update = dispatcher().translate(Some(&record)).unwrap();
        assert_eq!(update.kind, CounterKind::Mean);
    }

    #[test]
    fn each_msec_urn_routes_to_execution_time() {
        for urn in [
            urns::START_BUNDLE_MSECS,
            urns::PROCESS_BUNDLE_MSECS,
            urns::FINISH_BUNDLE_MSECS,
        ] {
            let record = MonitoringRecord::new(urn, urns::SUM_INT64_TYPE)
                .with_label(labels::PTRANSFORM, "s4")
                .with_payload(encode_int64_counter(30));
            let update = dispatcher().translate(Some(&record)).unwrap();
            assert!(matches!(update.name, CounterName::Structured(_)));
        }
    }

    #[test]
    fn unknown_family_produces_no_update() {
        let record = MonitoringRecord::new("millrace:metric:gauge:v1", urns::SUM_INT64_TYPE)
            .with_payload(encode_int64_counter(5));
        assert_eq!(dispatcher().translate(Some(&record)), None);
    }
}

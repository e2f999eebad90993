//! Millrace metric translation: monitoring records in, counter updates out.
//!
//! Workers emit one urn-tagged `MonitoringRecord` per metric sample, the
//! same shape for every metric kind. The reporting backend instead wants
//! structurally typed counter updates. This crate sits between the two:
//! a closed set of translators, one per metric family, each turning one
//! record into at most one `CounterUpdate`.
//!
//! # Components
//!
//! - **`translator`** — the `RecordTranslator` capability and the decision
//!   chain every translator runs
//! - **`user`** — user-defined metrics (sum counters, distributions)
//! - **`system`** — engine-maintained metrics (element count, mean byte
//!   count, per-phase execution time)
//! - **`dispatch`** — urn-keyed routing across the translator set

pub mod dispatch;
pub mod system;
pub mod translator;
pub mod user;

pub use dispatch::UrnDispatcher;
pub use system::{ElementCountTranslator, ExecutionTimeTranslator, MeanByteCountTranslator};
pub use translator::RecordTranslator;
pub use user::{UserCounterTranslator, UserDistributionTranslator};

//! millrace-monitoring — the portable monitoring-record representation.
//!
//! Every metric a Millrace worker observes, whatever its kind, travels as
//! the same generic shape: a urn naming the metric family, a payload-type
//! urn naming the encoding, a string-label map, and opaque payload bytes.
//! This crate owns that shape and everything needed to read it:
//!
//! - [`MonitoringRecord`] — the record itself
//! - [`urns`] / [`labels`] — the protocol vocabulary and per-family
//!   shape table
//! - [`encoding`] — varint payload codecs for counter and distribution
//!   values
//! - [`ShapeValidator`] / [`ShapeTableValidator`] — schema checks a
//!   consumer runs before trusting a record's labels and payload
//!
//! Engine-specific consumers (the counter translation layer among them)
//! depend on this crate; nothing here knows about any backend.

pub mod encoding;
pub mod labels;
pub mod record;
pub mod urns;
pub mod validator;

pub use record::MonitoringRecord;
pub use validator::{ShapeTableValidator, ShapeValidator};

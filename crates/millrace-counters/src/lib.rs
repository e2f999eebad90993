//! millrace-counters — the engine-side counter-update model.
//!
//! The backend reporting service accepts structurally typed counter
//! updates, one per metric sample per execution step. This crate owns
//! that model in two layers:
//!
//! - [`update`] — the domain model. Values are native `i64`; names are
//!   enums, not stringly-typed unions.
//! - [`wire`] — the backend's JSON shape: camelCase fields, optional
//!   sections, and every 64-bit value split into 32-bit halves. Produced
//!   from the domain model at the serialization boundary, never consumed
//!   by translation logic.
//!
//! [`names`] carries the step/collection naming contexts the updates are
//! attributed to, behind the read-only [`NameResolver`] capability.

pub mod names;
pub mod update;
pub mod wire;

pub use names::{NameContext, NameResolver};
pub use update::{
    CounterKind, CounterName, CounterOrigin, CounterUpdate, CounterValue, DistributionValue,
    StructuredName,
};

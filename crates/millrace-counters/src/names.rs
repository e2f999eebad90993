//! Execution-graph naming contexts.
//!
//! Pipeline compilation renames everything: a user transform gets an
//! engine-assigned system name, keeps its original graph name, and runs
//! inside a fused stage. Counter attribution needs all of those at once,
//! so lookups hand back the full [`NameContext`] rather than any single
//! alias.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Every name the engine knows a step (or collection) by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameContext {
    /// Fused stage the step executes in.
    pub stage_name: String,
    /// Name the step carried in the original user graph.
    pub original_name: String,
    /// Engine-assigned name, unique across the job.
    pub system_name: String,
    /// Display name the user gave the step.
    pub user_name: String,
}

impl NameContext {
    pub fn new(
        stage_name: impl Into<String>,
        original_name: impl Into<String>,
        system_name: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            stage_name: stage_name.into(),
            original_name: original_name.into(),
            system_name: system_name.into(),
            user_name: user_name.into(),
        }
    }
}

/// Read-only lookup from a graph reference (transform or collection id)
/// to its naming context.
///
/// The owner of the execution graph keeps this current; translation only
/// ever reads through it. A reference that fails to resolve is not an
/// error at this layer, callers decide what an unknown reference means.
pub trait NameResolver: Send + Sync {
    fn resolve(&self, reference: &str) -> Option<NameContext>;
}

impl NameResolver for HashMap<String, NameContext> {
    fn resolve(&self, reference: &str) -> Option<NameContext> {
        self.get(reference).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> NameContext {
        NameContext::new("stage-1", "transform/Read", "s2", "Read input")
    }

    #[test]
    fn map_resolver_returns_known_reference() {
        let mut steps = HashMap::new();
        steps.insert("s2".to_string(), sample_context());

        let resolved = steps.resolve("s2").unwrap();
        assert_eq!(resolved.system_name, "s2");
        assert_eq!(resolved.user_name, "Read input");
    }

    #[test]
    fn map_resolver_misses_unknown_reference() {
        let steps: HashMap<String, NameContext> = HashMap::new();
        assert!(steps.resolve("s99").is_none());
    }
}

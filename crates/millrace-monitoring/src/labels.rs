//! Label keys used by the built-in metric families.

/// Step reference: the pipeline transform that produced the sample.
pub const PTRANSFORM: &str = "PTRANSFORM";

/// Collection reference: the pipeline collection the sample describes.
pub const PCOLLECTION: &str = "PCOLLECTION";

/// Metric name chosen by the pipeline author.
pub const NAME: &str = "NAME";

/// Namespace the author scoped the metric name under.
pub const NAMESPACE: &str = "NAMESPACE";
